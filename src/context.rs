//! Application Context
//!
//! Shared state provided via Leptos Context API: the current route and the
//! toast queue.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::CardType;

/// Public site pages
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Home,
    Apply(CardType),
    Lanyard,
    Renew(CardType),
    Partners,
    Contact,
    Login,
    Admin(AdminRoute),
}

/// Back-office pages (require a stored token)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdminRoute {
    Dashboard,
    Applications(CardType),
    Application(CardType, u64),
    Renewals(CardType),
    Partners,
    Donations,
    Contact,
    Activity,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

const TOAST_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u32>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
        }
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("[nav] {:?}", route);
        self.set_route.set(route);
    }

    pub fn admin(&self, route: AdminRoute) {
        self.navigate(Route::Admin(route));
    }

    pub fn toast_ok(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    pub fn toast_err(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push_toast(&self, kind: ToastKind, message: String) {
        let id = self.next_toast.with_value(|n| *n);
        self.next_toast.set_value(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        let ctx = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            ctx.dismiss(id);
        });
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
