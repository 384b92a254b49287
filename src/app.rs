//! Benefits Portal Frontend App
//!
//! Root component: provides the shared context, starts badge polling and
//! renders the page for the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActivityLogPage, ApplicationDetail, ApplicationsPage, ApplyWizard, ContactAdminPage, ContactForm,
    DashboardPage, DonationsAdminPage, HomePage, LanyardWizard, LoginPage, PartnerDirectory, PartnersAdminPage,
    PublicLayout, RenewForm, RenewalsAdminPage, ToastStack,
};
use crate::config::config;
use crate::context::{AdminRoute, AppContext, Route};
use crate::notifications::NotificationCenter;
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

fn admin_page(route: AdminRoute) -> AnyView {
    match route {
        AdminRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AdminRoute::Applications(card_type) => view! { <ApplicationsPage card_type=card_type /> }.into_any(),
        AdminRoute::Application(card_type, id) => view! { <ApplicationDetail card_type=card_type id=id /> }.into_any(),
        AdminRoute::Renewals(card_type) => view! { <RenewalsAdminPage card_type=card_type /> }.into_any(),
        AdminRoute::Partners => view! { <PartnersAdminPage /> }.into_any(),
        AdminRoute::Donations => view! { <DonationsAdminPage /> }.into_any(),
        AdminRoute::Contact => view! { <ContactAdminPage /> }.into_any(),
        AdminRoute::Activity => view! { <ActivityLogPage /> }.into_any(),
    }
}

fn public_page(route: Route) -> AnyView {
    let page = match route {
        Route::Apply(card_type) => view! { <ApplyWizard card_type=card_type /> }.into_any(),
        Route::Lanyard => view! { <LanyardWizard /> }.into_any(),
        Route::Renew(card_type) => view! { <RenewForm card_type=card_type /> }.into_any(),
        Route::Partners => view! { <PartnerDirectory /> }.into_any(),
        Route::Contact => view! { <ContactForm /> }.into_any(),
        _ => view! { <HomePage /> }.into_any(),
    };
    view! { <PublicLayout>{page}</PublicLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(storage::admin_token().is_some()));
    provide_context(store);

    let ctx = AppContext::new(signal(Route::Home));
    provide_context(ctx);

    let notes = NotificationCenter::new(store);
    provide_context(notes);
    notes.start_polling(config().poll_interval);

    log::info!("[app] Started; API base {:?}", config().api_base_url);

    view! {
        {move || match ctx.route.get() {
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Admin(route) if store.signed_in().get() => admin_page(route),
            Route::Admin(_) => view! { <LoginPage /> }.into_any(),
            route => public_page(route),
        }}
        <ToastStack />
    }
}
