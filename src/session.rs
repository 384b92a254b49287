//! Admin Session
//!
//! Sign-in state and the shared reaction to failed API calls. Grab a
//! [`Session`] while the component is being built; it is `Copy` and safe to
//! move into spawned tasks.

use leptos::prelude::*;

use crate::api::ApiError;
use crate::context::{use_app, AppContext, Route};
use crate::storage;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct Session {
    ctx: AppContext,
    store: AppStore,
}

impl Session {
    pub fn sign_in(&self, token: &str) {
        storage::set_admin_token(token);
        self.store.signed_in().set(true);
        log::info!("[session] Signed in");
    }

    pub fn sign_out(&self) {
        storage::clear_admin_token();
        self.store.signed_in().set(false);
        log::info!("[session] Signed out");
    }

    /// Log and surface a failed call. An auth failure ends the session.
    pub fn report(&self, err: ApiError, action: &str) {
        log::error!("[api] Could not {}: {}", action, err);
        if err.is_unauthorized() {
            self.sign_out();
            self.ctx.toast_err("Your session has expired. Please sign in again.");
            self.ctx.navigate(Route::Login);
        } else {
            self.ctx.toast_err(format!("Could not {}: {}", action, err));
        }
    }

    pub fn toast_ok(&self, message: impl Into<String>) {
        self.ctx.toast_ok(message);
    }
}

pub fn use_session() -> Session {
    Session {
        ctx: use_app(),
        store: use_app_store(),
    }
}
