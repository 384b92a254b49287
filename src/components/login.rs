//! Admin Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app, AdminRoute};
use crate::notifications::use_notifications;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let notes = use_notifications();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set(Some("Enter your email and password".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = ApiClient::from_browser().login(email.trim(), &password).await;
            set_busy.set(false);
            match result {
                Ok(response) => {
                    session.sign_in(&response.token);
                    notes.refresh();
                    ctx.admin(AdminRoute::Dashboard);
                }
                Err(e) => {
                    log::warn!("[session] Login failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Admin sign in"</h1>
                <label class="field">
                    <span class="field-label">"Email"</span>
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button class="btn primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
