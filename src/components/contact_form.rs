//! Contact Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{bind, TextField};
use crate::context::use_app;
use crate::models::NewContact;
use crate::validation::{self, FieldErrors};

fn validate_contact(contact: &NewContact) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("name", validation::required(&contact.name, "Name"));
    errors.check("email", validation::email(&contact.email));
    errors.check("subject", validation::required(&contact.subject, "Subject"));
    errors.check("message", validation::min_len(&contact.message, "Message", 10));
    errors.into_result()
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app();
    let draft = RwSignal::new(NewContact::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (sending, set_sending) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let contact = draft.get_untracked();
        if let Err(e) = validate_contact(&contact) {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        set_sending.set(true);
        spawn_local(async move {
            let result = ApiClient::from_browser().submit_contact(&contact).await;
            set_sending.set(false);
            match result {
                Ok(_) => {
                    ctx.toast_ok("Thanks, your message has been sent");
                    draft.set(NewContact::default());
                }
                Err(e) => {
                    log::error!("[contact] Submission failed: {}", e);
                    ctx.toast_err(format!("Your message could not be sent: {}", e));
                }
            }
        });
    };

    let (name, on_name) = bind(draft, |d| &d.name, |d| &mut d.name);
    let (email, on_email) = bind(draft, |d| &d.email, |d| &mut d.email);
    let (subject, on_subject) = bind(draft, |d| &d.subject, |d| &mut d.subject);
    let (message, on_message) = bind(draft, |d| &d.message, |d| &mut d.message);

    view! {
        <section class="form-page">
            <h1>"Contact us"</h1>
            <form on:submit=submit>
                <TextField label="Name" field="name" value=name on_input=on_name errors=errors />
                <TextField label="Email" field="email" input_type="email" value=email on_input=on_email errors=errors />
                <TextField label="Subject" field="subject" value=subject on_input=on_subject errors=errors />
                <TextField
                    label="Message"
                    field="message"
                    multiline=true
                    value=message
                    on_input=on_message
                    errors=errors
                />
                <button class="btn primary" type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_validation() {
        let contact = NewContact {
            name: "Ann".into(),
            email: "ann@example.org".into(),
            subject: "Card".into(),
            message: "short".into(),
        };
        let errors = validate_contact(&contact).unwrap_err();
        assert_eq!(errors.get("message"), Some("Message must be at least 10 characters"));
        assert_eq!(errors.len(), 1);
    }
}
