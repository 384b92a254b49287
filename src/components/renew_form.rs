//! Card Renewal Form

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{bind, TextField};
use crate::context::{use_app, Route};
use crate::models::{CardType, NewRenewal};
use crate::validation::{self, FieldErrors};

fn validate_renewal(renewal: &NewRenewal) -> Result<NewRenewal, FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("card_number", validation::required(&renewal.card_number, "Card number"));
    errors.check("full_name", validation::required(&renewal.full_name, "Full name"));
    errors.check("email", validation::email(&renewal.email));
    errors.into_result()?;
    Ok(NewRenewal {
        card_number: renewal.card_number.trim().to_uppercase(),
        full_name: renewal.full_name.trim().to_string(),
        email: renewal.email.trim().to_string(),
    })
}

#[component]
pub fn RenewForm(card_type: CardType) -> impl IntoView {
    let ctx = use_app();
    let draft = RwSignal::new(NewRenewal::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (sending, set_sending) = signal(false);
    let (done, set_done) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let renewal = match draft.with_untracked(validate_renewal) {
            Ok(renewal) => renewal,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_sending.set(true);
        spawn_local(async move {
            let result = ApiClient::from_browser().submit_renewal(card_type, &renewal).await;
            set_sending.set(false);
            match result {
                Ok(_) => set_done.set(true),
                Err(e) => {
                    log::error!("[renew] Submission failed: {}", e);
                    ctx.toast_err(format!("We could not submit your renewal: {}", e));
                }
            }
        });
    };

    let (card_number, on_card_number) = bind(draft, |d| &d.card_number, |d| &mut d.card_number);
    let (full_name, on_full_name) = bind(draft, |d| &d.full_name, |d| &mut d.full_name);
    let (email, on_email) = bind(draft, |d| &d.email, |d| &mut d.email);

    view! {
        <section class="form-page">
            <h1>{format!("Renew your {}", card_type.label())}</h1>
            <div class="tabs">
                {CardType::ALL
                    .into_iter()
                    .map(|other| {
                        view! {
                            <button
                                class=if other == card_type { "tab active" } else { "tab" }
                                on:click=move |_| ctx.navigate(Route::Renew(other))
                            >
                                {other.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || done.get()
                fallback=move || {
                    view! {
                        <form on:submit=submit>
                            <TextField
                                label="Card number"
                                field="card_number"
                                value=card_number
                                on_input=on_card_number
                                errors=errors
                            />
                            <TextField
                                label="Full name"
                                field="full_name"
                                value=full_name
                                on_input=on_full_name
                                errors=errors
                            />
                            <TextField
                                label="Email"
                                field="email"
                                input_type="email"
                                value=email
                                on_input=on_email
                                errors=errors
                            />
                            <button class="btn primary" type="submit" disabled=move || sending.get()>
                                {move || if sending.get() { "Sending..." } else { "Request renewal" }}
                            </button>
                        </form>
                    }
                }
            >
                <div class="success-panel">
                    <h2>"Renewal requested"</h2>
                    <p>"We will be in touch by email with your new card details."</p>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renewal_validation() {
        let errors = validate_renewal(&NewRenewal::default()).unwrap_err();
        assert_eq!(errors.len(), 3);

        let renewal = validate_renewal(&NewRenewal {
            card_number: " dc1234 ".into(),
            full_name: "Ann Lee".into(),
            email: "ann@example.org".into(),
        })
        .unwrap();
        assert_eq!(renewal.card_number, "DC1234");
    }
}
