//! Card Application Wizard
//!
//! Public multi-step application form for one card type.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{bind, TextField, WizardProgress};
use crate::context::{use_app, Route};
use crate::forms::{ApplicationDraft, ApplyStep};
use crate::models::CardType;
use crate::validation::FieldErrors;
use crate::wizard::Wizard;

type Draft = RwSignal<ApplicationDraft>;

#[component]
fn Field(
    draft: Draft,
    errors: RwSignal<FieldErrors>,
    label: &'static str,
    field: &'static str,
    get: fn(&ApplicationDraft) -> &String,
    set: fn(&mut ApplicationDraft) -> &mut String,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let (value, on_input) = bind(draft, get, set);
    match input_type {
        Some(input_type) => view! {
            <TextField
                label=label
                field=field
                value=value
                on_input=on_input
                errors=errors
                input_type=input_type
                multiline=multiline
            />
        }
        .into_any(),
        None => view! {
            <TextField label=label field=field value=value on_input=on_input errors=errors multiline=multiline />
        }.into_any(),
    }
}

#[component]
fn StepFields(step: ApplyStep, draft: Draft, errors: RwSignal<FieldErrors>) -> impl IntoView {
    match step {
        ApplyStep::Personal => view! {
            <Field draft=draft errors=errors label="First name" field="first_name" get={|d| &d.first_name} set={|d| &mut d.first_name} />
            <Field draft=draft errors=errors label="Last name" field="last_name" get={|d| &d.last_name} set={|d| &mut d.last_name} />
            <Field draft=draft errors=errors label="Email" field="email" input_type="email" get={|d| &d.email} set={|d| &mut d.email} />
            <Field draft=draft errors=errors label="Phone" field="phone" input_type="tel" get={|d| &d.phone} set={|d| &mut d.phone} />
            <Field
                draft=draft
                errors=errors
                label="Date of birth"
                field="date_of_birth"
                input_type="date"
                get={|d| &d.date_of_birth}
                set={|d| &mut d.date_of_birth}
            />
        }
        .into_any(),
        ApplyStep::Address => view! {
            <Field
                draft=draft
                errors=errors
                label="Address line 1"
                field="address_line1"
                get={|d| &d.address_line1}
                set={|d| &mut d.address_line1}
            />
            <Field
                draft=draft
                errors=errors
                label="Address line 2 (optional)"
                field="address_line2"
                get={|d| &d.address_line2}
                set={|d| &mut d.address_line2}
            />
            <Field draft=draft errors=errors label="Town or city" field="city" get={|d| &d.city} set={|d| &mut d.city} />
            <Field draft=draft errors=errors label="Postcode" field="postcode" get={|d| &d.postcode} set={|d| &mut d.postcode} />
        }
        .into_any(),
        ApplyStep::Details => view! {
            <Field
                draft=draft
                errors=errors
                label="Tell us how the card would help you"
                field="details"
                multiline=true
                get={|d| &d.details}
                set={|d| &mut d.details}
            />
        }
        .into_any(),
        ApplyStep::Review => {
            let summary = draft.with_untracked(|d| {
                vec![
                    ("Name", format!("{} {}", d.first_name.trim(), d.last_name.trim())),
                    ("Email", d.email.trim().to_string()),
                    ("Phone", d.phone.trim().to_string()),
                    ("Date of birth", d.date_of_birth.clone()),
                    ("Address", format!("{}, {} {}", d.address_line1.trim(), d.city.trim(), d.postcode.trim())),
                ]
            });
            let error = move || errors.with(|e| e.get("consent").map(str::to_string));
            view! {
                <dl class="review">
                    {summary
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.consent)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.consent = checked);
                        }
                    />
                    "I confirm the information above is correct"
                </label>
                {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
            }
            .into_any()
        }
    }
}

#[component]
pub fn ApplyWizard(card_type: CardType) -> impl IntoView {
    let ctx = use_app();
    let wizard = RwSignal::new(Wizard::new(ApplyStep::ORDER));
    let draft = RwSignal::new(ApplicationDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(None::<u64>);

    let submit = move || {
        let application = draft.get_untracked();
        if let Err(e) = application.validate_all(browser::today()) {
            errors.set(e);
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let result = ApiClient::from_browser()
                .submit_application(card_type, &application.to_submission())
                .await;
            set_submitting.set(false);
            match result {
                Ok(created) => {
                    log::info!("[apply] {} application {} submitted", card_type.slug(), created.id);
                    set_submitted.set(Some(created.id));
                }
                Err(e) => {
                    log::error!("[apply] Submission failed: {}", e);
                    ctx.toast_err(format!("We could not submit your application: {}", e));
                }
            }
        });
    };

    let next = move |_| {
        let mut w = wizard.get_untracked();
        let d = draft.get_untracked();
        match w.next(|step| d.validate(step, browser::today())) {
            Ok(_) if wizard.with_untracked(Wizard::is_last) => submit(),
            Ok(_) => {
                errors.set(FieldErrors::new());
                wizard.set(w);
            }
            Err(e) => errors.set(e),
        }
    };

    let start_over = move || {
        wizard.update(Wizard::reset);
        draft.set(ApplicationDraft::default());
        errors.set(FieldErrors::new());
        set_submitted.set(None);
    };

    let back = move |_| {
        errors.set(FieldErrors::new());
        wizard.update(|w| {
            w.back();
        });
    };

    view! {
        <section class="wizard">
            <h1>{format!("Apply for a {}", card_type.label())}</h1>
            {move || match submitted.get() {
                Some(id) => view! {
                    <div class="success-panel">
                        <h2>"Application received"</h2>
                        <p>{format!("Your reference is #{}. We will email you once it has been reviewed.", id)}</p>
                        <button class="btn primary" on:click=move |_| ctx.navigate(Route::Home)>"Back to home"</button>
                        <button class="btn secondary" on:click=move |_| start_over()>"Start another application"</button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <WizardProgress wizard=wizard title=ApplyStep::title />
                    <form class="wizard-step" on:submit=|ev| ev.prevent_default()>
                        <h2>{move || wizard.with(|w| w.current().title())}</h2>
                        {move || {
                            let step = wizard.with(Wizard::current);
                            view! { <StepFields step=step draft=draft errors=errors /> }
                        }}
                        {move || {
                            errors
                                .with(|e| (!e.is_empty()).then(|| format!("Please correct {} field(s) above", e.len())))
                                .map(|summary| view! { <p class="form-error">{summary}</p> })
                        }}
                        <div class="wizard-nav">
                            <button
                                class="btn secondary"
                                type="button"
                                disabled=move || wizard.with(Wizard::is_first)
                                on:click=back
                            >
                                "Back"
                            </button>
                            <button
                                class="btn primary"
                                type="button"
                                disabled=move || submitting.get()
                                on:click=next
                            >
                                {move || match (wizard.with(Wizard::is_last), submitting.get()) {
                                    (_, true) => "Submitting...",
                                    (true, false) => "Submit application",
                                    (false, false) => "Next",
                                }}
                            </button>
                        </div>
                    </form>
                }
                .into_any(),
            }}
        </section>
    }
}
