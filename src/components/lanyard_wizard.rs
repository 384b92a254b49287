//! Verified Lanyard Wizard
//!
//! Order flow for a lanyard matched to an existing card. There is no
//! backend for orders yet: confirming simulates the request and shows a
//! reference.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::{bind, ConfirmModal, TextField, WizardProgress};
use crate::context::{use_app, Route};
use crate::forms::{lanyard_reference, LanyardDraft, LanyardStep, LanyardStyle, MAX_LANYARDS};
use crate::validation::FieldErrors;
use crate::wizard::Wizard;

const SIMULATED_LATENCY_MS: u32 = 1_200;

#[component]
fn LanyardFields(step: LanyardStep, draft: RwSignal<LanyardDraft>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let text = move |label: &'static str,
                     field: &'static str,
                     get: fn(&LanyardDraft) -> &String,
                     set: fn(&mut LanyardDraft) -> &mut String| {
        let (value, on_input) = bind(draft, get, set);
        view! { <TextField label=label field=field value=value on_input=on_input errors=errors /> }
    };
    let error = move |field: &'static str| {
        move || {
            errors
                .with(|e| e.get(field).map(str::to_string))
                .map(|message| view! { <span class="field-error">{message}</span> })
        }
    };

    match step {
        LanyardStep::Personal => view! {
            {text("Full name", "full_name", |d| &d.full_name, |d| &mut d.full_name)}
            {text("Email", "email", |d| &d.email, |d| &mut d.email)}
            {text("Card number", "card_number", |d| &d.card_number, |d| &mut d.card_number)}
        }
        .into_any(),
        LanyardStep::Address => view! {
            {text("Address", "address_line1", |d| &d.address_line1, |d| &mut d.address_line1)}
            {text("Town or city", "city", |d| &d.city, |d| &mut d.city)}
            {text("Postcode", "postcode", |d| &d.postcode, |d| &mut d.postcode)}
        }
        .into_any(),
        LanyardStep::Lanyard => view! {
            <label class="field">
                <span class="field-label">"Style"</span>
                <select on:change=move |ev| {
                    if let Some(style) = LanyardStyle::from_value(&event_target_value(&ev)) {
                        draft.update(|d| d.style = style);
                    }
                }>
                    {LanyardStyle::ALL
                        .into_iter()
                        .map(|style| {
                            view! {
                                <option value=style.value() selected=move || draft.with(|d| d.style == style)>
                                    {style.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="field">
                <span class="field-label">"Quantity"</span>
                <input
                    type="number"
                    min="1"
                    max=MAX_LANYARDS.to_string()
                    prop:value=move || draft.with(|d| d.quantity.to_string())
                    on:input=move |ev| {
                        let quantity = event_target_value(&ev).parse().unwrap_or(0);
                        draft.update(|d| d.quantity = quantity);
                    }
                />
                {error("quantity")}
            </label>
        }
        .into_any(),
        LanyardStep::Review => {
            let d = draft.get_untracked();
            view! {
                <dl class="review">
                    <dt>"Card holder"</dt>
                    <dd>{d.full_name.trim().to_string()}</dd>
                    <dt>"Card number"</dt>
                    <dd>{d.card_number.trim().to_string()}</dd>
                    <dt>"Deliver to"</dt>
                    <dd>{format!("{}, {} {}", d.address_line1.trim(), d.city.trim(), d.postcode.trim())}</dd>
                    <dt>"Lanyard"</dt>
                    <dd>{format!("{} × {}", d.quantity, d.style.label())}</dd>
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
                    "The card number above belongs to me or the person I care for"
                </label>
                {error("consent")}
            }
            .into_any()
        }
    }
}

#[component]
pub fn LanyardWizard() -> impl IntoView {
    let ctx = use_app();
    let wizard = RwSignal::new(Wizard::new(LanyardStep::ORDER));
    let draft = RwSignal::new(LanyardDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (confirming, set_confirming) = signal(false);
    let (placing, set_placing) = signal(false);
    let (reference, set_reference) = signal(None::<String>);

    let next = move |_| {
        let mut w = wizard.get_untracked();
        let d = draft.get_untracked();
        match w.next(|step| d.validate(step)) {
            Ok(_) if wizard.with_untracked(Wizard::is_last) => {
                errors.set(FieldErrors::new());
                set_confirming.set(true);
            }
            Ok(_) => {
                errors.set(FieldErrors::new());
                wizard.set(w);
            }
            Err(e) => errors.set(e),
        }
    };

    let place_order = move |_| {
        set_confirming.set(false);
        set_placing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
            let order = lanyard_reference(browser::now_millis());
            log::info!("[lanyard] Order {} placed", order);
            set_placing.set(false);
            set_reference.set(Some(order));
        });
    };

    let summary = Signal::derive(move || {
        draft.with(|d| format!("Order {} {} lanyard(s) for card {}?", d.quantity, d.style.label(), d.card_number.trim()))
    });

    view! {
        <section class="wizard">
            <h1>"Order a verified lanyard"</h1>
            {move || match reference.get() {
                Some(order) => view! {
                    <div class="success-panel">
                        <h2>"Order placed"</h2>
                        <p>{format!("Your order reference is {}. Lanyards are dispatched within 5 working days.", order)}</p>
                        <button class="btn primary" on:click=move |_| ctx.navigate(Route::Home)>"Back to home"</button>
                        <button
                            class="btn secondary"
                            on:click=move |_| {
                                wizard.update(Wizard::reset);
                                draft.set(LanyardDraft::default());
                                set_reference.set(None);
                            }
                        >
                            "Order another"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <WizardProgress wizard=wizard title=LanyardStep::title />
                    <form class="wizard-step" on:submit=|ev| ev.prevent_default()>
                        <h2>{move || wizard.with(|w| w.current().title())}</h2>
                        {move || {
                            let step = wizard.with(Wizard::current);
                            view! { <LanyardFields step=step draft=draft errors=errors /> }
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
                                disabled=move || wizard.with(Wizard::is_first) || placing.get()
                                on:click=move |_| {
                                    errors.set(FieldErrors::new());
                                    wizard.update(|w| {
                                        w.back();
                                    });
                                }
                            >
                                "Back"
                            </button>
                            <button class="btn primary" type="button" disabled=move || placing.get() on:click=next>
                                {move || match (wizard.with(Wizard::is_last), placing.get()) {
                                    (_, true) => "Placing order...",
                                    (true, false) => "Place order",
                                    (false, false) => "Next",
                                }}
                            </button>
                        </div>
                    </form>
                }
                .into_any(),
            }}
            <ConfirmModal
                open=confirming
                title="Confirm your order"
                message=summary
                on_confirm=place_order
                on_cancel=move |_| set_confirming.set(false)
            />
        </section>
    }
}
