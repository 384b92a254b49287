//! Application Detail Page
//!
//! Full record of one application, the approve/reject actions and the
//! issued card. Opening it counts as viewing the application.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::AdminLayout;
use crate::context::{use_app, AdminRoute};
use crate::models::{Application, ApplicationStatus, Card, CardInput, CardType};
use crate::notifications::use_notifications;
use crate::session::use_session;

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <dt>{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}

#[component]
pub fn ApplicationDetail(card_type: CardType, id: u64) -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let notes = use_notifications();
    let badge = card_type.application_badge();

    let application = RwSignal::new(None::<Application>);
    let card = RwSignal::new(None::<Card>);
    let card_number = RwSignal::new(String::new());
    let expires_at = RwSignal::new(String::new());
    let (busy, set_busy) = signal(false);

    notes.acknowledge(badge, id);

    spawn_local(async move {
        let client = ApiClient::from_browser();
        match client.get_application(card_type, id).await {
            Ok(loaded) => application.set(Some(loaded)),
            Err(e) => {
                session.report(e, "load application");
                return;
            }
        }
        match client.card_for_application(id).await {
            Ok(Some(existing)) => {
                card_number.set(existing.card_number.clone());
                expires_at.set(existing.expires_at.clone().unwrap_or_default());
                card.set(Some(existing));
            }
            Ok(None) => {}
            Err(e) => session.report(e, "load card"),
        }
    });

    let set_status = move |status: ApplicationStatus| {
        let was_pending = application.with_untracked(|a| a.as_ref().is_some_and(|a| a.status == ApplicationStatus::Pending));
        set_busy.set(true);
        spawn_local(async move {
            match ApiClient::from_browser().update_application_status(card_type, id, status).await {
                Ok(updated) => {
                    match (was_pending, status == ApplicationStatus::Pending) {
                        (true, false) => notes.decrement(badge),
                        (false, true) => notes.increment(badge),
                        _ => {}
                    }
                    session.toast_ok(format!("Application {}", updated.status.as_str()));
                    application.set(Some(updated));
                }
                Err(e) => session.report(e, "update status"),
            }
            set_busy.set(false);
        });
    };

    let save_card = move |_| {
        let number = card_number.get_untracked().trim().to_string();
        if number.is_empty() {
            ctx.toast_err("Card number is required");
            return;
        }
        let expires = expires_at.get_untracked().trim().to_string();
        let input = CardInput {
            application_id: id,
            card_type,
            card_number: number,
            expires_at: (!expires.is_empty()).then_some(expires),
        };
        let existing = card.with_untracked(|c| c.as_ref().map(|c| c.id));
        set_busy.set(true);
        spawn_local(async move {
            let client = ApiClient::from_browser();
            let result = match existing {
                Some(card_id) => client.update_card(card_id, &input).await,
                None => client.create_card(&input).await,
            };
            match result {
                Ok(saved) => {
                    session.toast_ok(if existing.is_some() { "Card updated" } else { "Card issued" });
                    card.set(Some(saved));
                }
                Err(e) => session.report(e, "save card"),
            }
            set_busy.set(false);
        });
    };

    view! {
        <AdminLayout title=format!("{} application #{}", card_type.label(), id)>
            <button class="btn link" on:click=move |_| ctx.admin(AdminRoute::Applications(card_type))>
                "‹ Back to list"
            </button>
            {move || match application.get() {
                None => view! { <p class="spinner">"Loading..."</p> }.into_any(),
                Some(app) => {
                    let status = app.status;
                    view! {
                        <dl class="detail-list">
                            <DetailRow label="Name" value=app.full_name() />
                            <DetailRow label="Email" value=app.email.clone() />
                            <DetailRow label="Phone" value=app.phone.clone() />
                            <DetailRow label="Date of birth" value=app.date_of_birth.clone() />
                            <DetailRow
                                label="Address"
                                value={
                                    [
                                        Some(app.address_line1.clone()),
                                        app.address_line2.clone(),
                                        Some(app.city.clone()),
                                        Some(app.postcode.clone()),
                                    ]
                                        .into_iter()
                                        .flatten()
                                        .collect::<Vec<_>>()
                                        .join(", ")
                                }
                            />
                            <DetailRow label="Details" value=app.details.clone().unwrap_or_default() />
                            <DetailRow label="Status" value=status.as_str().to_string() />
                            <DetailRow label="Submitted" value=app.created_at.clone().unwrap_or_default() />
                        </dl>
                        <div class="actions">
                            <button
                                class="btn primary"
                                disabled=move || busy.get() || status == ApplicationStatus::Approved
                                on:click=move |_| set_status(ApplicationStatus::Approved)
                            >
                                "Approve"
                            </button>
                            <button
                                class="btn danger"
                                disabled=move || busy.get() || status == ApplicationStatus::Rejected
                                on:click=move |_| set_status(ApplicationStatus::Rejected)
                            >
                                "Reject"
                            </button>
                            <Show when=move || status != ApplicationStatus::Pending>
                                <button
                                    class="btn secondary"
                                    disabled=move || busy.get()
                                    on:click=move |_| set_status(ApplicationStatus::Pending)
                                >
                                    "Reopen"
                                </button>
                            </Show>
                        </div>
                    }
                        .into_any()
                }
            }}
            <h2>"Card"</h2>
            <div class="card-form">
                <label class="field">
                    <span class="field-label">"Card number"</span>
                    <input
                        prop:value=move || card_number.get()
                        on:input=move |ev| card_number.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field-label">"Expires"</span>
                    <input
                        type="date"
                        prop:value=move || expires_at.get()
                        on:input=move |ev| expires_at.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn primary" disabled=move || busy.get() on:click=save_card>
                    {move || if card.with(Option::is_some) { "Update card" } else { "Issue card" }}
                </button>
            </div>
        </AdminLayout>
    }
}
