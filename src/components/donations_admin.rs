//! Donations Admin Page
//!
//! Totals, the donation list and a form for recording offline donations.
//! Visiting the page clears the donations badge.

use badge_ledger::{Category, CLEAR_ALL_SENTINEL};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ListQuery};
use crate::browser::money;
use crate::components::{AdminLayout, DeleteConfirmButton, Pager, TextField};
use crate::config::config;
use crate::models::{Donation, DonationStats, NewDonation, Page};
use crate::notifications::use_notifications;
use crate::session::use_session;
use crate::validation::{self, FieldErrors};

/// Parse "12.50" / "12" / "£12.5" into minor units
pub fn parse_amount(value: &str) -> Result<u64, String> {
    let trimmed = value.trim().trim_start_matches('£');
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let invalid = || "Enter an amount like 12.50".to_string();
    if whole.is_empty() || fraction.len() > 2 {
        return Err(invalid());
    }
    let pounds: u64 = whole.parse().map_err(|_| invalid())?;
    let pence: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<2}", fraction).parse().map_err(|_| invalid())?
    };
    match pounds.checked_mul(100).and_then(|p| p.checked_add(pence)) {
        Some(0) => Err("Amount must be more than zero".to_string()),
        Some(minor) => Ok(minor),
        None => Err(invalid()),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct DonationDraft {
    donor_name: String,
    email: String,
    amount: String,
    message: String,
}

impl DonationDraft {
    fn validate(&self) -> Result<NewDonation, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("donor_name", validation::required(&self.donor_name, "Donor name"));
        if !self.email.trim().is_empty() {
            errors.check("email", validation::email(&self.email));
        }
        let amount = parse_amount(&self.amount);
        errors.check("amount", amount.clone().map(|_| ()));
        errors.into_result()?;

        let optional = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        Ok(NewDonation {
            donor_name: self.donor_name.trim().to_string(),
            email: optional(&self.email),
            amount: amount.unwrap_or_default(),
            message: optional(&self.message),
        })
    }
}

#[component]
pub fn DonationsAdminPage() -> impl IntoView {
    let session = use_session();
    let notes = use_notifications();

    let listing = RwSignal::new(Page::<Donation>::default());
    let stats = RwSignal::new(DonationStats::default());
    let page = RwSignal::new(1u32);
    let reload = RwSignal::new(0u32);
    let draft = RwSignal::new(DonationDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let selected = RwSignal::new(None::<Donation>);

    notes.acknowledge(Category::Donations, CLEAR_ALL_SENTINEL);

    Effect::new(move |_| {
        reload.track();
        let query = ListQuery::new(page.get(), config().page_size);
        spawn_local(async move {
            let client = ApiClient::from_browser();
            match client.list_donations(&query).await {
                Ok(loaded) => listing.set(loaded),
                Err(e) => session.report(e, "load donations"),
            }
            match client.donation_stats().await {
                Ok(loaded) => stats.set(loaded),
                Err(e) => log::warn!("[donations] Stats unavailable: {}", e),
            }
        });
    });

    let record = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let donation = match draft.with_untracked(DonationDraft::validate) {
            Ok(donation) => donation,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        spawn_local(async move {
            match ApiClient::from_browser().create_donation(&donation).await {
                Ok(created) => {
                    session.toast_ok(format!("Recorded {} from {}", money(created.amount), created.donor_name));
                    draft.set(DonationDraft::default());
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "record donation"),
            }
        });
    };

    let open = move |id: u64| {
        spawn_local(async move {
            match ApiClient::from_browser().get_donation(id).await {
                Ok(donation) => selected.set(Some(donation)),
                Err(e) => session.report(e, "load donation"),
            }
        });
    };

    let delete = move |id: u64| {
        if selected.with_untracked(|d| d.as_ref().is_some_and(|d| d.id == id)) {
            selected.set(None);
        }
        spawn_local(async move {
            match ApiClient::from_browser().delete_donation(id).await {
                Ok(()) => {
                    session.toast_ok("Donation deleted");
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "delete donation"),
            }
        });
    };

    view! {
        <AdminLayout title="Donations">
            <div class="stat-grid">
                <div class="stat-tile">
                    <span class="stat-value">{move || money(stats.get().total_amount)}</span>
                    <span class="stat-label">"Raised in total"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-value">{move || money(stats.get().this_month_amount)}</span>
                    <span class="stat-label">"This month"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-value">{move || stats.get().count}</span>
                    <span class="stat-label">"Donations"</span>
                </div>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Donor"</th>
                        <th>"Amount"</th>
                        <th>"Message"</th>
                        <th>"Date"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || listing.get().items
                        key=|donation| donation.id
                        children=move |donation| {
                            let id = donation.id;
                            view! {
                                <tr class="clickable" on:click=move |_| open(id)>
                                    <td>{donation.donor_name.clone()}</td>
                                    <td>{money(donation.amount)}</td>
                                    <td>{donation.message.clone().unwrap_or_default()}</td>
                                    <td>{donation.created_at.clone().unwrap_or_default()}</td>
                                    <td>
                                        <DeleteConfirmButton button_class="row-delete" on_confirm=move |_| delete(id) />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Pager page=page total_pages=Signal::derive(move || listing.with(Page::total_pages)) />

            {move || {
                selected
                    .get()
                    .map(|d| {
                        view! {
                            <div class="detail-panel">
                                <h2>{format!("Donation #{}", d.id)}</h2>
                                <dl class="detail-list">
                                    <dt>"Donor"</dt>
                                    <dd>{d.donor_name.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{d.email.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Amount"</dt>
                                    <dd>{money(d.amount)}</dd>
                                    <dt>"Message"</dt>
                                    <dd>{d.message.clone().unwrap_or_default()}</dd>
                                    <dt>"Received"</dt>
                                    <dd>{d.created_at.clone().unwrap_or_default()}</dd>
                                </dl>
                                <button class="btn link" on:click=move |_| selected.set(None)>"Close"</button>
                            </div>
                        }
                    })
            }}

            <h2>"Record a donation"</h2>
            <form class="inline-form" on:submit=record>
                <TextField
                    label="Donor name"
                    field="donor_name"
                    value=Signal::derive(move || draft.with(|d| d.donor_name.clone()))
                    on_input=move |v: String| draft.update(|d| d.donor_name = v)
                    errors=errors
                />
                <TextField
                    label="Email (optional)"
                    field="email"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                    on_input=move |v: String| draft.update(|d| d.email = v)
                    errors=errors
                />
                <TextField
                    label="Amount (£)"
                    field="amount"
                    value=Signal::derive(move || draft.with(|d| d.amount.clone()))
                    on_input=move |v: String| draft.update(|d| d.amount = v)
                    errors=errors
                />
                <TextField
                    label="Message"
                    field="message"
                    multiline=true
                    value=Signal::derive(move || draft.with(|d| d.message.clone()))
                    on_input=move |v: String| draft.update(|d| d.message = v)
                    errors=errors
                />
                <button class="btn primary" type="submit">"Record"</button>
            </form>
        </AdminLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Ok(1250));
        assert_eq!(parse_amount("£12.5"), Ok(1250));
        assert_eq!(parse_amount(" 7 "), Ok(700));
        assert_eq!(parse_amount("0.07"), Ok(7));
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("12.505").is_err());
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount(".50").is_err());
    }

    #[test]
    fn test_donation_draft_validation() {
        let draft = DonationDraft { donor_name: "  ".into(), amount: "x".into(), ..Default::default() };
        let errors = draft.validate().unwrap_err();
        assert!(errors.get("donor_name").is_some());
        assert!(errors.get("amount").is_some());
        assert!(errors.get("email").is_none());

        let draft = DonationDraft {
            donor_name: "Jo".into(),
            amount: "20".into(),
            message: " ".into(),
            ..Default::default()
        };
        let donation = draft.validate().unwrap();
        assert_eq!(donation.amount, 2000);
        assert_eq!(donation.email, None);
        assert_eq!(donation.message, None);
    }
}
