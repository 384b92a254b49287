//! Renewals Admin Page
//!
//! Renewal requests for one card type. Visiting the page clears that
//! type's renewal badge.

use badge_ledger::CLEAR_ALL_SENTINEL;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ListQuery};
use crate::components::{AdminLayout, DeleteConfirmButton, Pager, SearchBox};
use crate::config::config;
use crate::models::{CardType, Page, Renewal, RenewalStatus};
use crate::notifications::use_notifications;
use crate::session::use_session;

#[component]
pub fn RenewalsAdminPage(card_type: CardType) -> impl IntoView {
    let session = use_session();
    let notes = use_notifications();

    let listing = RwSignal::new(Page::<Renewal>::default());
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    notes.acknowledge(card_type.renewal_badge(), CLEAR_ALL_SENTINEL);

    Effect::new(move |_| {
        reload.track();
        let query = ListQuery::new(page.get(), config().page_size).search(&search.get());
        spawn_local(async move {
            match ApiClient::from_browser().list_renewals(card_type, &query).await {
                Ok(loaded) => listing.set(loaded),
                Err(e) => session.report(e, "load renewals"),
            }
        });
    });

    let set_status = move |id: u64, status: RenewalStatus| {
        spawn_local(async move {
            match ApiClient::from_browser().update_renewal_status(card_type, id, status).await {
                Ok(_) => {
                    session.toast_ok(format!("Renewal marked {}", status.as_str()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "update renewal"),
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            match ApiClient::from_browser().delete_renewal(card_type, id).await {
                Ok(()) => {
                    session.toast_ok("Renewal deleted");
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "delete renewal"),
            }
        });
    };

    view! {
        <AdminLayout title=format!("{} renewals", card_type.label())>
            <div class="toolbar">
                <SearchBox
                    on_search=move |term: String| {
                        page.set(1);
                        search.set(term);
                    }
                    placeholder="Search name, email or card number"
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Card number"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Requested"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || listing.get().items
                        key=|renewal| (renewal.id, renewal.status)
                        children=move |renewal| {
                            let id = renewal.id;
                            let current = renewal.status;
                            view! {
                                <tr>
                                    <td>{renewal.card_number.clone()}</td>
                                    <td>{renewal.full_name.clone()}</td>
                                    <td>{renewal.email.clone()}</td>
                                    <td>{renewal.created_at.clone().unwrap_or_default()}</td>
                                    <td>
                                        <select on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            if let Some(status) = RenewalStatus::ALL
                                                .into_iter()
                                                .find(|s| s.as_str() == value)
                                            {
                                                set_status(id, status);
                                            }
                                        }>
                                            {RenewalStatus::ALL
                                                .into_iter()
                                                .map(|s| {
                                                    view! {
                                                        <option value=s.as_str() selected=s == current>
                                                            {s.as_str()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </td>
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
        </AdminLayout>
    }
}
