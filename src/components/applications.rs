//! Applications List Page
//!
//! Paginated, searchable table of one card type's applications. Rows this
//! browser has not opened yet are marked "New".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ListQuery};
use crate::components::{AdminLayout, DeleteConfirmButton, Pager, SearchBox};
use crate::config::config;
use crate::context::{use_app, AdminRoute};
use crate::models::{Application, ApplicationStatus, CardType, Page};
use crate::notifications::use_notifications;
use crate::session::use_session;

#[component]
pub fn ApplicationsPage(card_type: CardType) -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let notes = use_notifications();
    let badge = card_type.application_badge();

    let listing = RwSignal::new(Page::<Application>::default());
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        reload.track();
        let query = ListQuery::new(page.get(), config().page_size)
            .search(&search.get())
            .status(Some(status.get().as_str()));
        set_loading.set(true);
        spawn_local(async move {
            match ApiClient::from_browser().list_applications(card_type, &query).await {
                Ok(loaded) => listing.set(loaded),
                Err(e) => session.report(e, "load applications"),
            }
            set_loading.set(false);
        });
    });

    let on_search = Callback::new(move |term: String| {
        page.set(1);
        search.set(term);
    });

    let delete = move |id: u64, was_pending: bool| {
        spawn_local(async move {
            match ApiClient::from_browser().delete_application(card_type, id).await {
                Ok(()) => {
                    if was_pending {
                        notes.decrement(badge);
                    }
                    session.toast_ok("Application deleted");
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "delete application"),
            }
        });
    };

    view! {
        <AdminLayout title=format!("{} applications", card_type.label())>
            <div class="toolbar">
                <SearchBox on_search=on_search placeholder="Search name or email" />
                <select on:change=move |ev| {
                    page.set(1);
                    status.set(event_target_value(&ev));
                }>
                    <option value="">"All statuses"</option>
                    {ApplicationStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
                <Show when=move || loading.get()>
                    <span class="spinner">"Loading..."</span>
                </Show>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Submitted"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || listing.get().items
                        key=|app| (app.id, app.status)
                        children=move |app| {
                            let id = app.id;
                            let pending = app.status == ApplicationStatus::Pending;
                            let fresh = pending && !notes.is_viewed(badge, id);
                            view! {
                                <tr
                                    class="clickable"
                                    on:click=move |_| ctx.admin(AdminRoute::Application(card_type, id))
                                >
                                    <td>
                                        {app.full_name()}
                                        <Show when=move || fresh>
                                            <span class="tag new">"New"</span>
                                        </Show>
                                    </td>
                                    <td>{app.email.clone()}</td>
                                    <td>{app.created_at.clone().unwrap_or_default()}</td>
                                    <td>
                                        <span class=format!("status {}", app.status.as_str())>
                                            {app.status.as_str()}
                                        </span>
                                    </td>
                                    <td>
                                        <DeleteConfirmButton
                                            button_class="row-delete"
                                            on_confirm=move |_| delete(id, pending)
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || listing.with(|l| l.items.is_empty()) && !loading.get()>
                <p class="empty">"No applications found."</p>
            </Show>
            <Pager page=page total_pages=Signal::derive(move || listing.with(Page::total_pages)) />
        </AdminLayout>
    }
}
