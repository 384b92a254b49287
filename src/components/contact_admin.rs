//! Contact Submissions Admin Page
//!
//! Messages sent through the public contact form. Visiting the page clears
//! the contact badge.

use badge_ledger::{Category, CLEAR_ALL_SENTINEL};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ListQuery};
use crate::components::{AdminLayout, DeleteConfirmButton, Pager, SearchBox};
use crate::config::config;
use crate::models::{ContactStatus, ContactSubmission, Page};
use crate::notifications::use_notifications;
use crate::session::use_session;

#[component]
pub fn ContactAdminPage() -> impl IntoView {
    let session = use_session();
    let notes = use_notifications();

    let listing = RwSignal::new(Page::<ContactSubmission>::default());
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let expanded = RwSignal::new(None::<u64>);

    notes.acknowledge(Category::Contact, CLEAR_ALL_SENTINEL);

    Effect::new(move |_| {
        reload.track();
        let query = ListQuery::new(page.get(), config().page_size)
            .search(&search.get())
            .status(Some(status.get().as_str()));
        spawn_local(async move {
            match ApiClient::from_browser().list_contact_submissions(&query).await {
                Ok(loaded) => listing.set(loaded),
                Err(e) => session.report(e, "load messages"),
            }
        });
    });

    let set_status = move |id: u64, next: ContactStatus| {
        spawn_local(async move {
            match ApiClient::from_browser().update_contact_status(id, next).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(e) => session.report(e, "update message"),
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            match ApiClient::from_browser().delete_contact_submission(id).await {
                Ok(()) => {
                    session.toast_ok("Message deleted");
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "delete message"),
            }
        });
    };

    view! {
        <AdminLayout title="Contact messages">
            <div class="toolbar">
                <SearchBox
                    on_search=move |term: String| {
                        page.set(1);
                        search.set(term);
                    }
                    placeholder="Search name, email or subject"
                />
                <select on:change=move |ev| {
                    page.set(1);
                    status.set(event_target_value(&ev));
                }>
                    <option value="">"All"</option>
                    {ContactStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <ul class="message-list">
                <For
                    each=move || listing.get().items
                    key=|msg| (msg.id, msg.status)
                    children=move |msg| {
                        let id = msg.id;
                        let current = msg.status;
                        let body = msg.message.clone();
                        let is_open = move || expanded.get() == Some(id);
                        view! {
                            <li class=format!("message {}", current.as_str())>
                                <div
                                    class="message-head"
                                    on:click=move |_| {
                                        expanded.update(|open| {
                                            *open = if *open == Some(id) { None } else { Some(id) };
                                        })
                                    }
                                >
                                    <strong>{msg.subject.clone()}</strong>
                                    <span>{format!("{} <{}>", msg.name, msg.email)}</span>
                                    <span class="muted">{msg.created_at.clone().unwrap_or_default()}</span>
                                </div>
                                <Show when=is_open>
                                    <p class="message-body">{body.clone()}</p>
                                </Show>
                                <div class="message-actions">
                                    <select on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        if let Some(next) = ContactStatus::ALL.into_iter().find(|s| s.as_str() == value) {
                                            set_status(id, next);
                                        }
                                    }>
                                        {ContactStatus::ALL
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
                                    <DeleteConfirmButton button_class="row-delete" on_confirm=move |_| delete(id) />
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
            <Pager page=page total_pages=Signal::derive(move || listing.with(Page::total_pages)) />
        </AdminLayout>
    }
}
