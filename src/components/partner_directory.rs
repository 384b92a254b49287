//! Partner Directory Page
//!
//! Public list of partner businesses, filterable by category and search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ListQuery};
use crate::components::{Pager, SearchBox};
use crate::config::config;
use crate::models::{Page, Partner, PartnerCategory};

#[component]
fn PartnerCard(partner: Partner) -> impl IntoView {
    view! {
        <article class="partner-card">
            {partner.logo_url.clone().map(|src| view! { <img class="partner-logo" src=src alt=partner.name.clone() /> })}
            <h3>{partner.name.clone()}</h3>
            {partner.category_name.clone().map(|name| view! { <span class="tag">{name}</span> })}
            <p>{partner.description.clone()}</p>
            {partner.discount.clone().map(|discount| view! { <p class="discount">{discount}</p> })}
            {partner
                .website
                .clone()
                .map(|href| view! { <a href=href target="_blank" rel="noopener">"Visit website"</a> })}
        </article>
    }
}

#[component]
pub fn PartnerDirectory() -> impl IntoView {
    let categories = RwSignal::new(Vec::<PartnerCategory>::new());
    let listing = RwSignal::new(Page::<Partner>::default());
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<u64>);
    let (failed, set_failed) = signal(false);

    spawn_local(async move {
        match ApiClient::from_browser().list_partner_categories().await {
            Ok(loaded) => categories.set(loaded),
            Err(e) => log::warn!("[partners] Categories unavailable: {}", e),
        }
    });

    Effect::new(move |_| {
        let query = ListQuery::new(page.get(), config().page_size)
            .search(&search.get())
            .category(category.get());
        spawn_local(async move {
            match ApiClient::from_browser().list_partners(&query).await {
                Ok(loaded) => {
                    set_failed.set(false);
                    listing.set(loaded);
                }
                Err(e) => {
                    log::error!("[partners] Listing failed: {}", e);
                    set_failed.set(true);
                }
            }
        });
    });

    view! {
        <section class="directory">
            <h1>"Our partners"</h1>
            <p>"Show your card at any of these businesses to claim your discount."</p>
            <div class="toolbar">
                <SearchBox
                    on_search=move |term: String| {
                        page.set(1);
                        search.set(term);
                    }
                    placeholder="Search partners"
                />
                <select on:change=move |ev| {
                    page.set(1);
                    category.set(event_target_value(&ev).parse().ok());
                }>
                    <option value="">"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show when=move || failed.get()>
                <p class="form-error">"Partners could not be loaded. Please try again later."</p>
            </Show>
            <div class="partner-grid">
                <For
                    each=move || listing.get().items
                    key=|partner| partner.id
                    children=|partner| view! { <PartnerCard partner=partner /> }
                />
            </div>
            <Show when=move || listing.with(|l| l.items.is_empty()) && !failed.get()>
                <p class="empty">"No partners match your search."</p>
            </Show>
            <Pager page=page total_pages=Signal::derive(move || listing.with(Page::total_pages)) />
        </section>
    }
}
