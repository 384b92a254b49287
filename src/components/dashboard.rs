//! Admin Dashboard Page
//!
//! Headline totals, the pending summary from the badge counts and the
//! profile picture upload.

use badge_ledger::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::browser;
use crate::components::AdminLayout;
use crate::models::DashboardStats;
use crate::notifications::use_notifications;
use crate::session::use_session;

#[component]
fn StatTile(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let notes = use_notifications();
    let stats = RwSignal::new(None::<DashboardStats>);
    let (uploading, set_uploading) = signal(false);

    spawn_local(async move {
        match ApiClient::from_browser().dashboard_stats().await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(e) => session.report(e, "load dashboard"),
        }
    });
    notes.refresh();

    let total = move |pick: fn(&DashboardStats) -> u64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(|s| pick(s).to_string()).unwrap_or_else(|| "…".into())))
    };

    let on_picture = move |ev: leptos::ev::Event| {
        let Some(file) = browser::selected_file(&ev) else {
            return;
        };
        set_uploading.set(true);
        spawn_local(async move {
            let result = match browser::read_upload(file).await {
                Ok(upload) => ApiClient::from_browser().upload_profile_picture(upload).await,
                Err(message) => Err(ApiError::InvalidPayload(message)),
            };
            set_uploading.set(false);
            match result {
                Ok(_) => session.toast_ok("Profile picture updated"),
                Err(e) => session.report(e, "upload profile picture"),
            }
        });
    };

    view! {
        <AdminLayout title="Dashboard">
            <div class="stat-grid">
                <StatTile label="Applications" value=total(|s| s.total_applications) />
                <StatTile label="Partners" value=total(|s| s.total_partners) />
                <StatTile label="Donations" value=total(|s| s.total_donations) />
                <StatTile
                    label="Awaiting review"
                    value=Signal::derive(move || notes.total().to_string())
                />
            </div>
            <h2>"Pending"</h2>
            <ul class="pending-summary">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <li>
                                <span>{category.to_string()}</span>
                                <span class="badge">{move || notes.count(category)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h2>"Profile picture"</h2>
            <label class="upload">
                <input type="file" accept="image/*" on:change=on_picture disabled=move || uploading.get() />
                {move || if uploading.get() { "Uploading..." } else { "Choose an image" }}
            </label>
        </AdminLayout>
    }
}
