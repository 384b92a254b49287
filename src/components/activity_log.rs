//! Activity Log Page
//!
//! Recent in-memory log entries, newest first.

use leptos::prelude::*;

use crate::components::AdminLayout;

#[component]
pub fn ActivityLogPage() -> impl IntoView {
    let entries = RwSignal::new(rolling_logger::snapshot());
    let (level, set_level) = signal(String::new());

    let visible = move || {
        let wanted = level.get();
        entries.with(|all| {
            all.iter()
                .rev()
                .filter(|entry| wanted.is_empty() || entry.level.as_str() == wanted)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <AdminLayout title="Activity log">
            <div class="toolbar">
                <select on:change=move |ev| set_level.set(event_target_value(&ev))>
                    <option value="">"All levels"</option>
                    <option value="ERROR">"Errors"</option>
                    <option value="WARN">"Warnings"</option>
                    <option value="INFO">"Info"</option>
                    <option value="DEBUG">"Debug"</option>
                </select>
                <button class="btn small" on:click=move |_| entries.set(rolling_logger::snapshot())>
                    "Refresh"
                </button>
            </div>
            <pre class="log-view">
                {move || {
                    let lines = visible();
                    if lines.is_empty() { "No entries.".to_string() } else { lines.join("\n") }
                }}
            </pre>
        </AdminLayout>
    }
}
