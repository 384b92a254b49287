//! Pager Component

use leptos::prelude::*;

/// Prev/next controls for a server-side paginated list
#[component]
pub fn Pager(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn small"
                disabled=move || page.get() <= 1
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "‹ Prev"
            </button>
            <span class="pager-label">
                {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="btn small"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next ›"
            </button>
        </div>
    }
}
