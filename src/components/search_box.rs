//! Search Box Component
//!
//! Reports the search term once typing pauses for the configured debounce.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::config;

#[component]
pub fn SearchBox(
    #[prop(into)] on_search: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let delay = u32::try_from(config().search_debounce.as_millis()).unwrap_or(500);
    // Replacing the pending timer drops (cancels) the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev| {
        let term = event_target_value(&ev);
        let timer = Timeout::new(delay, move || on_search.run(term));
        pending.update_value(|slot| *slot = Some(timer));
    };

    view! {
        <input
            type="search"
            class="search-box"
            placeholder=placeholder.unwrap_or("Search...")
            on:input=on_input
        />
    }
}
