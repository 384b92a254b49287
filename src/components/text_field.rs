//! Text Field Component
//!
//! Labelled input with an inline validation message.

use leptos::prelude::*;

use crate::validation::FieldErrors;

/// Labelled text input (or textarea) bound to one draft field
///
/// # Arguments
/// * `field` - key looked up in `errors` for the inline message
/// * `value` / `on_input` - current value and setter for the draft field
#[component]
pub fn TextField(
    label: &'static str,
    field: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).map(str::to_string));

    let input = if multiline {
        view! {
            <textarea
                rows="5"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class=move || if error().is_some() { "field has-error" } else { "field" }>
            <span class="field-label">{label}</span>
            {input}
            {move || error().map(|message| view! { <span class="field-error">{message}</span> })}
        </label>
    }
}

/// Value/setter pair for one `String` field of a draft held in a signal
pub fn bind<D: Send + Sync + 'static>(
    draft: RwSignal<D>,
    get: fn(&D) -> &String,
    set: fn(&mut D) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || draft.with(|d| get(d).clone()));
    let on_input = Callback::new(move |v: String| draft.update(|d| *set(d) = v));
    (value, on_input)
}
