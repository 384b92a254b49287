//! Confirmation Components
//!
//! Inline delete confirmation and a modal dialog for bigger decisions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

/// Modal dialog with Cancel/Confirm. Clicking the backdrop cancels.
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>{title}</h3>
                    <p>{move || message.get()}</p>
                    <div class="modal-actions">
                        <button class="btn secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn primary" on:click=move |_| on_confirm.run(())>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
