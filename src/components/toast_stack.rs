//! Toast Stack Component

use leptos::prelude::*;

use crate::context::{use_app, ToastKind};

/// Transient messages in the corner; click to dismiss early
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
