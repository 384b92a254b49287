//! Wizard Progress Component

use leptos::prelude::*;

use crate::wizard::Wizard;

/// Step titles with the current one highlighted and earlier ones ticked
#[component]
pub fn WizardProgress<S>(wizard: RwSignal<Wizard<S>>, title: fn(S) -> &'static str) -> impl IntoView
where
    S: Copy + PartialEq + Send + Sync + 'static,
{
    let steps = wizard.with_untracked(|w| w.steps());

    view! {
        <ol class="wizard-progress">
            {steps
                .iter()
                .copied()
                .map(|step| {
                    let class = move || {
                        wizard.with(|w| {
                            if w.is_done(step) {
                                "step done"
                            } else if w.current() == step {
                                "step current"
                            } else {
                                "step"
                            }
                        })
                    };
                    view! { <li class=class>{title(step)}</li> }
                })
                .collect_view()}
        </ol>
        <p class="step-count">
            {move || wizard.with(|w| format!("Step {} of {}", w.index() + 1, w.len()))}
        </p>
    }
}
