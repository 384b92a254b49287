//! Admin Sidebar Component
//!
//! Back-office navigation with the per-category notification badges.

use badge_ledger::Category;
use leptos::prelude::*;

use crate::context::{use_app, AdminRoute, Route};
use crate::models::CardType;
use crate::notifications::use_notifications;
use crate::session::use_session;

/// Single nav entry; the badge hides at zero
#[component]
fn NavEntry(
    label: &'static str,
    target: AdminRoute,
    #[prop(optional)] badge: Option<Category>,
) -> impl IntoView {
    let ctx = use_app();
    let notes = use_notifications();
    let active = move || match (ctx.route.get(), target) {
        (Route::Admin(AdminRoute::Application(a, _)), AdminRoute::Applications(b)) => a == b,
        (Route::Admin(current), _) => current == target,
        _ => false,
    };
    let count = move || badge.map(|category| notes.count(category)).unwrap_or(0);

    view! {
        <li class=move || if active() { "nav-entry active" } else { "nav-entry" }>
            <a on:click=move |_| ctx.admin(target)>
                <span class="nav-label">{label}</span>
                <Show when=move || { count() > 0 }>
                    <span class="badge">{count}</span>
                </Show>
            </a>
        </li>
    }
}

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();

    let logout = move |_| {
        session.sign_out();
        ctx.navigate(Route::Login);
    };

    view! {
        <aside class="admin-sidebar">
            <div class="sidebar-brand" on:click=move |_| ctx.navigate(Route::Home)>
                "Benefits Card Admin"
            </div>
            <nav>
                <ul>
                    <NavEntry label="Dashboard" target=AdminRoute::Dashboard />
                </ul>
                <h4>"Applications"</h4>
                <ul>
                    {CardType::ALL
                        .into_iter()
                        .map(|card_type| {
                            view! {
                                <NavEntry
                                    label=card_type.label()
                                    target=AdminRoute::Applications(card_type)
                                    badge=card_type.application_badge()
                                />
                            }
                        })
                        .collect_view()}
                </ul>
                <h4>"Renewals"</h4>
                <ul>
                    {CardType::ALL
                        .into_iter()
                        .map(|card_type| {
                            view! {
                                <NavEntry
                                    label=card_type.label()
                                    target=AdminRoute::Renewals(card_type)
                                    badge=card_type.renewal_badge()
                                />
                            }
                        })
                        .collect_view()}
                </ul>
                <h4>"Site"</h4>
                <ul>
                    <NavEntry label="Partners" target=AdminRoute::Partners />
                    <NavEntry label="Donations" target=AdminRoute::Donations badge=Category::Donations />
                    <NavEntry label="Contact" target=AdminRoute::Contact badge=Category::Contact />
                    <NavEntry label="Activity log" target=AdminRoute::Activity />
                </ul>
            </nav>
            <button class="btn secondary logout" on:click=logout>
                "Log out"
            </button>
        </aside>
    }
}
