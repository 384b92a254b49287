//! Page Layouts
//!
//! Public site chrome (header nav + footer) and the admin shell.

use leptos::prelude::*;

use crate::components::AdminSidebar;
use crate::context::{use_app, AdminRoute, Route};
use crate::models::CardType;

#[component]
fn SiteNav() -> impl IntoView {
    let ctx = use_app();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |route: Route| {
        set_menu_open.set(false);
        ctx.navigate(route);
    };

    view! {
        <header class="site-nav">
            <a class="brand" on:click=move |_| go(Route::Home)>"Benefits Card"</a>
            <button class="menu-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                "☰"
            </button>
            <nav class=move || if menu_open.get() { "links open" } else { "links" }>
                {CardType::ALL
                    .into_iter()
                    .map(|card_type| {
                        view! { <a on:click=move |_| go(Route::Apply(card_type))>{card_type.label()}</a> }
                    })
                    .collect_view()}
                <a on:click=move |_| go(Route::Renew(CardType::Disability))>"Renew"</a>
                <a on:click=move |_| go(Route::Lanyard)>"Lanyards"</a>
                <a on:click=move |_| go(Route::Partners)>"Partners"</a>
                <a on:click=move |_| go(Route::Contact)>"Contact"</a>
                <a class="admin-link" on:click=move |_| go(Route::Admin(AdminRoute::Dashboard))>"Admin"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="public-layout">
            <SiteNav />
            <main class="public-main">{children()}</main>
            <footer class="site-footer">
                <p>"Benefits Card. Discounts and support for disabled people, carers and those who help them."</p>
            </footer>
        </div>
    }
}

#[component]
pub fn AdminLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="admin-layout">
            <AdminSidebar />
            <section class="admin-main">
                <h1 class="admin-title">{title}</h1>
                {children()}
            </section>
        </div>
    }
}
