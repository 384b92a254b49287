//! Partners Admin Page
//!
//! Partner categories and the partner directory entries, with logo upload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError, ListQuery};
use crate::browser;
use crate::components::{AdminLayout, DeleteConfirmButton, Pager, SearchBox, TextField};
use crate::config::config;
use crate::models::{Page, Partner, PartnerCategory, PartnerInput};
use crate::session::use_session;
use crate::validation::{self, FieldErrors};

fn validate_partner(input: &PartnerInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("name", validation::required(&input.name, "Name"));
    errors.check("description", validation::required(&input.description, "Description"));
    let website = input.website.trim();
    if !website.is_empty() && !(website.starts_with("http://") || website.starts_with("https://")) {
        errors.check("website", Err("Website must start with http:// or https://".to_string()));
    }
    errors.into_result()
}

fn input_from(partner: &Partner) -> PartnerInput {
    PartnerInput {
        name: partner.name.clone(),
        category_id: partner.category_id,
        description: partner.description.clone(),
        website: partner.website.clone().unwrap_or_default(),
        discount: partner.discount.clone().unwrap_or_default(),
    }
}

#[component]
fn CategoryManager(categories: RwSignal<Vec<PartnerCategory>>, reload: RwSignal<u32>) -> impl IntoView {
    let session = use_session();
    let (name, set_name) = signal(String::new());

    let add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        spawn_local(async move {
            match ApiClient::from_browser().create_partner_category(&value).await {
                Ok(created) => {
                    session.toast_ok(format!("Added category {}", created.name));
                    set_name.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "add category"),
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            match ApiClient::from_browser().delete_partner_category(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => session.report(e, "delete category"),
            }
        });
    };

    view! {
        <div class="category-manager">
            <h2>"Categories"</h2>
            <ul class="chip-list">
                <For
                    each=move || categories.get()
                    key=|category| category.id
                    children=move |category| {
                        let id = category.id;
                        view! {
                            <li class="chip">
                                {category.name}
                                <DeleteConfirmButton button_class="chip-delete" on_confirm=move |_| delete(id) />
                            </li>
                        }
                    }
                />
            </ul>
            <form class="inline-form" on:submit=add>
                <input
                    placeholder="New category"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button class="btn small" type="submit">"Add"</button>
            </form>
        </div>
    }
}

#[component]
pub fn PartnersAdminPage() -> impl IntoView {
    let session = use_session();

    let categories = RwSignal::new(Vec::<PartnerCategory>::new());
    let listing = RwSignal::new(Page::<Partner>::default());
    let page = RwSignal::new(1u32);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    // Editor state; `editing` is None for a new partner
    let editing = RwSignal::new(None::<u64>);
    let draft = RwSignal::new(PartnerInput::default());
    let logo = StoredValue::new_local(None::<web_sys::File>);
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        reload.track();
        let query = ListQuery::new(page.get(), config().page_size).search(&search.get());
        spawn_local(async move {
            let client = ApiClient::from_browser();
            match client.list_partner_categories().await {
                Ok(loaded) => categories.set(loaded),
                Err(e) => session.report(e, "load categories"),
            }
            match client.list_partners(&query).await {
                Ok(loaded) => listing.set(loaded),
                Err(e) => session.report(e, "load partners"),
            }
        });
    });

    let reset_editor = move || {
        editing.set(None);
        draft.set(PartnerInput::default());
        logo.set_value(None);
        errors.set(FieldErrors::new());
    };

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = draft.get_untracked();
        if let Err(e) = validate_partner(&input) {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        let id = editing.get_untracked();
        let file = logo.with_value(Clone::clone);
        set_saving.set(true);
        spawn_local(async move {
            let upload = match file {
                Some(file) => match browser::read_upload(file).await {
                    Ok(upload) => Some(upload),
                    Err(message) => {
                        session.report(ApiError::InvalidPayload(message), "read logo");
                        set_saving.set(false);
                        return;
                    }
                },
                None => None,
            };
            let client = ApiClient::from_browser();
            let result = match id {
                Some(id) => client.update_partner(id, &input, upload).await,
                None => client.create_partner(&input, upload).await,
            };
            set_saving.set(false);
            match result {
                Ok(saved) => {
                    session.toast_ok(format!("Saved {}", saved.name));
                    reset_editor();
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "save partner"),
            }
        });
    };

    // Load the full record; the listing may carry a trimmed description
    let edit = move |id: u64| {
        spawn_local(async move {
            match ApiClient::from_browser().get_partner(id).await {
                Ok(partner) => {
                    editing.set(Some(id));
                    draft.set(input_from(&partner));
                    logo.set_value(None);
                    errors.set(FieldErrors::new());
                }
                Err(e) => session.report(e, "load partner"),
            }
        });
    };

    let delete = move |id: u64| {
        spawn_local(async move {
            match ApiClient::from_browser().delete_partner(id).await {
                Ok(()) => {
                    session.toast_ok("Partner deleted");
                    reload.update(|n| *n += 1);
                }
                Err(e) => session.report(e, "delete partner"),
            }
        });
    };

    view! {
        <AdminLayout title="Partners">
            <CategoryManager categories=categories reload=reload />

            <h2>"Directory"</h2>
            <div class="toolbar">
                <SearchBox
                    on_search=move |term: String| {
                        page.set(1);
                        search.set(term);
                    }
                    placeholder="Search partners"
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Discount"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || listing.get().items
                        key=|partner| partner.id
                        children=move |partner| {
                            let id = partner.id;
                            view! {
                                <tr>
                                    <td>
                                        {partner.logo_url.clone().map(|src| view! { <img class="logo-thumb" src=src /> })}
                                    </td>
                                    <td>{partner.name.clone()}</td>
                                    <td>{partner.category_name.clone().unwrap_or_default()}</td>
                                    <td>{partner.discount.clone().unwrap_or_default()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="btn small"
                                            on:click=move |_| edit(id)
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton button_class="row-delete" on_confirm=move |_| delete(id) />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Pager page=page total_pages=Signal::derive(move || listing.with(Page::total_pages)) />

            <h2>{move || if editing.get().is_some() { "Edit partner" } else { "Add partner" }}</h2>
            <form class="partner-form" on:submit=save>
                <TextField
                    label="Name"
                    field="name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=move |v: String| draft.update(|d| d.name = v)
                    errors=errors
                />
                <label class="field">
                    <span class="field-label">"Category"</span>
                    <select on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<u64>().ok();
                        draft.update(|d| d.category_id = id);
                    }>
                        <option value="" selected=move || draft.with(|d| d.category_id.is_none())>
                            "None"
                        </option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|category| {
                                    let id = category.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || draft.with(|d| d.category_id == Some(id))
                                        >
                                            {category.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <TextField
                    label="Description"
                    field="description"
                    multiline=true
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=move |v: String| draft.update(|d| d.description = v)
                    errors=errors
                />
                <TextField
                    label="Website"
                    field="website"
                    input_type="url"
                    value=Signal::derive(move || draft.with(|d| d.website.clone()))
                    on_input=move |v: String| draft.update(|d| d.website = v)
                    errors=errors
                />
                <TextField
                    label="Discount"
                    field="discount"
                    value=Signal::derive(move || draft.with(|d| d.discount.clone()))
                    on_input=move |v: String| draft.update(|d| d.discount = v)
                    errors=errors
                />
                <label class="field">
                    <span class="field-label">"Logo"</span>
                    <input
                        type="file"
                        accept="image/*"
                        on:change=move |ev| logo.set_value(browser::selected_file(&ev))
                    />
                </label>
                <div class="actions">
                    <button class="btn primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button class="btn secondary" type="button" on:click=move |_| reset_editor()>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </AdminLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_validation() {
        let errors = validate_partner(&PartnerInput::default()).unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("description").is_some());

        let input = PartnerInput {
            name: "Cafe Nero".into(),
            description: "Coffee".into(),
            website: "cafe.example".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_partner(&input).unwrap_err().get("website"),
            Some("Website must start with http:// or https://")
        );

        let input = PartnerInput { website: "https://cafe.example".into(), ..input };
        assert!(validate_partner(&input).is_ok());
    }
}
