//! Filter Bar Component
//!
//! Search box, category and status selectors.

use leptos::prelude::*;

use crate::checklist::{categories, StatusFilter};
use crate::context::use_checklist;
use crate::store::{reset_filters, ChecklistStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_checklist().store;
    let category_options = move || store.items().with(|items| categories(items));

    view! {
        <div class="row g-2 mb-3">
            <div class="col-md-4">
                <input
                    type="text"
                    class="form-control"
                    placeholder="Cari barang..."
                    prop:value=move || store.search().get()
                    on:input=move |ev| store.search().set(event_target_value(&ev))
                />
            </div>
            <div class="col-md-3">
                <select
                    class="form-select"
                    prop:value=move || store.category().get()
                    on:change=move |ev| store.category().set(event_target_value(&ev))
                >
                    <option value="">"Semua Kategori"</option>
                    {move || category_options().into_iter().map(|category| {
                        let value = category.clone();
                        view! { <option value=value>{category}</option> }
                    }).collect_view()}
                </select>
            </div>
            <div class="col-md-3">
                <select
                    class="form-select"
                    prop:value=move || store.status().get().as_str()
                    on:change=move |ev| store.status().set(StatusFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all">"Semua Status"</option>
                    <option value="pending">"Belum Selesai"</option>
                    <option value="done">"Selesai"</option>
                </select>
            </div>
            <div class="col-md-2">
                <button type="button" class="btn btn-outline-secondary w-100" on:click=move |_| reset_filters(&store)>
                    "Reset"
                </button>
            </div>
        </div>
    }
}
