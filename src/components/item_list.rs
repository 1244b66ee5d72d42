//! Item List Component
//!
//! Filtered item list with its heading and empty states.

use leptos::prelude::*;

use crate::checklist::{filter_items, EmptyNotice};
use crate::components::ItemRow;
use crate::context::use_checklist;
use crate::store::{current_filter, ChecklistStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_checklist().store;

    let visible = move || {
        let filter = current_filter(&store);
        store.items().with(|items| filter_items(items, &filter))
    };
    let total = move || store.items().with(|items| items.len());
    let notice = move || EmptyNotice::of(total(), visible().len());

    view! {
        <div class="mb-3">
            <h5>{move || format!("Daftar Barang ({} dari {})", visible().len(), total())}</h5>
        </div>
        <ul class="list-group">
            <For
                each=visible
                key=|item| {
                    // Every displayed field, so edits re-render the row
                    (
                        item.id.clone(),
                        item.label.clone(),
                        item.quantity,
                        item.done,
                        item.priority,
                        item.category.clone(),
                        item.notes.clone(),
                        item.due_date.clone(),
                        item.unit_cost.to_bits(),
                    )
                }
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>

        <Show when=move || notice() == Some(EmptyNotice::NoMatches)>
            <div class="text-center mt-4">
                <p class="text-muted">"Tidak ada barang yang sesuai dengan filter pencarian."</p>
            </div>
        </Show>
        <Show when=move || notice() == Some(EmptyNotice::NoItems)>
            <div class="text-center mt-5">
                <p class="text-muted">"Belum ada barang yang ditambahkan. Mulai dengan menambah barang baru!"</p>
            </div>
        </Show>
    }
}
