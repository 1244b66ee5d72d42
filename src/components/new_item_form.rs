//! New Item Form Component
//!
//! Add form for checklist items. The form is only cleared once the server
//! has accepted the item.

use chrono::Utc;
use leptos::prelude::*;

use crate::checklist::{parse_quantity, parse_unit_cost, ItemDraft};
use crate::context::use_checklist;
use crate::models::Priority;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_checklist();
    let draft = RwSignal::new(ItemDraft::default());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = draft.get_untracked();
        if snapshot.to_new_item().is_none() {
            return;
        }
        ctx.run(move |mut c| async move {
            if c.add_item(&snapshot).await {
                draft.set(ItemDraft::default());
            }
            c
        });
    };

    let today = Utc::now().format("%Y-%m-%d").to_string();

    view! {
        <form class="card mb-4" on:submit=create_item>
            <div class="card-header">
                <h5 class="mb-0">"Tambah Barang Baru"</h5>
            </div>
            <div class="card-body">
                <div class="row g-2">
                    <div class="col-md-6">
                        <input
                            class="form-control"
                            placeholder="Nama barang (contoh: Kursi)"
                            prop:value=move || draft.with(|d| d.label.clone())
                            on:input=move |ev| draft.update(|d| d.label = event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-3">
                        <input
                            type="number"
                            min="1"
                            class="form-control"
                            placeholder="Jumlah"
                            prop:value=move || draft.with(|d| d.quantity.to_string())
                            on:input=move |ev| draft.update(|d| d.quantity = parse_quantity(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="col-md-3">
                        <input
                            class="form-control"
                            placeholder="Kategori (contoh: Furniture)"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="row g-2 mt-2">
                    <div class="col-md-3">
                        <select
                            class="form-select"
                            prop:value=move || draft.with(|d| d.priority.as_str())
                            on:change=move |ev| draft.update(|d| d.priority = Priority::from_value(&event_target_value(&ev)))
                        >
                            <option value="low">"Prioritas Rendah"</option>
                            <option value="medium">"Prioritas Sedang"</option>
                            <option value="high">"Prioritas Tinggi"</option>
                        </select>
                    </div>
                    <div class="col-md-3">
                        <input
                            type="number"
                            min="0"
                            class="form-control"
                            placeholder="Biaya per unit (Rp)"
                            prop:value=move || draft.with(|d| d.unit_cost.to_string())
                            on:input=move |ev| draft.update(|d| d.unit_cost = parse_unit_cost(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="col-md-3">
                        <input
                            type="date"
                            class="form-control"
                            min=today
                            prop:value=move || draft.with(|d| d.due_date.clone())
                            on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-3">
                        <button type="submit" class="btn btn-success w-100">"Tambah"</button>
                    </div>
                </div>
                <div class="row g-2 mt-2">
                    <div class="col-12">
                        <textarea
                            class="form-control"
                            rows="2"
                            placeholder="Catatan tambahan..."
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>
            </div>
        </form>
    }
}
