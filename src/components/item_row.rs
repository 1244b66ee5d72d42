//! Item Row Component
//!
//! A single checklist entry with its badges and actions.

use chrono::Utc;
use leptos::prelude::*;

use crate::checklist::{format_due_date, format_rupiah, is_overdue};
use crate::components::DeleteConfirmButton;
use crate::context::use_checklist;
use crate::models::Item;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_checklist();

    let id = item.id.clone();
    let done = item.done;
    let overdue = is_overdue(&item, Utc::now());
    let line_cost = format_rupiah(item.line_cost());
    let due = item.due_date.as_deref().map(format_due_date);
    let category = item.category.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "Tidak ada kategori".to_string());

    let toggle_id = id.clone();
    let dec_id = id.clone();
    let inc_id = id.clone();
    let delete_id = id;

    view! {
        <li class=if done { "list-group-item list-group-item-success" } else { "list-group-item" }>
            <div class="d-flex justify-content-between align-items-start">
                <div class="d-flex align-items-start">
                    <input
                        type="checkbox"
                        class="form-check-input me-3 mt-1"
                        prop:checked=done
                        on:change=move |ev| {
                            // Stays at the stored value until a refresh re-keys the row
                            event_target::<web_sys::HtmlInputElement>(&ev).set_checked(done);
                            ctx.toggle_done(toggle_id.clone());
                        }
                    />
                    <div class="flex-grow-1">
                        <div class="d-flex align-items-center mb-1">
                            <span class=if done { "fw-bold text-decoration-line-through text-muted" } else { "fw-bold" }>
                                {item.label}
                            </span>
                            <span class=item.priority.badge_class()>{item.priority.label()}</span>
                            {overdue.then(|| view! { <span class="badge bg-danger ms-1">"Terlambat"</span> })}
                        </div>

                        <div class="row g-2 text-muted small">
                            <div class="col-md-3">
                                "Jumlah: " {item.quantity}
                                <button
                                    class="btn btn-sm btn-outline-danger ms-2"
                                    on:click=move |_| ctx.decrement_quantity(dec_id.clone())
                                >
                                    "-"
                                </button>
                                <button
                                    class="btn btn-sm btn-outline-primary ms-1"
                                    on:click=move |_| ctx.increment_quantity(inc_id.clone())
                                >
                                    "+"
                                </button>
                            </div>
                            <div class="col-md-3">{category}</div>
                            <div class="col-md-3">{line_cost}</div>
                            {due.map(|due| view! { <div class="col-md-3">{due}</div> })}
                        </div>

                        {item.notes.filter(|n| !n.is_empty()).map(|notes| view! {
                            <div class="mt-2">
                                <small class="text-muted">{notes}</small>
                            </div>
                        })}
                    </div>
                </div>

                <DeleteConfirmButton
                    button_class="btn btn-sm btn-outline-danger"
                    on_confirm=move |_| ctx.delete_item(delete_id.clone())
                />
            </div>
        </li>
    }
}
