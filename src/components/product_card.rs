//! Product Card Component

use leptos::prelude::*;

use crate::checklist::format_rupiah;
use crate::explore::{description_preview, ExploreState};
use crate::models::Product;

#[component]
pub fn ProductCard(
    product: Product,
    state: RwSignal<ExploreState>,
    exchange_rate: f64,
    on_import: Callback<Product>,
) -> impl IntoView {
    let id = product.id;
    let price = format_rupiah(product.price * exchange_rate);
    let preview = description_preview(&product.description);
    let to_import = product.clone();

    view! {
        <div class="col-md-4">
            <div class="card h-100 shadow-sm">
                <img
                    src=product.thumbnail
                    class="card-img-top"
                    width="300"
                    height="200"
                    style="object-fit: cover;"
                    alt=product.title.clone()
                />
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{product.title}</h5>
                    <p class="card-text text-muted small">{preview}</p>
                    <div class="mt-auto">
                        <span class="badge bg-primary text-uppercase">{product.category}</span>
                        <h5 class="mt-2">{price}</h5>
                        <div class="mt-3">
                            <div class="mb-2">
                                <input
                                    type="number"
                                    min="1"
                                    class="form-control"
                                    placeholder="Jumlah"
                                    prop:value=move || state.with(|s| s.quantity(id).to_string())
                                    on:input=move |ev| state.update(|s| s.set_quantity(id, &event_target_value(&ev)))
                                />
                            </div>
                            <button
                                class="btn btn-success w-100"
                                on:click=move |_| on_import.run(to_import.clone())
                            >
                                "Simpan ke List Perlengkapan"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
