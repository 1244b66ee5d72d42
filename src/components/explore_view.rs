//! Explore View
//!
//! Browses the external product catalog and imports products into the
//! checklist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{navigate, CHECKLIST_PATH};
use crate::commands::{HttpCatalog, HttpItemsApi};
use crate::components::ProductCard;
use crate::config::AppConfig;
use crate::explore::{import_product, load_catalog, ExploreState};
use crate::models::Product;

#[component]
pub fn ExploreView() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let state = RwSignal::new(ExploreState::default());

    // Load catalog on mount
    let catalog = HttpCatalog::new(config.catalog_url.clone());
    Effect::new(move |_| {
        let catalog = catalog.clone();
        spawn_local(async move {
            let products = load_catalog(&catalog).await;
            state.update(|s| s.products = products);
        });
    });

    let items_api = HttpItemsApi::new(config.api_base.clone());
    let exchange_rate = config.exchange_rate;
    let on_import = Callback::new(move |product: Product| {
        let api = items_api.clone();
        let quantity = state.with_untracked(|s| s.quantity(product.id));
        spawn_local(async move {
            if import_product(&api, &product, quantity, exchange_rate).await.is_ok() {
                navigate(CHECKLIST_PATH);
            }
        });
    });

    view! {
        <div>
            <h1 class="mb-4 fw-bold">"Explore Perlengkapan untuk Acara"</h1>
            <p class="text-muted">
                "Daftar barang eksternal yang bisa dijadikan referensi sebelum membuat list perlengkapan acara."
            </p>
            <div class="row g-4 mt-3">
                <For
                    each=move || state.with(|s| s.products.clone())
                    key=|product| product.id
                    children=move |product| view! {
                        <ProductCard
                            product=product
                            state=state
                            exchange_rate=exchange_rate
                            on_import=on_import
                        />
                    }
                />
            </div>
        </div>
    }
}
