//! Checklist View
//!
//! Owns the item store and lays out the checklist page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpItemsApi;
use crate::components::{CostCards, FilterBar, ItemList, NewItemForm, ProgressPanel};
use crate::config::AppConfig;
use crate::context::ChecklistContext;
use crate::store::ChecklistState;

#[component]
pub fn ChecklistView() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = Store::new(ChecklistState::default());
    let ctx = ChecklistContext::new(store, HttpItemsApi::new(config.api_base));
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.refresh());

    view! {
        <div>
            <h2 class="mb-3">"Checklist Perlengkapan Acara"</h2>
            <ProgressPanel />
            <FilterBar />
            <NewItemForm />
            <CostCards />
            <ItemList />
        </div>
    }
}
