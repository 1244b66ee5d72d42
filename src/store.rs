//! Checklist View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::checklist::{ChecklistFilter, StatusFilter};
use crate::models::Item;

/// Checklist View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ChecklistState {
    /// Last collection fetched from the server
    pub items: Vec<Item>,
    /// Search box
    pub search: String,
    /// Selected category, empty for all
    pub category: String,
    pub status: StatusFilter,
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

/// Current filter selections, tracked
pub fn current_filter(store: &ChecklistStore) -> ChecklistFilter {
    ChecklistFilter {
        search: store.search().get(),
        category: store.category().get(),
        status: store.status().get(),
    }
}

/// Clear search, category and status
pub fn reset_filters(store: &ChecklistStore) {
    store.search().set(String::new());
    store.category().set(String::new());
    store.status().set(StatusFilter::All);
}
