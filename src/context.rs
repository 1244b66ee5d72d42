//! Checklist Context
//!
//! Shared state for the Checklist View components, provided via the Leptos
//! Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpItemsApi;
use crate::controller::Checklist;
use crate::store::{ChecklistStateStoreFields, ChecklistStore};

#[derive(Clone, Copy)]
pub struct ChecklistContext {
    pub store: ChecklistStore,
    api: StoredValue<HttpItemsApi>,
}

impl ChecklistContext {
    pub fn new(store: ChecklistStore, api: HttpItemsApi) -> Self {
        Self { store, api: StoredValue::new(api) }
    }

    /// Run a controller operation against the current snapshot. The store is
    /// only written when the operation fetched a fresh collection, so a failed
    /// operation never puts an older snapshot back on screen.
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Checklist<HttpItemsApi>) -> Fut + 'static,
        Fut: Future<Output = Checklist<HttpItemsApi>> + 'static,
    {
        let store = self.store;
        let checklist = Checklist::with_items(self.api.get_value(), store.items().get_untracked());
        spawn_local(async move {
            let checklist = op(checklist).await;
            if checklist.refreshed() {
                store.items().set(checklist.into_items());
            }
        });
    }

    pub fn refresh(&self) {
        self.run(|mut c| async move {
            c.refresh().await;
            c
        });
    }

    pub fn toggle_done(&self, id: String) {
        self.run(move |mut c| async move {
            c.toggle_done(&id).await;
            c
        });
    }

    pub fn increment_quantity(&self, id: String) {
        self.run(move |mut c| async move {
            c.increment_quantity(&id).await;
            c
        });
    }

    pub fn decrement_quantity(&self, id: String) {
        self.run(move |mut c| async move {
            c.decrement_quantity(&id).await;
            c
        });
    }

    pub fn delete_item(&self, id: String) {
        self.run(move |mut c| async move {
            c.delete_item(&id).await;
            c
        });
    }
}

pub fn use_checklist() -> ChecklistContext {
    expect_context::<ChecklistContext>()
}
