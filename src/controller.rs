//! Checklist Controller
//!
//! Mutation orchestration for the Checklist View. Every successful
//! mutation is followed by a full refresh from the server; failures are
//! logged and leave the current snapshot untouched.

use crate::checklist::ItemDraft;
use crate::commands::ItemsApi;
use crate::models::{Item, ItemPatch};

pub struct Checklist<A> {
    api: A,
    items: Vec<Item>,
    /// Set once a fetch has succeeded; the snapshot is only worth publishing then
    refreshed: bool,
}

impl<A: ItemsApi> Checklist<A> {
    pub fn new(api: A) -> Self {
        Self::with_items(api, Vec::new())
    }

    /// Resume from a snapshot already on screen
    pub fn with_items(api: A, items: Vec<Item>) -> Self {
        Self { api, items, refreshed: false }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Whether any fetch succeeded since this controller was built
    pub fn refreshed(&self) -> bool {
        self.refreshed
    }

    fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the snapshot with the server's collection
    pub async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(items) => {
                log::debug!("loaded {} items", items.len());
                self.items = items;
                self.refreshed = true;
            }
            Err(e) => log::error!("failed to fetch items: {}", e),
        }
    }

    /// Create an item from the form. Returns `true` when the server accepted it,
    /// which is the signal to reset the form.
    pub async fn add_item(&mut self, draft: &ItemDraft) -> bool {
        let Some(new_item) = draft.to_new_item() else {
            log::debug!("ignoring add with blank label");
            return false;
        };
        match self.api.create(&new_item).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                log::error!("failed to add item '{}': {}", new_item.label, e);
                false
            }
        }
    }

    pub async fn toggle_done(&mut self, id: &str) {
        let Some(done) = self.find(id).map(|item| item.done) else {
            return;
        };
        self.update_item(id, &ItemPatch::done(!done)).await;
    }

    /// Merge `patch` over the current record and send the whole record
    pub async fn update_item(&mut self, id: &str, patch: &ItemPatch) {
        let Some(merged) = self.find(id).map(|item| item.merged(patch)) else {
            return;
        };
        match self.api.replace(&merged).await {
            Ok(()) => self.refresh().await,
            Err(e) => log::error!("failed to update item {}: {}", id, e),
        }
    }

    pub async fn increment_quantity(&mut self, id: &str) {
        let Some(quantity) = self.find(id).map(|item| item.quantity) else {
            return;
        };
        self.update_item(id, &ItemPatch::quantity(quantity.saturating_add(1))).await;
    }

    /// Decrementing the last unit deletes the item instead of storing zero
    pub async fn decrement_quantity(&mut self, id: &str) {
        let Some(quantity) = self.find(id).map(|item| item.quantity) else {
            return;
        };
        if quantity <= 1 {
            self.delete_item(id).await;
        } else {
            self.update_item(id, &ItemPatch::quantity(quantity - 1)).await;
        }
    }

    pub async fn delete_item(&mut self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => log::error!("failed to delete item {}: {}", id, e),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::error::{ApiError, ApiResult};
    use crate::models::{NewItem, Priority};

    /// Recorded call against the fake backend
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List,
        Create(NewItem),
        Replace(Item),
        Delete(String),
    }

    /// In-memory persistence API
    #[derive(Default)]
    pub struct FakeApi {
        pub items: RefCell<Vec<Item>>,
        pub calls: RefCell<Vec<Call>>,
        pub failing: Cell<bool>,
        next_id: Cell<u32>,
    }

    impl FakeApi {
        pub fn with(items: Vec<Item>) -> Self {
            Self { items: RefCell::new(items), ..Default::default() }
        }

        fn check(&self) -> ApiResult<()> {
            if self.failing.get() {
                Err(ApiError::Status { status: 500, url: "/api/items".to_string() })
            } else {
                Ok(())
            }
        }

        pub fn mutations(&self) -> Vec<Call> {
            self.calls.borrow().iter().filter(|c| **c != Call::List).cloned().collect()
        }
    }

    impl ItemsApi for &FakeApi {
        async fn list(&self) -> ApiResult<Vec<Item>> {
            self.calls.borrow_mut().push(Call::List);
            self.check()?;
            Ok(self.items.borrow().clone())
        }

        async fn create(&self, item: &NewItem) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Create(item.clone()));
            self.check()?;
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.items.borrow_mut().push(Item {
                id: format!("srv-{}", id),
                label: item.label.clone(),
                quantity: item.quantity,
                category: item.category.clone(),
                priority: item.priority.unwrap_or_default(),
                notes: item.notes.clone(),
                unit_cost: item.unit_cost,
                due_date: item.due_date.clone(),
                photo: item.photo.clone(),
                done: item.done,
                created_at: None,
                updated_at: None,
            });
            Ok(())
        }

        async fn replace(&self, item: &Item) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Replace(item.clone()));
            self.check()?;
            if let Some(stored) = self.items.borrow_mut().iter_mut().find(|i| i.id == item.id) {
                *stored = item.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            self.check()?;
            self.items.borrow_mut().retain(|i| i.id != id);
            Ok(())
        }
    }

    pub fn make_item(id: &str, label: &str, quantity: u32) -> Item {
        Item {
            id: id.to_string(),
            label: label.to_string(),
            quantity,
            category: Some("Furniture".to_string()),
            priority: Priority::Low,
            notes: Some("lipat".to_string()),
            unit_cost: 10000.0,
            due_date: None,
            photo: None,
            done: false,
            created_at: Some("2026-10-01T08:00:00Z".to_string()),
            updated_at: None,
        }
    }

    fn loaded(api: &FakeApi) -> Checklist<&FakeApi> {
        let mut checklist = Checklist::new(api);
        block_on(checklist.refresh());
        api.calls.borrow_mut().clear();
        checklist
    }

    #[test]
    fn refresh_replaces_snapshot() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = Checklist::new(&api);
        assert!(checklist.items().is_empty());
        block_on(checklist.refresh());
        assert_eq!(checklist.items().len(), 1);
    }

    #[test]
    fn failed_refresh_keeps_stale_items() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        api.items.borrow_mut().clear();
        api.failing.set(true);
        block_on(checklist.refresh());
        assert_eq!(checklist.items().len(), 1);
    }

    #[test]
    fn blank_label_makes_no_request() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        let draft = ItemDraft { label: "   ".to_string(), ..Default::default() };
        assert!(!block_on(checklist.add_item(&draft)));
        assert!(api.calls.borrow().is_empty());
        assert_eq!(checklist.items().len(), 1);
    }

    #[test]
    fn add_item_creates_then_refreshes() {
        let api = FakeApi::default();
        let mut checklist = loaded(&api);
        let draft = ItemDraft { label: " Tenda ".to_string(), quantity: 2, ..Default::default() };
        assert!(block_on(checklist.add_item(&draft)));
        assert_eq!(*api.calls.borrow().last().unwrap(), Call::List);
        assert_eq!(checklist.items().len(), 1);
        assert_eq!(checklist.items()[0].label, "Tenda");
        assert_eq!(checklist.items()[0].id, "srv-1");
    }

    #[test]
    fn failed_add_reports_false() {
        let api = FakeApi::default();
        let mut checklist = loaded(&api);
        api.failing.set(true);
        let draft = ItemDraft { label: "Tenda".to_string(), ..Default::default() };
        assert!(!block_on(checklist.add_item(&draft)));
        assert!(checklist.items().is_empty());
    }

    #[test]
    fn toggle_sends_full_record() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        block_on(checklist.toggle_done("a"));

        let mut expected = make_item("a", "Kursi", 2);
        expected.done = true;
        assert_eq!(api.mutations(), vec![Call::Replace(expected)]);
        assert!(checklist.items()[0].done);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        block_on(checklist.toggle_done("zzz"));
        block_on(checklist.update_item("zzz", &ItemPatch::quantity(4)));
        block_on(checklist.increment_quantity("zzz"));
        block_on(checklist.decrement_quantity("zzz"));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn update_merges_over_current_record() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        let patch = ItemPatch { label: Some("Kursi tamu".to_string()), ..Default::default() };
        block_on(checklist.update_item("a", &patch));

        let Call::Replace(sent) = &api.mutations()[0] else { panic!("expected a replace") };
        assert_eq!(sent.label, "Kursi tamu");
        assert_eq!(sent.quantity, 2);
        assert_eq!(sent.notes.as_deref(), Some("lipat"));
        assert_eq!(sent.created_at.as_deref(), Some("2026-10-01T08:00:00Z"));
    }

    #[test]
    fn increment_adds_one() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        block_on(checklist.increment_quantity("a"));
        assert_eq!(checklist.items()[0].quantity, 3);
    }

    #[test]
    fn decrement_above_one_updates() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = loaded(&api);
        block_on(checklist.decrement_quantity("a"));
        assert_eq!(api.mutations(), vec![Call::Replace(make_item("a", "Kursi", 1))]);
        assert_eq!(checklist.items()[0].quantity, 1);
    }

    #[test]
    fn decrement_last_unit_deletes() {
        let api = FakeApi::with(vec![make_item("x", "Kursi", 1), make_item("y", "Meja", 3)]);
        let mut checklist = loaded(&api);
        block_on(checklist.decrement_quantity("x"));

        assert_eq!(api.mutations(), vec![Call::Delete("x".to_string())]);
        assert!(checklist.items().iter().all(|item| item.id != "x"));
        assert!(checklist.items().iter().all(|item| item.quantity >= 1));
    }

    #[test]
    fn failed_operations_report_not_refreshed() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 1)]);
        let snapshot = api.items.borrow().clone();
        api.failing.set(true);

        let mut checklist = Checklist::with_items(&api, snapshot.clone());
        block_on(checklist.delete_item("a"));
        assert!(!checklist.refreshed());

        let mut checklist = Checklist::with_items(&api, snapshot.clone());
        block_on(checklist.toggle_done("a"));
        assert!(!checklist.refreshed());
        assert!(!checklist.items()[0].done);

        let mut checklist = Checklist::with_items(&api, snapshot.clone());
        block_on(checklist.refresh());
        assert!(!checklist.refreshed());

        api.failing.set(false);
        let mut checklist = Checklist::with_items(&api, snapshot);
        block_on(checklist.toggle_done("zzz"));
        assert!(!checklist.refreshed());
    }

    #[test]
    fn successful_operation_reports_refreshed() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 2)]);
        let mut checklist = Checklist::with_items(&api, api.items.borrow().clone());
        block_on(checklist.increment_quantity("a"));
        assert!(checklist.refreshed());
    }

    #[test]
    fn failed_delete_keeps_item() {
        let api = FakeApi::with(vec![make_item("a", "Kursi", 1)]);
        let mut checklist = loaded(&api);
        api.failing.set(true);
        block_on(checklist.delete_item("a"));
        assert_eq!(api.mutations(), vec![Call::Delete("a".to_string())]);
        assert_eq!(checklist.items().len(), 1);
    }
}
