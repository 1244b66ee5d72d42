//! Explore View State
//!
//! Catalog loading, per-product quantity selection and import of a product
//! as a checklist item.

use std::collections::HashMap;

use crate::checklist::parse_quantity;
use crate::commands::{CatalogApi, ItemsApi};
use crate::error::ApiResult;
use crate::models::{NewItem, Product};

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExploreState {
    pub products: Vec<Product>,
    quantities: HashMap<u64, u32>,
}

impl ExploreState {
    /// Quantity chosen for a product, 1 when untouched
    pub fn quantity(&self, product_id: u64) -> u32 {
        self.quantities.get(&product_id).copied().unwrap_or(1)
    }

    /// Store the raw input value, coerced the same way as the add form
    pub fn set_quantity(&mut self, product_id: u64, raw: &str) {
        self.quantities.insert(product_id, parse_quantity(raw));
    }
}

/// Fetch the catalog once. Failures leave the page empty.
pub async fn load_catalog<C: CatalogApi>(catalog: &C) -> Vec<Product> {
    match catalog.products().await {
        Ok(products) => {
            log::debug!("catalog returned {} products", products.len());
            products
        }
        Err(e) => {
            log::error!("failed to load catalog: {}", e);
            Vec::new()
        }
    }
}

/// Map a catalog product to a create body
pub fn product_to_item(product: &Product, quantity: u32, exchange_rate: f64) -> NewItem {
    NewItem {
        label: product.title.clone(),
        quantity: quantity.max(1),
        category: Some(product.category.clone()),
        priority: None,
        notes: Some(product.description.clone()),
        unit_cost: product.price * exchange_rate,
        due_date: None,
        photo: Some(product.thumbnail.clone()),
        done: false,
    }
}

/// Post the product as a new checklist item
pub async fn import_product<A: ItemsApi>(
    api: &A,
    product: &Product,
    quantity: u32,
    exchange_rate: f64,
) -> ApiResult<()> {
    let new_item = product_to_item(product, quantity, exchange_rate);
    api.create(&new_item).await.inspect_err(|e| {
        log::error!("failed to import product {} '{}': {}", product.id, product.title, e);
    })
}

/// First 80 characters of the description followed by an ellipsis
pub fn description_preview(description: &str) -> String {
    let preview: String = description.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::controller::tests::{Call, FakeApi};
    use crate::error::ApiError;

    fn chair() -> Product {
        Product {
            id: 1,
            title: "Chair".to_string(),
            thumbnail: "https://cdn.example/chair.png".to_string(),
            price: 10.0,
            category: "Furniture".to_string(),
            description: "...".to_string(),
        }
    }

    struct FakeCatalog {
        fail: Cell<bool>,
    }

    impl CatalogApi for FakeCatalog {
        async fn products(&self) -> ApiResult<Vec<Product>> {
            if self.fail.get() {
                return Err(ApiError::Transport("offline".to_string()));
            }
            Ok(vec![chair()])
        }
    }

    #[test]
    fn quantity_defaults_to_one() {
        let mut state = ExploreState::default();
        assert_eq!(state.quantity(1), 1);
        state.set_quantity(1, "3");
        assert_eq!(state.quantity(1), 3);
        assert_eq!(state.quantity(2), 1);
        state.set_quantity(1, "abc");
        assert_eq!(state.quantity(1), 1);
        state.set_quantity(2, "250");
        assert_eq!(state.quantity(2), 250);
    }

    #[test]
    fn import_maps_product_fields() {
        let api = FakeApi::default();
        block_on(import_product(&&api, &chair(), 3, 15000.0)).unwrap();

        let calls = api.mutations();
        let [Call::Create(sent)] = calls.as_slice() else { panic!("expected one create") };
        assert_eq!(sent.label, "Chair");
        assert_eq!(sent.quantity, 3);
        assert_eq!(sent.unit_cost, 150000.0);
        assert_eq!(sent.category.as_deref(), Some("Furniture"));
        assert_eq!(sent.notes.as_deref(), Some("..."));
        assert_eq!(sent.photo.as_deref(), Some("https://cdn.example/chair.png"));
        assert_eq!(sent.priority, None);
        assert!(!sent.done);
    }

    #[test]
    fn failed_import_surfaces_error() {
        let api = FakeApi::default();
        api.failing.set(true);
        assert!(block_on(import_product(&&api, &chair(), 1, 15000.0)).is_err());
    }

    #[test]
    fn catalog_failure_yields_empty_list() {
        let catalog = FakeCatalog { fail: Cell::new(false) };
        assert_eq!(block_on(load_catalog(&catalog)).len(), 1);
        catalog.fail.set(true);
        assert!(block_on(load_catalog(&catalog)).is_empty());
    }

    #[test]
    fn preview_truncates_on_chars() {
        let long = "é".repeat(100);
        let preview = description_preview(&long);
        assert_eq!(preview.chars().count(), 83);
        assert_eq!(description_preview("short"), "short...");
    }
}
