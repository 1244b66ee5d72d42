//! Frontend Models
//!
//! Data structures matching the persistence API and the product catalog.

use serde::{Deserialize, Deserializer, Serialize};

/// Item priority, serialized lowercase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a `<select>` value, unknown values fall back to medium
    pub fn from_value(value: &str) -> Self {
        match value {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    /// Short badge label
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Tinggi",
            Priority::Medium => "Sedang",
            Priority::Low => "Rendah",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "badge ms-2 bg-danger",
            Priority::Medium => "badge ms-2 bg-warning",
            Priority::Low => "badge ms-2 bg-secondary",
        }
    }
}

/// Checklist item (matches the persistence API record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub label: String,
    pub quantity: u32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_cost: f64,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Explicit `null` decodes the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Item {
    /// `unit_cost * quantity`
    pub fn line_cost(&self) -> f64 {
        self.unit_cost * f64::from(self.quantity)
    }

    /// Shallow merge: every field set in `patch` replaces the current value
    pub fn merged(&self, patch: &ItemPatch) -> Item {
        let mut next = self.clone();
        if let Some(label) = &patch.label {
            next.label = label.clone();
        }
        if let Some(quantity) = patch.quantity {
            next.quantity = quantity;
        }
        if let Some(category) = &patch.category {
            next.category = category.clone();
        }
        if let Some(priority) = patch.priority {
            next.priority = priority;
        }
        if let Some(notes) = &patch.notes {
            next.notes = notes.clone();
        }
        if let Some(unit_cost) = patch.unit_cost {
            next.unit_cost = unit_cost;
        }
        if let Some(due_date) = &patch.due_date {
            next.due_date = due_date.clone();
        }
        if let Some(photo) = &patch.photo {
            next.photo = photo.clone();
        }
        if let Some(done) = patch.done {
            next.done = done;
        }
        next
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub label: String,
    pub quantity: u32,
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub notes: Option<String>,
    pub unit_cost: f64,
    pub due_date: Option<String>,
    pub photo: Option<String>,
    pub done: bool,
}

/// Partial changes for an update. Nested options clear a field with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub label: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub notes: Option<Option<String>>,
    pub unit_cost: Option<f64>,
    pub due_date: Option<Option<String>>,
    pub photo: Option<Option<String>>,
    pub done: Option<bool>,
}

impl ItemPatch {
    pub fn quantity(quantity: u32) -> Self {
        Self { quantity: Some(quantity), ..Default::default() }
    }

    pub fn done(done: bool) -> Self {
        Self { done: Some(done), ..Default::default() }
    }
}

/// External catalog product
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Catalog feed envelope: `{ "products": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<Product>,
}
