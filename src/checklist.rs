//! Checklist Derivations
//!
//! Pure functions over an item snapshot: filtering, cost aggregation,
//! progress, overdue detection and add-form normalization. Nothing here
//! touches the DOM, so the view recomputes these on every change.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{Item, NewItem, Priority};

// ========================
// Filtering
// ========================

/// Completion status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Pending,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Done => "done",
            StatusFilter::Pending => "pending",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "done" => StatusFilter::Done,
            "pending" => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }

    fn accepts(self, done: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Done => done,
            StatusFilter::Pending => !done,
        }
    }
}

/// Active search and filter selections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistFilter {
    pub search: String,
    /// Empty means every category
    pub category: String,
    pub status: StatusFilter,
}

impl ChecklistFilter {
    /// An item passes only if search, category and status all accept it
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item) && self.matches_category(item) && self.status.accepts(item.done)
    }

    fn matches_search(&self, item: &Item) -> bool {
        let needle = self.search.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);
        contains(item.label.as_str())
            || item.category.as_deref().is_some_and(contains)
            || item.notes.as_deref().is_some_and(contains)
            || needle.is_empty()
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.category.is_empty() || item.category.as_deref() == Some(self.category.as_str())
    }
}

pub fn filter_items(items: &[Item], filter: &ChecklistFilter) -> Vec<Item> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Unique non-empty categories, for the category selector
pub fn categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.category.as_deref())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Which empty-state message the list shows, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyNotice {
    /// Nothing has been added yet
    NoItems,
    /// Items exist but the filters hide all of them
    NoMatches,
}

impl EmptyNotice {
    pub fn of(total: usize, visible: usize) -> Option<Self> {
        if total == 0 {
            Some(EmptyNotice::NoItems)
        } else if visible == 0 {
            Some(EmptyNotice::NoMatches)
        } else {
            None
        }
    }
}

// ========================
// Aggregates
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostSummary {
    pub total: f64,
    pub completed: f64,
    pub remaining: f64,
}

impl CostSummary {
    pub fn of(items: &[Item]) -> Self {
        let total: f64 = items.iter().map(Item::line_cost).sum();
        let completed: f64 = items.iter().filter(|item| item.done).map(Item::line_cost).sum();
        Self { total, completed, remaining: total - completed }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(items: &[Item]) -> Self {
        Self { done: items.iter().filter(|item| item.done).count(), total: items.len() }
    }

    /// Unrounded share of completed items in `[0, 100]`, used for the bar width
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.done as f64 / self.total as f64
    }

    /// Rounded percentage, 0 for an empty list
    pub fn percentage(&self) -> u32 {
        self.ratio().round() as u32
    }
}

pub fn completion_percentage(items: &[Item]) -> u32 {
    Progress::of(items).percentage()
}

// ========================
// Due dates
// ========================

/// Parse a stored due date. Bare calendar dates are taken as UTC midnight.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(at.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

/// Due strictly before `now` and not yet done
pub fn is_overdue(item: &Item, now: DateTime<Utc>) -> bool {
    !item.done
        && item
            .due_date
            .as_deref()
            .and_then(parse_due_date)
            .is_some_and(|due| due < now)
}

/// Short `d/m/yyyy` rendering of a due date, or the raw text if it does not parse
pub fn format_due_date(raw: &str) -> String {
    parse_due_date(raw)
        .map(|due| due.format("%-d/%-m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

// ========================
// Add form
// ========================

/// In-progress item in the add form
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub label: String,
    pub quantity: u32,
    pub category: String,
    pub priority: Priority,
    pub notes: String,
    pub unit_cost: f64,
    pub due_date: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            label: String::new(),
            quantity: 1,
            category: String::new(),
            priority: Priority::Medium,
            notes: String::new(),
            unit_cost: 0.0,
            due_date: String::new(),
        }
    }
}

impl ItemDraft {
    /// Build the create body, or `None` when the label is blank
    pub fn to_new_item(&self) -> Option<NewItem> {
        let label = self.label.trim();
        if label.is_empty() {
            return None;
        }
        Some(NewItem {
            label: label.to_string(),
            quantity: self.quantity.max(1),
            category: non_empty(&self.category),
            priority: Some(self.priority),
            notes: non_empty(&self.notes),
            unit_cost: self.unit_cost.max(0.0),
            due_date: non_empty(&self.due_date),
            photo: None,
            done: false,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Lenient quantity input: anything that is not a number ≥ 1 becomes 1
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => value.min(u32::MAX as f64) as u32,
        _ => 1,
    }
}

/// Lenient cost input: anything that is not a number ≥ 0 becomes 0
pub fn parse_unit_cost(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// `Rp 1.250.000`
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("Rp -{}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}
