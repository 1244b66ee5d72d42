//! UI Components
//!
//! Leptos components for the Checklist and Explore views.

mod checklist_view;
mod new_item_form;
mod filter_bar;
mod summary_panel;
mod item_list;
mod item_row;
mod delete_confirm_button;
mod explore_view;
mod product_card;

pub use checklist_view::ChecklistView;
pub use new_item_form::NewItemForm;
pub use filter_bar::FilterBar;
pub use summary_panel::{CostCards, ProgressPanel};
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use explore_view::ExploreView;
pub use product_card::ProductCard;
