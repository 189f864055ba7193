//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_dialog;
mod item_card;
mod item_fields;

pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use item_card::ItemCard;
pub use item_fields::ItemFields;
