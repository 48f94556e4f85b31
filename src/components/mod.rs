//! UI Components
//!
//! Leptos components for the character viewer.

mod filter_form;
mod character_table;
mod character_details;
mod pagination_bar;

pub use filter_form::FilterForm;
pub use character_table::CharacterTable;
pub use character_details::CharacterDetails;
pub use pagination_bar::PaginationBar;
