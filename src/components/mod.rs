//! UI Components
//!
//! Reusable Leptos components.

mod chip_input;
mod todo_item_card;
mod todo_item_form;
mod todo_items_filters;
mod todo_items_list;

pub use chip_input::ChipInput;
pub use todo_item_card::TodoItemCard;
pub use todo_item_form::TodoItemForm;
pub use todo_items_filters::TodoItemsFilters;
pub use todo_items_list::TodoItemsList;
