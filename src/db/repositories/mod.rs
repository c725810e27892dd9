pub mod found_item;
pub mod lost_item;
pub mod user;
