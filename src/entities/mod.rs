pub mod prelude;

pub mod found_items;
pub mod lost_items;
pub mod users;
