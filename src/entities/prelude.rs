pub use super::found_items::Entity as FoundItems;
pub use super::lost_items::Entity as LostItems;
pub use super::users::Entity as Users;
