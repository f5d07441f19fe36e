pub use super::city::Entity as City;
pub use super::clothing_item::Entity as ClothingItem;
pub use super::user::Entity as User;
pub use super::user_city::Entity as UserCity;
pub use super::user_clothing_choice::Entity as UserClothingChoice;
pub use super::user_location::Entity as UserLocation;
