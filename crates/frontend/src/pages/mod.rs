pub mod category;
pub mod home;
pub mod item;
pub mod item_card;
pub mod status;
