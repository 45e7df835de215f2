pub mod inventory;
pub mod menu;
