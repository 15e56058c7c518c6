pub mod error;
pub mod health;
pub mod pantry;
pub mod security;
pub mod shopping_list;
pub mod tags;
