pub mod common;
pub mod health;
pub mod hotels;

pub use health::{health, ready};
pub use hotels::get_hotels;
