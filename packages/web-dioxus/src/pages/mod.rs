//! Page components

pub mod admin;

mod home;
pub use home::Home;
