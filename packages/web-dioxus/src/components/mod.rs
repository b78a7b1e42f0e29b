//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod discovery_table;
mod loading;
mod toast;

pub use admin_layout::*;
pub use admin_nav::*;
pub use discovery_table::*;
pub use loading::*;
pub use toast::*;
