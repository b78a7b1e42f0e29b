//! Admin pages

mod categories;
mod clients;
mod contracts;
mod dashboard;
mod discovery;
mod leads;
mod login;

pub use categories::*;
pub use clients::*;
pub use contracts::*;
pub use dashboard::*;
pub use discovery::*;
pub use leads::*;
pub use login::*;
