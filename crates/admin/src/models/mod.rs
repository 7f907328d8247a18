//! Domain models for the admin panel.

pub mod event;
pub mod session;

pub use event::{Event, NewEvent};
pub use session::CurrentAdmin;
