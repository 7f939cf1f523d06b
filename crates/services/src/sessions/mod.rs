mod command;
mod controller;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use command::SessionCommand;
pub use controller::{SessionController, SessionState};
pub use view::DisplayState;
