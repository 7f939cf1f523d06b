#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod progress_store;
pub mod sessions;

pub use wordcards_core::{RoundPhase, Shuffler};

pub use app_services::AppServices;
pub use config::{ListCatalog, SessionConfig};
pub use error::SessionError;
pub use progress_store::ProgressStore;

pub use sessions::{DisplayState, SessionCommand, SessionController, SessionState};
