//! Application-level modules for the protein browser.
//!
//! Contains the main application coordinator, centralized state, the
//! consumed session seam, and settings persistence.

mod app_state;
mod application_coordinator;
mod session;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use session::{LocalSession, SessionProvider};
pub use settings_coordinator::SettingsCoordinator;
