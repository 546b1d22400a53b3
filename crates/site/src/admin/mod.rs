//! Admin panel state.
//!
//! Every guarded operation asks [`AdminAuth`] for a live session first. A
//! missing or expired session, or a 401 from the API, clears the stored
//! session so the panel falls back to the login screen.

pub mod dashboard;
pub mod gallery;
pub mod session;
pub mod settings;

pub use dashboard::{Confirm, Dashboard, DeletionTracker};
pub use gallery::GalleryDraft;
pub use session::{AdminAuth, AdminSession, FileSessionStore, MemorySessionStore, SessionStore};
pub use settings::SettingsEditor;
