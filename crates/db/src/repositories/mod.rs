//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_settings_repo;
pub mod admin_credentials_repo;
pub mod admin_session_repo;
pub mod contact_repo;
pub mod hero_settings_repo;
pub mod project_repo;
pub mod testimonial_repo;

pub use about_settings_repo::AboutSettingsRepo;
pub use admin_credentials_repo::AdminCredentialsRepo;
pub use admin_session_repo::AdminSessionRepo;
pub use contact_repo::ContactRepo;
pub use hero_settings_repo::HeroSettingsRepo;
pub use project_repo::ProjectRepo;
pub use testimonial_repo::TestimonialRepo;
