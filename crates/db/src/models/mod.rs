//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update or upsert DTO (all `Option` fields) for patches

pub mod admin;
pub mod contact;
pub mod project;
pub mod settings;
pub mod testimonial;
