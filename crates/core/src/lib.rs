//! Domain types and pure validation logic for the Folio portfolio service.
//!
//! Nothing in this crate touches the network or the database; it is shared
//! by the API server, the repositories, and the site client.

pub mod achievements;
pub mod contact;
pub mod error;
pub mod hashing;
pub mod media;
pub mod project;
pub mod services;
pub mod testimonial;
pub mod types;
pub mod validation;
