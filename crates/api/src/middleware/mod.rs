//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Decodes the JWT Bearer token.
//! - [`admin::RequireAdmin`] -- Additionally requires the token's session to be active.

pub mod admin;
pub mod auth;
