//! Typed client and view state for the Folio public site and admin panel.
//!
//! [`client`] talks to the Folio API over HTTP. The remaining modules hold
//! the state a renderer needs (load states, filters, rotators, forms) and
//! are independent of any UI toolkit.

pub mod admin;
pub mod carousel;
pub mod client;
pub mod contact;
pub mod error;
pub mod filter;
pub mod home;
pub mod rotator;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AdminApi, HttpContentClient, PublicApi};
pub use error::ClientError;
pub use state::LoadState;
