//! Hosted media storage.
//!
//! [`MediaStore`] is the seam between the API and the CDN. The production
//! implementation is [`cloudinary::CloudinaryStore`]; [`batch::upload_batch`]
//! fans a multi-file upload out over any store.

pub mod batch;
pub mod cloudinary;
pub mod error;
pub mod store;

pub use batch::{upload_batch, UploadOutcome, UploadOutcomeView};
pub use cloudinary::{CloudinaryConfig, CloudinaryStore, SignatureAlgorithm};
pub use error::MediaError;
pub use store::{MediaStore, UploadFile, UploadedMedia};
