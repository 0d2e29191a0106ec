//! ts-media: image codec for stored photos.
//!
//! Photos are persisted as PNG. Incoming picks may be in any container the
//! `image` crate can sniff; they are re-encoded to PNG before storage.

pub mod codec;

pub use codec::{decode, encode_png, thumbnail};
pub use image::DynamicImage;
