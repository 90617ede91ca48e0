// SPDX-License-Identifier: MPL-2.0
//! Media handling: file ingestion, image decoding, and collage export.

pub mod export;
pub mod image;
pub mod ingest;

pub use image::{decode_image, ImageData};
