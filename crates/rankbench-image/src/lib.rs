#![deny(missing_docs)]
//! Image types and traits for the rankbench denoising study.

/// image representation for the filtering and evaluation pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
