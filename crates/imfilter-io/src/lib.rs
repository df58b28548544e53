#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_rgb8`] for automatic format detection.
pub mod functional;

/// Binary PPM (P6) image encoding.
pub mod ppm;

pub use crate::error::IoError;
