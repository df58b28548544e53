//! Filter operations
//!
//! This module provides the convolution engine and the standard filters built on it.

/// Convolution kernel type.
mod kernel;
pub use kernel::Kernel;

/// Filter kernels
pub mod kernels;
pub use kernels::FilterKind;

/// Convolution engine
mod convolution;
pub use convolution::*;

/// Filter selection and composition
mod ops;
pub use ops::*;
