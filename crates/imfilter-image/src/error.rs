/// An error type for image and kernel construction.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the width, height or number of channels is zero.
    #[error("Invalid image dimensions {0}x{1}x{2}, all of them must be greater than zero")]
    InvalidDimensions(usize, usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the sample buffer cannot be allocated.
    #[error("Failed to allocate an image buffer of {0}x{1}x{2} samples")]
    AllocationError(usize, usize, usize),

    /// Error when the kernel size is zero or even.
    #[error("Invalid kernel size {0}, it must be odd and greater than zero")]
    InvalidKernelSize(usize),

    /// Error when fewer weights than the kernel area are supplied.
    #[error("Kernel data length ({0}) is smaller than the kernel area ({1})")]
    InvalidKernelData(usize, usize),
}

impl ImageError {
    /// Whether the error reports a malformed image or kernel request.
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(
            self,
            ImageError::InvalidDimensions(..)
                | ImageError::InvalidChannelShape(..)
                | ImageError::InvalidKernelSize(..)
                | ImageError::InvalidKernelData(..)
        )
    }
}
