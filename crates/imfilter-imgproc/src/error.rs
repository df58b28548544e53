use imfilter_image::ImageError;

/// An error type for filter selection and application.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// The filter name is not one of the known filters.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// No filter name was given.
    #[error("The filter list is empty")]
    EmptyFilterList,

    /// Error to create an image or a kernel.
    #[error(transparent)]
    Image(#[from] ImageError),
}
