use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use imfilter_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Compute the number of samples for the given extents, rejecting zero extents
/// and products that do not fit in an allocation.
fn num_samples(size: ImageSize, channels: usize) -> Result<usize, ImageError> {
    let (w, h, c) = (size.width, size.height, channels);

    if w == 0 || h == 0 || c == 0 {
        return Err(ImageError::InvalidDimensions(w, h, c));
    }

    w.checked_mul(h)
        .and_then(|n| n.checked_mul(c))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(ImageError::AllocationError(w, h, c))
}

/// Represents an 8-bit image with interleaved channels.
///
/// The samples are stored row-major as `(H, W, C)`: the sample of the pixel
/// `(x, y)` at channel `z` lives at `(y * width + x) * channels + z`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    channels: usize,
    data: Vec<u8>,
}

impl Image {
    /// Create a new zero filled image.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if any extent is zero and
    /// [`ImageError::AllocationError`] if the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use imfilter_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    3,
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize) -> Result<Self, ImageError> {
        let len = num_samples(size, channels)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ImageError::AllocationError(size.width, size.height, channels))?;
        data.resize(len, 0u8);

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Create a new image from existing samples.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of samples per pixel.
    /// * `data` - The interleaved samples of the image.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use imfilter_image::{Image, ImageSize};
    ///
    /// let image = Image::from_vec([2, 1].into(), 1, vec![0u8, 255]).unwrap();
    ///
    /// assert_eq!(image.get(1, 0, 0), 255);
    /// ```
    pub fn from_vec(size: ImageSize, channels: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        let len = num_samples(size, channels)?;

        if data.len() != len {
            return Err(ImageError::InvalidChannelShape(data.len(), len));
        }

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(
            x < self.size.width && y < self.size.height && z < self.channels,
            "pixel ({x}, {y}, {z}) out of bounds for {}x{}x{}",
            self.size.width,
            self.size.height,
            self.channels
        );
        (y * self.size.width + x) * self.channels + z
    }

    /// Get the sample of the pixel `(x, y)` at channel `z`.
    ///
    /// PRECONDITION: the coordinates are inside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.data[self.offset(x, y, z)]
    }

    /// Set the sample of the pixel `(x, y)` at channel `z`.
    ///
    /// PRECONDITION: the coordinates are inside the image.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: u8) {
        let idx = self.offset(x, y, z);
        self.data[idx] = value;
    }

    /// Get a sample, returning `None` when the coordinates fall outside the image.
    pub fn get_checked(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        if x >= self.size.width || y >= self.size.height || z >= self.channels {
            return None;
        }
        Some(self.data[(y * self.size.width + x) * self.channels + z])
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// Number of samples in one row of the image.
    pub fn row_stride(&self) -> usize {
        self.size.width * self.channels
    }

    /// Get the samples of the image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the samples of the image mutably.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
