use imfilter_image::ImageError;

/// A square convolution kernel with an odd side length.
///
/// The weights are stored row-major: the weight at `(kx, ky)` lives at
/// `ky * size + kx`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel by copying `size * size` weights.
    ///
    /// # Arguments
    ///
    /// * `data` - The row-major weights. Extra trailing weights are ignored.
    /// * `size` - The side length of the kernel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelSize`] if `size` is zero or even and
    /// [`ImageError::InvalidKernelData`] if fewer than `size * size` weights are given.
    ///
    /// # Example
    ///
    /// ```
    /// use imfilter_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(&[0.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.0], 3).unwrap();
    ///
    /// assert_eq!(kernel.size(), 3);
    /// assert_eq!(kernel.get(1, 1), 2.0);
    /// ```
    pub fn new(data: &[f32], size: usize) -> Result<Self, ImageError> {
        if size == 0 || size % 2 == 0 {
            return Err(ImageError::InvalidKernelSize(size));
        }

        let area = size
            .checked_mul(size)
            .ok_or(ImageError::InvalidKernelSize(size))?;

        if data.len() < area {
            return Err(ImageError::InvalidKernelData(data.len(), area));
        }

        log::debug!("created {size}x{size} kernel");

        Ok(Self {
            size,
            data: data[..area].to_vec(),
        })
    }

    /// Wrap one of the built-in tables, whose shape is known to be valid.
    pub(crate) fn from_table<const N: usize>(data: &[f32; N], size: usize) -> Self {
        debug_assert!(size % 2 == 1 && size * size == N);
        Self {
            size,
            data: data.to_vec(),
        }
    }

    /// Get the weight at column `kx` and row `ky`.
    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f32 {
        debug_assert!(kx < self.size && ky < self.size);
        self.data[ky * self.size + kx]
    }

    /// The side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center cell to the border, `size / 2`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// The row-major weights of the kernel.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_new() -> Result<(), ImageError> {
        let data = (0..9).map(|v| v as f32).collect::<Vec<_>>();
        let kernel = Kernel::new(&data, 3)?;
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.radius(), 1);
        assert_eq!(kernel.get(2, 0), 2.0);
        assert_eq!(kernel.get(0, 2), 6.0);
        assert_eq!(kernel.as_slice(), data.as_slice());
        Ok(())
    }

    #[test]
    fn test_kernel_copies_first_area() -> Result<(), ImageError> {
        let kernel = Kernel::new(&[3.0, 7.0], 1)?;
        assert_eq!(kernel.as_slice(), &[3.0]);
        assert_eq!(kernel.radius(), 0);
        Ok(())
    }

    #[test]
    fn test_kernel_invalid_size() {
        assert_eq!(
            Kernel::new(&[1.0; 16], 4),
            Err(ImageError::InvalidKernelSize(4))
        );
        assert_eq!(Kernel::new(&[], 0), Err(ImageError::InvalidKernelSize(0)));
    }

    #[test]
    fn test_kernel_short_data() {
        let res = Kernel::new(&[1.0; 8], 3);
        assert_eq!(res, Err(ImageError::InvalidKernelData(8, 9)));
        assert!(res.unwrap_err().is_invalid_dimensions());
    }
}
