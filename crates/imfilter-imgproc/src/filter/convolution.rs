use std::time::Instant;

use imfilter_image::{Image, ImageError};
use num_traits::ToPrimitive;

use super::Kernel;
use crate::parallel::{for_each_row_mut, ExecutionStrategy};

/// How an accumulated sum is converted back into an 8-bit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantization {
    /// Truncate toward zero and clamp into `[0, 255]`.
    #[default]
    Saturating,

    /// Truncate toward zero and keep the low 8 bits.
    ///
    /// Sums above 255 or below 0 wrap around, e.g. `300.7 -> 44` and `-10.2 -> 246`.
    Wrapping,
}

impl Quantization {
    /// Convert an accumulated sum into a sample.
    #[inline]
    pub fn quantize(self, sum: f32) -> u8 {
        match self {
            Quantization::Saturating => num_traits::clamp(sum.trunc(), 0.0, 255.0) as u8,
            Quantization::Wrapping => sum.to_i64().map_or(0, |v| v as u8),
        }
    }
}

/// Convolve an image with a kernel using zero padding at the borders.
///
/// Uses [`Quantization::Saturating`] and processes rows in parallel. See
/// [`convolve_with`] for the details.
///
/// # Example
///
/// ```
/// use imfilter_image::Image;
/// use imfilter_imgproc::filter::{convolve, FilterKind};
///
/// let image = Image::from_vec([1, 1].into(), 1, vec![10]).unwrap();
/// let blurred = convolve(&image, FilterKind::BoxBlur.kernel()).unwrap();
///
/// assert_eq!(blurred.as_slice(), &[1]);
/// ```
pub fn convolve(src: &Image, kernel: &Kernel) -> Result<Image, ImageError> {
    convolve_with(
        src,
        kernel,
        Quantization::default(),
        ExecutionStrategy::default(),
    )
}

/// Convolve an image with a kernel.
///
/// For every pixel `(x, y)` and channel `z` the output sample is
///
/// `sum(src(x - (r - kx), y - (r - ky), z) * kernel(kx, ky))` with `r = size / 2`,
///
/// where taps falling outside the image contribute zero. The sum is accumulated
/// in `f32`, visiting the taps row by row, and then quantized.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `kernel` - The kernel to apply.
/// * `quantization` - How sums are converted back to samples.
/// * `strategy` - Whether rows are processed serially or in parallel.
///
/// # Returns
///
/// A new image with the same shape as `src`. The source is never modified.
///
/// # Errors
///
/// Returns [`ImageError::AllocationError`] if the output cannot be allocated.
pub fn convolve_with(
    src: &Image,
    kernel: &Kernel,
    quantization: Quantization,
    strategy: ExecutionStrategy,
) -> Result<Image, ImageError> {
    let start = Instant::now();

    let mut dst = Image::new(src.size(), src.num_channels())?;

    let (width, height, channels) = (src.width(), src.height(), src.num_channels());
    let ksize = kernel.size();
    let radius = kernel.radius();
    let src_data = src.as_slice();
    let row_stride = src.row_stride();

    for_each_row_mut(dst.as_slice_mut(), row_stride, strategy, |y, dst_row| {
        for x in 0..width {
            for z in 0..channels {
                let mut sum = 0.0f32;

                for ky in 0..ksize {
                    // out of image rows only add zeros
                    let Some(img_y) = (y + ky).checked_sub(radius).filter(|&v| v < height) else {
                        continue;
                    };
                    let src_row = &src_data[img_y * row_stride..(img_y + 1) * row_stride];

                    for kx in 0..ksize {
                        let Some(img_x) = (x + kx).checked_sub(radius).filter(|&v| v < width)
                        else {
                            continue;
                        };
                        sum += src_row[img_x * channels + z] as f32 * kernel.get(kx, ky);
                    }
                }

                dst_row[x * channels + z] = quantization.quantize(sum);
            }
        }
    });

    log::debug!(
        "convolved {}x{}x{} image with {}x{} kernel in {:?}",
        width,
        height,
        channels,
        ksize,
        ksize,
        start.elapsed()
    );

    Ok(dst)
}
