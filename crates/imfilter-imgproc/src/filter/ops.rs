use imfilter_image::Image;

use super::{convolve_with, FilterKind, Quantization};
use crate::error::FilterError;
use crate::parallel::ExecutionStrategy;

/// Parse a comma separated list of filter names.
///
/// Whitespace around each name is ignored and repeated filters are kept only
/// once, at their first position.
///
/// # Errors
///
/// Returns [`FilterError::EmptyFilterList`] if no name is given and
/// [`FilterError::UnknownFilter`] for empty or unknown names.
///
/// # Example
///
/// ```
/// use imfilter_imgproc::filter::{parse_filters, FilterKind};
///
/// let filters = parse_filters("sharpen, box-blur").unwrap();
///
/// assert_eq!(filters, vec![FilterKind::Sharpen, FilterKind::BoxBlur]);
/// ```
pub fn parse_filters(names: &str) -> Result<Vec<FilterKind>, FilterError> {
    if names.trim().is_empty() {
        return Err(FilterError::EmptyFilterList);
    }

    let mut filters = Vec::new();
    for name in names.split(',') {
        let kind = name.trim().parse::<FilterKind>()?;
        if !filters.contains(&kind) {
            filters.push(kind);
        }
    }

    Ok(filters)
}

/// Apply a sequence of filters, feeding each output into the next convolution.
///
/// Every pass is quantized before the next one starts.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `filters` - The filters to apply, in order.
/// * `quantization` - How sums are converted back to samples.
///
/// # Errors
///
/// Returns [`FilterError::EmptyFilterList`] if `filters` is empty.
pub fn apply_filters(
    src: &Image,
    filters: &[FilterKind],
    quantization: Quantization,
) -> Result<Image, FilterError> {
    let (first, rest) = filters
        .split_first()
        .ok_or(FilterError::EmptyFilterList)?;

    let strategy = ExecutionStrategy::default();

    log::debug!("applying filter {first}");
    let mut dst = convolve_with(src, first.kernel(), quantization, strategy)?;

    for kind in rest {
        log::debug!("applying filter {kind}");
        dst = convolve_with(&dst, kind.kernel(), quantization, strategy)?;
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::convolve;
    use imfilter_image::ImageError;

    #[test]
    fn test_parse_filters() -> Result<(), FilterError> {
        assert_eq!(parse_filters("edge")?, vec![FilterKind::Edge]);
        assert_eq!(
            parse_filters("identity,edge,sharpen,box-blur,gaussian-blur,unsharp-masking")?,
            FilterKind::ALL.to_vec()
        );
        assert_eq!(
            parse_filters(" gaussian-blur , edge,gaussian-blur")?,
            vec![FilterKind::GaussianBlur, FilterKind::Edge]
        );
        Ok(())
    }

    #[test]
    fn test_parse_filters_invalid() {
        assert_eq!(parse_filters(""), Err(FilterError::EmptyFilterList));
        assert_eq!(parse_filters("  "), Err(FilterError::EmptyFilterList));
        assert_eq!(
            parse_filters("edge,blur"),
            Err(FilterError::UnknownFilter("blur".to_string()))
        );
        assert_eq!(
            parse_filters("box"),
            Err(FilterError::UnknownFilter("box".to_string()))
        );
        assert_eq!(
            parse_filters("edge,,sharpen"),
            Err(FilterError::UnknownFilter(String::new()))
        );
    }

    #[test]
    fn test_apply_filters() -> Result<(), FilterError> {
        let image = Image::from_vec([4, 3].into(), 3, (0..36).map(|v| v * 7).collect())?;

        let single = apply_filters(&image, &[FilterKind::BoxBlur], Quantization::Saturating)?;
        assert_eq!(single, convolve(&image, FilterKind::BoxBlur.kernel())?);

        let chained = apply_filters(
            &image,
            &[FilterKind::GaussianBlur, FilterKind::Sharpen],
            Quantization::Saturating,
        )?;
        let expected = convolve(
            &convolve(&image, FilterKind::GaussianBlur.kernel())?,
            FilterKind::Sharpen.kernel(),
        )?;
        assert_eq!(chained, expected);

        let identity = apply_filters(
            &image,
            &[FilterKind::Identity, FilterKind::Identity],
            Quantization::Wrapping,
        )?;
        assert_eq!(identity, image);
        Ok(())
    }

    #[test]
    fn test_apply_filters_empty() -> Result<(), ImageError> {
        let image = Image::new([2, 2].into(), 1)?;
        assert_eq!(
            apply_filters(&image, &[], Quantization::Saturating),
            Err(FilterError::EmptyFilterList)
        );
        Ok(())
    }
}
