use std::path::Path;

use imfilter_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit RGB.
///
/// The method tries to read from any image format supported by the image crate
/// and always converts the result to three channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the RGB samples.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::from_vec(size, 3, img.into_rgb8().into_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing() {
        let res = read_image_rgb8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_gray_png_as_rgb() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        image::GrayImage::from_raw(2, 1, vec![10, 200])
            .ok_or("invalid buffer")?
            .save(&file_path)?;

        let image = read_image_rgb8(&file_path)?;
        assert_eq!(image.size(), ImageSize { width: 2, height: 1 });
        assert_eq!(image.num_channels(), 3);
        assert_eq!(image.as_slice(), &[10, 10, 10, 200, 200, 200]);
        Ok(())
    }

    #[test]
    fn read_garbage() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("garbage.png");
        std::fs::write(&file_path, b"not an image")?;

        let res = read_image_rgb8(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
        Ok(())
    }
}
