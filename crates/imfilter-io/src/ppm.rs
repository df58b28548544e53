use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use imfilter_image::Image;

use crate::error::IoError;

/// Encode an RGB image as a binary PPM.
///
/// The output is the `P6` header, the `<width> <height>` line, the `255` line
/// and the raw interleaved samples.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedChannels`] if the image does not have three channels.
///
/// # Example
///
/// ```
/// use imfilter_image::Image;
/// use imfilter_io::ppm::encode_ppm;
///
/// let image = Image::from_vec([1, 1].into(), 3, vec![1, 2, 3]).unwrap();
/// let mut buf = Vec::new();
/// encode_ppm(&image, &mut buf).unwrap();
///
/// assert_eq!(buf, b"P6\n1 1\n255\n\x01\x02\x03");
/// ```
pub fn encode_ppm<W: Write>(image: &Image, mut writer: W) -> Result<(), IoError> {
    if image.num_channels() != 3 {
        return Err(IoError::UnsupportedChannels(image.num_channels()));
    }

    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(image.as_slice())?;
    writer.flush()?;

    Ok(())
}

/// Writes the given image to a binary PPM file.
///
/// # Arguments
///
/// * `file_path` - The destination path, created or truncated.
/// * `image` - The RGB image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let file = File::create(file_path)?;
    encode_ppm(image, BufWriter::new(file))?;

    log::debug!(
        "wrote {}x{} ppm to {}",
        image.width(),
        image.height(),
        file_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::read_image_rgb8;

    #[test]
    fn encode_header() -> Result<(), IoError> {
        let image = Image::from_vec([2, 1].into(), 3, vec![0, 1, 2, 253, 254, 255])?;
        let mut buf = Vec::new();
        encode_ppm(&image, &mut buf)?;

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&buf[..header.len()], header);
        assert_eq!(&buf[header.len()..], image.as_slice());
        Ok(())
    }

    #[test]
    fn encode_wrong_channels() -> Result<(), IoError> {
        let image = Image::new([2, 2].into(), 1)?;
        let res = encode_ppm(&image, Vec::new());
        assert!(matches!(res, Err(IoError::UnsupportedChannels(1))));
        Ok(())
    }

    #[test]
    fn write_and_read_back() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("out.ppm");

        let image = Image::from_vec([3, 2].into(), 3, (0..18).map(|v| v * 13).collect())?;
        write_image_ppm(&file_path, &image)?;

        let decoded = read_image_rgb8(&file_path)?;
        assert_eq!(decoded, image);
        Ok(())
    }
}
