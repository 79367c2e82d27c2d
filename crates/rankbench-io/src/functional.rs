use std::path::Path;

use rankbench_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded image of any of the supported layouts.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
}

impl GenericImage {
    /// The size of the decoded image.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(image) => image.size(),
            GenericImage::Rgb8(image) => image.size(),
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the decoded data, grayscale or RGB.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 => {
            GenericImage::L8(Image::<u8, 1>::new(size, img.into_luma8().into_vec())?)
        }
        image::ColorType::Rgb8 => {
            GenericImage::Rgb8(Image::<u8, 3>::new(size, img.into_rgb8().into_vec())?)
        }
        // promote everything else (rgba, 16-bit, ...) to rgb8
        _ => GenericImage::Rgb8(Image::<u8, 3>::new(size, img.into_rgb8().into_vec())?),
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::write_image_png_rgb8;

    #[test]
    fn read_any_missing_file() {
        let result = read_image_any("does_not_exist.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_any_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("any.png");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        )?;
        write_image_png_rgb8(&file_path, &image)?;

        match read_image_any(&file_path)? {
            GenericImage::Rgb8(image_back) => {
                assert_eq!(image_back.as_slice(), image.as_slice());
            }
            GenericImage::L8(_) => panic!("expected an rgb8 image"),
        }

        Ok(())
    }
}
