use crate::parallel;
use rankbench_image::{Image, ImageError};

/// Convert an RGB8 image to grayscale using the formula:
///
/// Y = 77 * R + 150 * G + 29 * B
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_rgb_u8(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as u16;
        let g = src_pixel[1] as u16;
        let b = src_pixel[2] as u16;
        dst_pixel[0] = ((r * 77 + g * 150 + b * 29) >> 8) as u8;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankbench_image::ImageSize;

    #[test]
    fn gray_from_rgb_u8_known_values() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![255, 255, 255, 0, 0, 0],
        )?;
        let mut dst = Image::from_size_val(src.size(), 0)?;

        gray_from_rgb_u8(&src, &mut dst)?;
        assert_eq!(dst.as_slice(), &[255, 0]);

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8_weighs_green_most() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 1,
            height: 1,
        };
        let red = Image::<u8, 3>::new(size, vec![255, 0, 0])?;
        let green = Image::<u8, 3>::new(size, vec![0, 255, 0])?;

        let mut gray_red = Image::from_size_val(size, 0)?;
        let mut gray_green = Image::from_size_val(size, 0)?;
        gray_from_rgb_u8(&red, &mut gray_red)?;
        gray_from_rgb_u8(&green, &mut gray_green)?;

        assert!(gray_green.as_slice()[0] > gray_red.as_slice()[0]);

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8_shape_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        assert!(gray_from_rgb_u8(&src, &mut dst).is_err());

        Ok(())
    }
}
