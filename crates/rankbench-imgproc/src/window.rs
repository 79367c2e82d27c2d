use rankbench_image::{Image, ImageError, ImageSize};

/// Errors that can occur when extracting sliding windows.
#[derive(thiserror::Error, Debug)]
pub enum WindowError {
    /// The kernel size must be an odd number.
    #[error("kernel size must be odd, got {0}")]
    EvenKernelSize(usize),

    /// The kernel size must be non-zero.
    #[error("kernel size must be non-zero")]
    ZeroKernelSize,

    /// Error from the underlying image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Pad an image by replicating its border samples.
///
/// Out of bounds positions take the value of the nearest in-bounds pixel,
/// identically on all four sides. Corner regions repeat the corner sample.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `pad` - The number of pixels to add on each side.
///
/// # Returns
///
/// A new image with shape (H + 2 * pad, W + 2 * pad, C).
pub fn pad_replicate<T, const C: usize>(
    src: &Image<T, C>,
    pad: usize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    let (width, height) = (src.width(), src.height());
    if width == 0 || height == 0 || pad == 0 {
        return Ok(src.clone());
    }

    let padded_size = ImageSize {
        width: width + 2 * pad,
        height: height + 2 * pad,
    };

    let src_data = src.as_slice();
    let row_len = width * C;
    let mut data = Vec::with_capacity(padded_size.width * padded_size.height * C);

    for row in 0..padded_size.height {
        // clamp to the nearest valid source row
        let src_row = row.saturating_sub(pad).min(height - 1);
        let row_slice = &src_data[src_row * row_len..(src_row + 1) * row_len];
        let first_pixel = &row_slice[..C];
        let last_pixel = &row_slice[row_len - C..];

        for _ in 0..pad {
            data.extend_from_slice(first_pixel);
        }
        data.extend_from_slice(row_slice);
        for _ in 0..pad {
            data.extend_from_slice(last_pixel);
        }
    }

    Image::new(padded_size, data)
}

/// The K x K neighborhoods of every pixel of an image.
///
/// Built once from a padded copy of the source image, the structure exposes
/// the ordered multiset of K * K samples around any (row, col, channel)
/// without copying per pixel. Every neighborhood has exactly K * K samples,
/// border pixels included, thanks to edge replicated padding.
pub struct Neighborhoods<T, const C: usize> {
    padded: Image<T, C>,
    kernel_size: usize,
    size: ImageSize,
}

impl<T, const C: usize> Neighborhoods<T, C>
where
    T: Copy,
{
    /// Extract the K x K neighborhoods of every pixel.
    ///
    /// # Arguments
    ///
    /// * `src` - The source image with shape (H, W, C).
    /// * `kernel_size` - The window side length K. Must be odd and non-zero.
    ///   K may exceed the image dimensions; padding simply extends further.
    pub fn extract(src: &Image<T, C>, kernel_size: usize) -> Result<Self, WindowError> {
        if kernel_size == 0 {
            return Err(WindowError::ZeroKernelSize);
        }
        if kernel_size % 2 == 0 {
            return Err(WindowError::EvenKernelSize(kernel_size));
        }

        let padded = pad_replicate(src, kernel_size / 2)?;

        Ok(Self {
            padded,
            kernel_size,
            size: src.size(),
        })
    }

    /// The size of the source image.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The window side length K.
    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    /// The number of samples in each neighborhood (K * K).
    pub fn len(&self) -> usize {
        self.kernel_size * self.kernel_size
    }

    /// Whether the neighborhoods are empty. Always false for a valid kernel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill `out` with the K * K samples around (row, col) for one channel.
    ///
    /// Samples are ordered row by row, left to right.
    ///
    /// PRECONDITION: `out.len() == self.len()` and (row, col, ch) in bounds.
    pub fn fill(&self, row: usize, col: usize, ch: usize, out: &mut [T]) {
        debug_assert_eq!(out.len(), self.len());
        debug_assert!(row < self.size.height && col < self.size.width && ch < C);

        let stride = self.padded.cols() * C;
        let padded = self.padded.as_slice();

        let mut i = 0;
        for dr in 0..self.kernel_size {
            // window top-left in padded coordinates is exactly (row, col)
            let base = (row + dr) * stride + col * C + ch;
            for dc in 0..self.kernel_size {
                out[i] = padded[base + dc * C];
                i += 1;
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_replicates_borders_and_corners() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;

        let padded = pad_replicate(&src, 1)?;
        assert_eq!(padded.size().width, 4);
        assert_eq!(padded.size().height, 4);
        #[rustfmt::skip]
        assert_eq!(
            padded.as_slice(),
            &[
                1, 1, 2, 2,
                1, 1, 2, 2,
                3, 3, 4, 4,
                3, 3, 4, 4,
            ],
        );

        Ok(())
    }

    #[test]
    fn pad_replicates_multi_channel() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![9, 8, 7],
        )?;

        let padded = pad_replicate(&src, 2)?;
        assert_eq!(padded.size().width, 5);
        assert_eq!(padded.size().height, 5);
        for pixel in padded.as_slice().chunks_exact(3) {
            assert_eq!(pixel, &[9, 8, 7]);
        }

        Ok(())
    }

    #[test]
    fn extract_rejects_even_kernel() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0,
        )?;

        assert!(matches!(
            Neighborhoods::extract(&src, 2),
            Err(WindowError::EvenKernelSize(2))
        ));
        assert!(matches!(
            Neighborhoods::extract(&src, 0),
            Err(WindowError::ZeroKernelSize)
        ));

        Ok(())
    }

    #[test]
    fn extract_k1_is_identity() -> Result<(), WindowError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![5, 6, 7, 8],
        )?;

        let windows = Neighborhoods::extract(&src, 1)?;
        assert_eq!(windows.len(), 1);

        let mut buf = [0u8; 1];
        windows.fill(1, 0, 0, &mut buf);
        assert_eq!(buf, [7]);

        Ok(())
    }

    #[test]
    fn extract_window_samples_ordered() -> Result<(), WindowError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        )?;

        let windows = Neighborhoods::extract(&src, 3)?;

        // interior pixel sees the whole image in scan order
        let mut buf = [0u8; 9];
        windows.fill(1, 1, 0, &mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8, 9]);

        // corner pixel replicates the corner sample
        windows.fill(0, 0, 0, &mut buf);
        assert_eq!(buf, [1, 1, 2, 1, 1, 2, 4, 4, 5]);

        Ok(())
    }

    #[test]
    fn extract_kernel_larger_than_image() -> Result<(), WindowError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 20],
        )?;

        let windows = Neighborhoods::extract(&src, 5)?;
        assert_eq!(windows.len(), 25);

        let mut buf = [0u8; 25];
        windows.fill(0, 0, 0, &mut buf);
        // every row is the single source row clamped left and right
        for row in buf.chunks_exact(5) {
            assert_eq!(row, &[10, 10, 10, 20, 20]);
        }

        Ok(())
    }
}
