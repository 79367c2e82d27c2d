use rand::Rng;
use rand_distr::{Distribution, Normal};

use rankbench_image::{Image, ImageError};

/// Errors that can occur during noise synthesis.
#[derive(thiserror::Error, Debug)]
pub enum NoiseError {
    /// The corruption probability must be in [0, 1].
    #[error("noise probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// The standard deviation must be finite and non-negative.
    #[error("invalid gaussian standard deviation: {0}")]
    InvalidStdDev(f64),

    /// Error from the underlying image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Corrupt an image with salt and pepper noise.
///
/// Each spatial location is independently driven to full white with
/// probability `prob / 2` and to full black with probability `prob / 2`.
/// For a color image the whole pixel is overwritten across channels, so the
/// impulse stays achromatic.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `prob` - The total corruption probability in [0, 1].
/// * `rng` - The random source; pass a seeded generator for reproducibility.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn salt_and_pepper<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    prob: f64,
    rng: &mut impl Rng,
) -> Result<(), NoiseError> {
    if !(0.0..=1.0).contains(&prob) {
        return Err(NoiseError::InvalidProbability(prob));
    }
    if src.size() != dst.size() {
        return Err(NoiseError::Image(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )));
    }

    src.as_slice()
        .chunks_exact(C)
        .zip(dst.as_slice_mut().chunks_exact_mut(C))
        .for_each(|(src_pixel, dst_pixel)| {
            let u = rng.random::<f64>();
            if u < prob / 2.0 {
                dst_pixel.fill(u8::MAX);
            } else if u > 1.0 - prob / 2.0 {
                dst_pixel.fill(u8::MIN);
            } else {
                dst_pixel.copy_from_slice(src_pixel);
            }
        });

    Ok(())
}

/// Corrupt an image with additive gaussian noise.
///
/// A sample drawn from N(mean, sigma^2) is added to every sample of every
/// channel independently; the result is clamped to [0, 255].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `mean` - The mean of the gaussian distribution.
/// * `sigma` - The standard deviation of the gaussian distribution.
/// * `rng` - The random source; pass a seeded generator for reproducibility.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    mean: f64,
    sigma: f64,
    rng: &mut impl Rng,
) -> Result<(), NoiseError> {
    if src.size() != dst.size() {
        return Err(NoiseError::Image(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )));
    }

    // rand_distr accepts a negative std dev, so validate here
    if !(sigma.is_finite() && sigma >= 0.0) {
        return Err(NoiseError::InvalidStdDev(sigma));
    }
    let normal = Normal::new(mean, sigma).map_err(|_| NoiseError::InvalidStdDev(sigma))?;

    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(&src_val, dst_val)| {
            let noisy = src_val as f64 + normal.sample(rng);
            *dst_val = noisy.clamp(0.0, 255.0) as u8;
        });

    Ok(())
}
