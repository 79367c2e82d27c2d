use rankbench_image::{Image, ImageError};

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the total number of
/// samples (H x W x C). The sum runs jointly over the spatial and channel
/// dimensions; channels are not averaged separately. Differences are taken
/// in f64 so the order of the arguments does not matter.
///
/// # Arguments
///
/// * `reference` - The clean reference image with shape (H, W, C).
/// * `processed` - The processed image with shape (H, W, C).
///
/// # Returns
///
/// The mean squared error between the two images. Lower is better and 0
/// denotes a pixel exact match.
///
/// # Errors
///
/// Returns an error if the two images have different shapes.
///
/// # Example
///
/// ```
/// use rankbench_image::{Image, ImageSize};
/// use rankbench_imgproc::metrics::mse;
///
/// let size = ImageSize { width: 2, height: 3 };
/// let image1 = Image::<u8, 1>::new(size, vec![0, 1, 2, 3, 4, 5]).unwrap();
/// let image2 = Image::<u8, 1>::new(size, vec![0, 1, 2, 3, 4, 5]).unwrap();
///
/// let mse = mse(&image1, &image2).unwrap();
/// assert_eq!(mse, 0.0);
/// ```
pub fn mse<const C: usize>(
    reference: &Image<u8, C>,
    processed: &Image<u8, C>,
) -> Result<f64, ImageError> {
    if reference.size() != processed.size() {
        return Err(ImageError::InvalidImageSize(
            reference.cols(),
            reference.rows(),
            processed.cols(),
            processed.rows(),
        ));
    }

    let sum = reference
        .as_slice()
        .iter()
        .zip(processed.as_slice().iter())
        .map(|(&a, &b)| {
            let diff = a as f64 - b as f64;
            diff * diff
        })
        .sum::<f64>();

    Ok(sum / reference.numel() as f64)
}
