use rayon::prelude::*;

use rankbench_image::{Image, ImageError};

use crate::window::{Neighborhoods, WindowError};

/// Errors that can occur during aggregate window filtering.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// The requested filter kind is not recognized.
    #[error("unknown filter kind: {0}")]
    UnknownFilterKind(String),

    /// Error from the window extraction.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Error from the underlying image buffer.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// The aggregate statistic used to reduce a neighborhood to one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Arithmetic average of the window samples, truncated to u8.
    Mean,
    /// Middle value of the sorted window samples.
    Median,
    /// Smallest window sample.
    Min,
    /// Largest window sample.
    Max,
}

impl FilterKind {
    /// All filter kinds, in the order the evaluation pipeline applies them.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Mean,
        FilterKind::Median,
        FilterKind::Min,
        FilterKind::Max,
    ];

    /// The lowercase name of the filter kind, used in file names and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Mean => "mean",
            FilterKind::Median => "median",
            FilterKind::Min => "min",
            FilterKind::Max => "max",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(FilterKind::Mean),
            "median" => Ok(FilterKind::Median),
            "min" => Ok(FilterKind::Min),
            "max" => Ok(FilterKind::Max),
            _ => Err(FilterError::UnknownFilterKind(s.to_string())),
        }
    }
}

/// Reduce one neighborhood to a single sample.
///
/// The scratch buffer holds the K * K window samples and may be reordered.
fn reduce(kind: FilterKind, scratch: &mut [u8]) -> u8 {
    match kind {
        FilterKind::Mean => {
            // accumulate in u32 to avoid overflow, truncating division
            let sum: u32 = scratch.iter().map(|&v| v as u32).sum();
            (sum / scratch.len() as u32) as u8
        }
        FilterKind::Median => {
            let mid = scratch.len() / 2;
            *scratch.select_nth_unstable(mid).1
        }
        FilterKind::Min => scratch.iter().fold(u8::MAX, |m, &v| m.min(v)),
        FilterKind::Max => scratch.iter().fold(u8::MIN, |m, &v| m.max(v)),
    }
}

/// Filter an image by reducing the K x K neighborhood of every pixel.
///
/// Border handling is edge replication, so every pixel sees a full window
/// and a constant image passes through unchanged for every filter kind.
/// Channels are reduced independently and never mixed.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kind` - The aggregate statistic to reduce each window with.
/// * `kernel_size` - The window side length K. Must be odd and non-zero.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn window_filter<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kind: FilterKind,
    kernel_size: usize,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(FilterError::Image(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )));
    }

    let windows = Neighborhoods::extract(src, kernel_size)?;
    if src.as_slice().is_empty() {
        return Ok(());
    }

    let window_len = windows.len();
    let cols = src.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(r, dst_row)| {
            let mut scratch = vec![0u8; window_len];
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(c, dst_pixel)| {
                    for (ch, out) in dst_pixel.iter_mut().enumerate() {
                        windows.fill(r, c, ch, &mut scratch);
                        *out = reduce(kind, &mut scratch);
                    }
                });
        });

    Ok(())
}
