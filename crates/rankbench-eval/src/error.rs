use rankbench_image::ImageError;
use rankbench_imgproc::filter::FilterError;
use rankbench_imgproc::noise::NoiseError;
use rankbench_io::IoError;

/// An error type for the evaluation pipeline.
#[derive(thiserror::Error, Debug)]
pub enum EvalError {
    /// Error from the image codecs.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error from the image buffers.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the filtering engine.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Error from the noise synthesis.
    #[error(transparent)]
    Noise(#[from] NoiseError),

    /// Error from the file system.
    #[error("Failed to manipulate the file. {0}")]
    File(#[from] std::io::Error),
}
