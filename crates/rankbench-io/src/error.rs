/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error to encode the JPEG image.
    #[error("Error with Jpeg encoding. {0}")]
    JpegEncodingError(#[from] jpeg_encoder::EncodingError),

    /// Error to decode the PNG image.
    #[error("Error with Png decoding. {0}")]
    PngDecodingError(#[from] png::DecodingError),

    /// Error to encode the PNG image.
    #[error("Error with Png encoding. {0}")]
    PngEncodingError(#[from] png::EncodingError),

    /// Error to decode an image with the image crate.
    #[error("Error with image decoding. {0}")]
    ImageDecodingError(#[from] image::ImageError),

    /// The decoded image layout is not supported.
    #[error("Unsupported image format")]
    UnsupportedImageFormat,

    /// Error from the image buffer.
    #[error(transparent)]
    ImageCreationError(#[from] rankbench_image::ImageError),
}
