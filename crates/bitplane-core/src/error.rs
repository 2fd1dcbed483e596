use thiserror::Error;

use crate::media::Shape;

#[derive(Error, Debug)]
pub enum BitPlaneError {
    /// Represents two images that were expected to share height, width and channel count
    /// but don't.
    /// Nothing is cropped or padded implicitly, the caller has to align the images upfront
    #[error("Shape mismatch: {left} does not match {right}")]
    ShapeMismatch { left: Shape, right: Shape },

    /// Represents a bit depth outside of `1..=8`
    #[error("Invalid bit depth {0}, expected a value between 1 and 8")]
    InvalidBitDepth(i64),

    /// Represents a sample that does not fit into 8 bits, for example from a 16 bit source
    #[error("Sample value {value} at index {index} is outside of the 8 bit range")]
    InvalidSampleRange { index: usize, value: u16 },

    /// Represents an image with a zero dimension or with a sample buffer that does not fit
    /// its dimensions
    #[error(
        "Invalid image dimensions {width}x{height} with {channels} channel(s) for {len} samples"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        channels: usize,
        len: usize,
    },

    /// Represents an unsupported media file. For example, a WAV file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No payload image set")]
    PayloadNotSet,

    #[error("No secret image set")]
    SecretNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No reference image set")]
    ReferenceNotSet,

    #[error("No candidate image set")]
    CandidateNotSet,
}
