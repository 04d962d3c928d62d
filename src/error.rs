/// Errors from container parsing and blitting.
///
/// Every variant is produced before the framebuffer is touched, so a failed
/// blit never leaves a partially written buffer behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BlitError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    #[error("unsupported format: color mode {color_mode}, compression {compression}")]
    UnsupportedFormat { color_mode: u8, compression: u8 },

    #[error("display depth mismatch: image needs {required}bpp, display is {actual}bpp")]
    DepthMismatch { required: u8, actual: u8 },

    #[error("unsupported rotation: {0} degrees")]
    UnsupportedRotation(u16),

    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("payload size mismatch: header declares {declared} bytes, expected {expected}")]
    SizeMismatch { declared: u32, expected: usize },

    #[error("buffer truncated: need {needed} bytes, got {actual}")]
    TruncatedBuffer { needed: usize, actual: usize },

    #[error("limit exceeded: {what} {value} exceeds {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },
}
