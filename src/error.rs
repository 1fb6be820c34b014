use enough::StopReason;

/// Errors from BMP decoding, encoding, and filtering.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid bitmap: {0}")]
    Format(String),

    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid filter parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid filter argument: {0}")]
    InvalidArgument(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unsupported bitmap data.
    Format,
    /// Pixel access outside the buffer.
    Bounds,
    /// Filter constructed or requested with unusable parameters.
    InvalidParameter,
    /// Byte source or sink failure.
    Io,
    /// Size overflow or configured [`crate::Limits`] exceeded.
    Limit,
    /// A [`enough::Stop`] fired.
    Cancelled,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::OutOfBounds { .. } => ErrorKind::Bounds,
            Self::InvalidParameter(_) | Self::InvalidArgument(_) => ErrorKind::InvalidParameter,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) => ErrorKind::Limit,
            Self::Io(_) => ErrorKind::Io,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }

    pub(crate) fn format(msg: &str) -> Self {
        Self::Format(msg.into())
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
