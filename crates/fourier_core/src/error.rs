use thiserror::Error;

/// Failures raised by the transform, filter and metric entry points.
///
/// All variants describe usage errors that are a pure function of the
/// inputs; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    /// Input does not have the expected rank or is empty.
    #[error("shape error: {detail}")]
    Shape { detail: String },

    /// Requested size is smaller than the data it must hold.
    #[error("size error: requested {requested} but input needs {actual}")]
    Size { requested: usize, actual: usize },

    /// Two operands that must share extents do not.
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A scalar parameter is outside its valid domain.
    #[error("invalid parameter: {detail}")]
    InvalidParameter { detail: String },
}

impl SpectralError {
    pub(crate) fn shape(detail: impl Into<String>) -> Self {
        SpectralError::Shape {
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        SpectralError::InvalidParameter {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpectralError>;
