pub type PixfieldResult<T> = Result<T, PixfieldError>;

#[derive(thiserror::Error, Debug)]
pub enum PixfieldError {
    #[error("out of bounds: ({x}, {y}) resolves outside the {width}x{height} screen")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("size mismatch: buffer holds {actual} bytes, screen requires {required}")]
    SizeMismatch { required: usize, actual: usize },

    #[error("geometry mismatch: {0}")]
    GeometryMismatch(String),

    #[error("index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("empty color sequence")]
    EmptySequence,

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixfieldError {
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::GeometryMismatch(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
