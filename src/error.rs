use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A numeric layout value outside `0..=2`.
    #[error("invalid layout ordinal {0}, expected 0 (NCHW), 1 (NC4HW) or 2 (NC32HW)")]
    InvalidOrdinal(i32),
    /// A decimal ordinal that does not fit in an `i32`.
    #[error("layout ordinal {0} is out of range, expected 0 (NCHW), 1 (NC4HW) or 2 (NC32HW)")]
    OrdinalOutOfRange(String),
    #[error("unknown layout name `{0}`")]
    UnknownName(String),
    #[error("invalid value `{value}` for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
