use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Length mismatch: left has {left} characters, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Cosine is undefined: input or target vector has zero norm")]
    ZeroNorm,

    #[error("Euclidean similarity is undefined for identical inputs (distance 0)")]
    ZeroDistance,

    #[error("Cannot normalize against an empty input")]
    EmptyInput,

    #[error("Histogram parse error: {0}")]
    Histogram(String),

    #[error("Metric {metric} does not accept a list of candidate values")]
    UnsupportedShape { metric: String },

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}
