use thiserror::Error;

pub type RatingTrendResult<T> = Result<T, RatingTrendError>;

#[derive(Debug, Error)]
pub enum RatingTrendError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
