use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuarryError {
    // Index errors
    #[error("index already built: build() may only be called once per instance")]
    IndexAlreadyBuilt,

    // Validation errors
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported boolean operator: {0} (expected AND or OR)")]
    UnsupportedOperator(String),

    // Config errors
    #[error("config error: {0}")]
    Config(String),

    // IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // Corpus errors
    #[error("corpus error: {0}")]
    Corpus(String),
}

pub type Result<T> = std::result::Result<T, QuarryError>;
