use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("invalid date {input:?}, expected YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, DateError>;
