use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type QueryResult<T> = Result<T, QueryError>;
