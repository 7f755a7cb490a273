// catalog_query/src/error.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid product id: '{raw}'")]
    InvalidId { raw: String },

    #[error("Missing required product fields: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<&'static str> },
}

pub type QueryResult<T, E = QueryError> = std::result::Result<T, E>;
