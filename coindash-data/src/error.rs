use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors generated in `coindash-data`.
///
/// The formatting and projection functions are total over their documented
/// domains, so errors only arise when constructing a
/// [`Listing`](crate::quote::Listing).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Error)]
pub enum ListingError {
    #[error("failed to parse listing JSON: {0}")]
    Parse(String),

    #[error("duplicate symbol in listing: {0}")]
    DuplicateSymbol(String),

    #[error("invalid value for {symbol}.{field}: must be non-negative and finite")]
    InvalidValue { symbol: String, field: String },
}

impl From<serde_json::Error> for ListingError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
