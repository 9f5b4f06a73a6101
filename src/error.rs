use thiserror::Error;

/// Errors surfaced by the marketplace library.
#[derive(Debug, Error)]
pub enum MarketError {
    /// No property with the given id exists in the catalog
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Invalid rent range: min {min} is greater than max {max}")]
    InvalidFilterRange { min: u32, max: u32 },

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    /// Inquiries need a non-blank message
    #[error("Inquiry message is empty")]
    EmptyInquiryMessage,

    #[error("Sign in required")]
    SignInRequired,

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
