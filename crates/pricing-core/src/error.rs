//! Error Types

use thiserror::Error;

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Pricing error types
///
/// Rendering itself cannot fail; these only surface while loading a
/// catalog or parsing a period name.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Billing period name outside `monthly` / `annually`
    #[error("Unknown billing period: {0}")]
    UnknownPeriod(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PricingError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            PricingError::UnknownPeriod(name) => {
                format!("'{}' is not a billing period. Use monthly or annually.", name)
            }
            PricingError::Io(_) | PricingError::Json(_) => {
                "The plan catalog could not be loaded.".into()
            }
        }
    }
}
