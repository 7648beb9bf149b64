use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the RiskDesk core.
#[derive(Error, Debug)]
pub enum RdError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Pre-flight validation failures. No network call is made when one of these
/// fires; they are surfaced to the user directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Portfolio is empty. Please add instruments first.")]
    EmptyPortfolio,

    #[error(
        "Missing or incomplete market data for: {}. Please provide all market data.",
        assets.join(", ")
    )]
    IncompleteMarketData { assets: Vec<String> },
}

/// Structural problems with a single instrument, caught before it enters the
/// portfolio.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("asset identifier must not be empty")]
    EmptyAssetId,

    #[error("strike must be positive, got {strike}")]
    InvalidStrike { strike: Decimal },

    #[error("expiry must be positive (in years), got {expiry}")]
    InvalidExpiry { expiry: Decimal },

    #[error("quantity must be non-zero")]
    ZeroQuantity,
}

/// Failures talking to the remote risk computation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unreadable service response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// The message shown to the user when a calculation fails: the
    /// remote-supplied description when the service sent one, otherwise a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Api { message, .. } => message.clone(),
            _ => "Failed to calculate risk metrics".to_string(),
        }
    }
}

/// Result type alias for RiskDesk operations.
pub type RdResult<T> = Result<T, RdError>;
