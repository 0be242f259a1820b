use thiserror::Error;

/// Every rule the order parameters violated, in rule order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed:\n  {}", .violations.join("\n  "))]
pub struct ValidationError {
    pub violations: Vec<String>,
}

/// Failure to configure or construct the futures client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{} and {} must be set in your environment or .env file.", crate::defines::ENV_API_KEY, crate::defines::ENV_API_SECRET)]
    MissingCredentials,

    #[error("Failed to initialise Binance client: {0}")]
    Initialisation(String),
}

/// Errors surfaced by the wrapped Binance futures API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinanceError {
    /// Binance answered with an error payload
    #[error("APIError(code={code}): {msg}")]
    Api { code: i64, msg: String },

    /// Binance answered, but with something we cannot use
    #[error("{0}")]
    Request(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

/// Order submission failure. The variant records the cause for logging,
/// the message is what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Binance API error (code {code}): {msg}")]
    Api { code: i64, msg: String },

    #[error("Binance request error: {0}")]
    Request(String),

    #[error("Network error: Could not reach Binance. Check your internet connection.")]
    Connection,

    #[error("Request timed out while contacting Binance API.")]
    Timeout,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<BinanceError> for OrderError {
    fn from(e: BinanceError) -> Self {
        match e {
            BinanceError::Api { code, msg } => OrderError::Api { code, msg },
            BinanceError::Request(msg) => OrderError::Request(msg),
            BinanceError::Connection(_) => OrderError::Connection,
            BinanceError::Timeout(_) => OrderError::Timeout,
            BinanceError::Other(msg) => OrderError::Unexpected(msg),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot prepare log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot build log roller: {0}")]
    Roller(String),

    #[error("invalid logging configuration: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),

    #[error("logger already installed: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
