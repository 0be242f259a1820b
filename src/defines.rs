/// Base URL of Binance USDT-M futures demo trading.
/// Authentication still requires the account's live credentials.
pub const FUTURES_DEMO_BASE_URL: &str = "https://demo-fapi.binance.com";

/// Path of the order-creation endpoint, relative to the futures base URL.
pub const FUTURES_ORDER_PATH: &str = "/fapi/v1/order";

/// Header carrying the API key on every signed request
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const ENV_API_KEY: &str = "BINANCE_API_KEY";
pub const ENV_API_SECRET: &str = "BINANCE_API_SECRET";

/// Timeout enforced by the HTTP client for the whole request
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Ask for fully executed order details rather than a bare acknowledgement
pub const ORDER_RESP_TYPE_RESULT: &str = "RESULT";

/// Good-till-cancelled, used for limit orders only
pub const TIME_IN_FORCE_GTC: &str = "GTC";

/// Placeholder for any value missing from the order response
pub const NOT_AVAILABLE: &str = "N/A";

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "trading_bot.log";
pub const LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const LOG_BACKUP_COUNT: u32 = 3;
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} | {l:<8} | {t} | {m}{n}";

/// Width of the separator line used by the presenter
pub const RULE_WIDTH: usize = 55;
