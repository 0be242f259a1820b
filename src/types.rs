use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name="trading_bot")]
#[clap(about="Binance USDT-M Futures Demo Trading Bot", long_about=None)]
#[clap(after_help="Examples:
  trading_bot --symbol BTCUSDT --side BUY --order_type MARKET --quantity 0.001
  trading_bot --symbol BTCUSDT --side SELL --order_type LIMIT --quantity 0.001 --price 80000")]
pub struct CommandlineArgs {
    /// Trading pair symbol (e.g., BTCUSDT).
    #[clap(long)]
    pub symbol: String,

    /// Order side: BUY or SELL.
    #[clap(long, value_name="BUY|SELL", possible_values=["BUY", "SELL"], ignore_case=true)]
    pub side: String,

    /// Order type: MARKET or LIMIT.
    #[clap(long="order_type", value_name="MARKET|LIMIT", possible_values=["MARKET", "LIMIT"], ignore_case=true)]
    pub order_type: String,

    /// Order quantity as a positive float (e.g., 0.001).
    // hyphen values are let through so that the validator reports them
    #[clap(long, allow_hyphen_values=true)]
    pub quantity: f64,

    /// Limit price, required only for LIMIT orders.
    #[clap(long, allow_hyphen_values=true)]
    pub price: Option<f64>,
}

/// Process exit status, one per failing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success=0,
    ValidationFailure=1,
    ClientFailure=2,
    OrderFailure=3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Market,
    Limit,
}

/// Validated and normalized order parameters.
/// `price` is always present for `OrderType::Limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderParameters {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: f64,
    pub price: Option<f64>,
}

/// Parameters of one order-creation call, kept in the order they are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRequest {
    pub params: Vec<(&'static str, String)>,
}

/// Order payload as returned by Binance.
/// Every field is optional from our point of view.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct OrderResponse {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Error payload returned by Binance along with a non-2xx status.
// https://binance-docs.github.io/apidocs/futures/en/#error-codes
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}
