use std::time::Duration;

use isahc::config::Configurable;
use isahc::error::ErrorKind;
use isahc::{HttpClient, ReadResponseExt};
use log::{error, info};
use url::Url;

use crate::defines::*;
use crate::errors::{BinanceError, ClientError};
use crate::types::{BinanceErrorResponse, OrderRequest, OrderResponse};
use crate::util::*;

/// The part of Binance's futures REST API this tool talks to.
pub trait FuturesApi {
    /// Create one futures order, returning Binance's order payload.
    fn futures_create_order(&self, request: &OrderRequest) -> Result<OrderResponse, BinanceError>;
}

/// Authenticated client for USDT-M futures, bound to the demo endpoint.
pub struct FuturesClient {
    http: HttpClient,
    api_secret: String,
    order_url: Url,
}

impl std::fmt::Debug for FuturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuturesClient")
            .field("order_url", &self.order_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FuturesClient {
    /// Build a client from `BINANCE_API_KEY` and `BINANCE_API_SECRET`.
    /// A `.env` file in the working directory is honoured.
    pub fn from_env() -> Result<FuturesClient, ClientError> {
        dotenv::dotenv().ok();

        FuturesClient::from_credentials(
            std::env::var(ENV_API_KEY).ok(),
            std::env::var(ENV_API_SECRET).ok(),
        )
    }

    /// Build a client from credentials, failing before any network I/O when
    /// one of them is missing or empty.
    pub fn from_credentials(
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Result<FuturesClient, ClientError> {
        let (api_key, api_secret) = match (api_key, api_secret) {
            (Some(k), Some(s)) if !k.is_empty() && !s.is_empty() => (k, s),
            _ => return Err(ClientError::MissingCredentials),
        };

        info!("Initialising Binance Futures Demo client.");

        let client = FuturesClient::build(FUTURES_DEMO_BASE_URL, &api_key, api_secret).map_err(|e| {
            error!("Error during client setup: {}", e);
            e
        })?;

        info!("Binance client initialised. Order endpoint: {}", client.order_url());
        Ok(client)
    }

    fn build(base_url: &str, api_key: &str, api_secret: String) -> Result<FuturesClient, ClientError> {
        let order_url = Url::parse(base_url)
            .and_then(|base| base.join(FUTURES_ORDER_PATH))
            .map_err(|e| ClientError::Initialisation(format!("invalid base url '{}': {}", base_url, e)))?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .default_header(API_KEY_HEADER, api_key)
            .build()
            .map_err(|e| ClientError::Initialisation(e.to_string()))?;

        Ok(FuturesClient { http, api_secret, order_url })
    }

    pub fn order_url(&self) -> &Url {
        &self.order_url
    }

    /// Query string for `request` with `timestamp` and `signature` appended.
    fn signed_query(&self, request: &OrderRequest) -> String {
        let timestamp = timestamp_millis().to_string();
        let query = encode_query(
            request.params
                .iter()
                .map(|(k, v)| (*k, v.as_str()))
                .chain(std::iter::once(("timestamp", timestamp.as_str()))),
        );
        let signature = sign(&self.api_secret, &query);
        format!("{}&signature={}", query, signature)
    }
}

impl FuturesApi for FuturesClient {
    fn futures_create_order(&self, request: &OrderRequest) -> Result<OrderResponse, BinanceError> {
        let mut url = self.order_url.clone();
        url.set_query(Some(&self.signed_query(request)));

        let mut response = self.http.post(url.as_str(), ()).map_err(map_transport_error)?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| BinanceError::Request(format!("cannot read response body: {}", e)))?;

        parse_order_response(status.as_u16(), &body)
    }
}

/// Classify an HTTP-layer failure.
fn map_transport_error(e: isahc::Error) -> BinanceError {
    match e.kind() {
        ErrorKind::ConnectionFailed | ErrorKind::NameResolution => BinanceError::Connection(e.to_string()),
        ErrorKind::Timeout => BinanceError::Timeout(e.to_string()),
        _ => BinanceError::Other(e.to_string()),
    }
}

/// Turn a raw HTTP reply into an order payload or a Binance error.
pub fn parse_order_response(status: u16, body: &str) -> Result<OrderResponse, BinanceError> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<BinanceErrorResponse>(body) {
            Ok(err) => BinanceError::Api { code: err.code, msg: err.msg },
            Err(_) => BinanceError::Api {
                code: 0,
                msg: format!("Invalid JSON error message from Binance: {}", body),
            },
        });
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(fields)) => Ok(OrderResponse::from(fields)),
        _ => Err(BinanceError::Request(format!("Invalid Response: {}", body))),
    }
}
