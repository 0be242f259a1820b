use log::{debug, error, info};

use crate::client::FuturesApi;
use crate::defines::*;
use crate::errors::{BinanceError, OrderError};
use crate::types::*;
use crate::util::*;

/// Build the order-creation request for `params`.
/// Limit orders additionally carry the price and a GTC time-in-force.
pub fn build_order_request(params: &OrderParameters) -> OrderRequest {
    let mut request = OrderRequest::default();
    request.push("symbol", &params.symbol);
    request.push("side", params.side);
    request.push("type", params.order_type);
    request.push("quantity", params.quantity);
    request.push("newOrderRespType", ORDER_RESP_TYPE_RESULT);

    if params.order_type == OrderType::Limit {
        if let Some(price) = params.price {
            request.push("price", price);
        }
        request.push("timeInForce", TIME_IN_FORCE_GTC);
    }
    request
}

/// Place one order. Never retries.
pub fn place_order<C: FuturesApi>(client: &C, params: &OrderParameters) -> Result<OrderResponse, OrderError> {
    let request = build_order_request(params);

    info!(
        "Placing {} {} order | symbol={} | qty={} | price={}",
        params.side,
        params.order_type,
        params.symbol,
        params.quantity,
        params.price.map(|p| p.to_string()).unwrap_or_else(|| "MARKET".to_string())
    );
    debug!("Full order request: {}", request);

    let start = measure_start();
    let result = client.futures_create_order(&request);
    measure_end(&start, "Order request");

    match result {
        Ok(response) => {
            info!(
                "Order placed successfully | orderId={} | status={} | executedQty={}",
                response.display("orderId"),
                response.display("status"),
                response.display("executedQty")
            );
            debug!("Full order response: {:?}", response.fields);
            Ok(response)
        }
        Err(e) => {
            match &e {
                BinanceError::Api { code, msg } => error!("Binance API error | code={} | msg={}", code, msg),
                BinanceError::Request(msg) => error!("Binance request error: {}", msg),
                BinanceError::Connection(msg) => error!("Network connection error: {}", msg),
                BinanceError::Timeout(msg) => error!("Request timed out: {}", msg),
                BinanceError::Other(msg) => error!("Unexpected error placing order: {}", msg),
            }
            Err(OrderError::from(e))
        }
    }
}
