use crate::types::*;
use crate::errors::ValidationError;

/// Validate raw order inputs and normalize them into `OrderParameters`.
///
/// All rules are checked before failing, so the returned error lists every
/// problem with the input at once.
pub fn validate_order_params(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: f64,
    price: Option<f64>,
) -> Result<OrderParameters, ValidationError> {
    let mut violations: Vec<String> = Vec::new();

    let symbol = symbol.trim();
    if symbol.is_empty() {
        violations.push("'symbol' must be a non-empty string (e.g., BTCUSDT).".to_string());
    }

    let parsed_side = side.parse::<Side>().ok();
    if parsed_side.is_none() {
        violations.push(format!("'side' must be BUY or SELL, got: '{}'.", side));
    }

    let parsed_type = order_type.parse::<OrderType>().ok();
    if parsed_type.is_none() {
        violations.push(format!("'order_type' must be MARKET or LIMIT, got: '{}'.", order_type));
    }

    // written this way round so NaN is rejected too
    if !(quantity > 0.0) {
        violations.push(format!("'quantity' must be a positive float, got: {}.", quantity));
    }

    if parsed_type == Some(OrderType::Limit) {
        match price {
            None => violations.push("'price' is required for LIMIT orders.".to_string()),
            Some(p) if !(p > 0.0) => {
                violations.push(format!("'price' must be positive for LIMIT orders, got: {}.", p))
            }
            Some(_) => {}
        }
    }

    match (parsed_side, parsed_type) {
        (Some(side), Some(order_type)) if violations.is_empty() => Ok(OrderParameters {
            symbol: symbol.to_uppercase(),
            side,
            order_type,
            quantity,
            price,
        }),
        _ => Err(ValidationError { violations }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_order_is_normalized() {
        let params = validate_order_params("  btcusdt ", "buy", "market", 0.001, None).unwrap();
        assert_eq!(params.symbol, "BTCUSDT");
        assert_eq!(params.side, Side::Buy);
        assert_eq!(params.side.to_string(), "BUY");
        assert_eq!(params.order_type, OrderType::Market);
        assert_eq!(params.order_type.to_string(), "MARKET");
        assert_eq!(params.quantity, 0.001);
        assert_eq!(params.price, None);
    }

    #[test]
    fn limit_order_keeps_price() {
        let params = validate_order_params("BTCUSDT", "SELL", "LIMIT", 0.001, Some(80000.0)).unwrap();
        assert_eq!(params.side, Side::Sell);
        assert_eq!(params.order_type, OrderType::Limit);
        assert_eq!(params.price, Some(80000.0));
    }

    #[test]
    fn market_order_accepts_a_price() {
        let params = validate_order_params("ETHUSDT", "SELL", "MARKET", 1.0, Some(3000.0)).unwrap();
        assert_eq!(params.order_type, OrderType::Market);
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        for qty in [0.0, -0.5, f64::NAN] {
            let e = validate_order_params("BTCUSDT", "BUY", "MARKET", qty, None).unwrap_err();
            assert_eq!(e.violations.len(), 1);
            assert!(e.violations[0].starts_with("'quantity' must be a positive float"));
        }
    }

    #[test]
    fn limit_without_price_is_rejected() {
        let e = validate_order_params("BTCUSDT", "BUY", "LIMIT", 1.0, None).unwrap_err();
        assert_eq!(e.violations, vec!["'price' is required for LIMIT orders.".to_string()]);
    }

    #[test]
    fn limit_with_non_positive_price_is_rejected() {
        let e = validate_order_params("BTCUSDT", "BUY", "limit", 1.0, Some(0.0)).unwrap_err();
        assert_eq!(e.violations, vec!["'price' must be positive for LIMIT orders, got: 0.".to_string()]);
    }

    #[test]
    fn every_violation_is_reported_at_once() {
        let e = validate_order_params("   ", "HOLD", "STOP", -1.0, Some(5.0)).unwrap_err();
        assert_eq!(e.violations.len(), 4);
        assert!(e.violations[0].contains("'symbol'"));
        assert!(e.violations[1].contains("got: 'HOLD'"));
        assert!(e.violations[2].contains("got: 'STOP'"));
        assert!(e.violations[3].contains("'quantity'"));

        let text = e.to_string();
        assert!(text.starts_with("Validation failed:\n  "));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn price_violation_appears_alongside_others() {
        let e = validate_order_params("", "buy", "LIMIT", 0.0, Some(-3.0)).unwrap_err();
        assert_eq!(e.violations.len(), 3);
        assert!(e.violations[2].starts_with("'price' must be positive"));
    }
}
