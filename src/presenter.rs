use std::fmt;

use crate::defines::*;
use crate::types::*;

/// Average execution price for display.
///
/// Tries, in order: the reported `avgPrice`, `cumQuote / executedQty`, then
/// the order's own `price`. Malformed values simply make a step fall through.
pub fn safe_avg_price(response: &OrderResponse) -> String {
    if let Some(avg) = response.text("avgPrice") {
        if !avg.is_empty() && avg != "0" && response.number("avgPrice").map_or(false, |v| v > 0.0) {
            return avg;
        }
    }

    if let Some(exec_qty) = response.number("executedQty") {
        // absent or empty cumQuote counts as zero, a malformed one skips the step
        let cum_quote = match response.text("cumQuote") {
            None => Some(0.0),
            Some(s) if s.is_empty() => Some(0.0),
            Some(_) => response.number("cumQuote"),
        };
        if let Some(cum_quote) = cum_quote {
            if exec_qty > 0.0 {
                return format!("{:.8} (computed)", cum_quote / exec_qty);
            }
        }
    }

    if let Some(price) = response.text("price") {
        if !price.is_empty() && response.number("price").map_or(false, |v| v > 0.0) {
            return format!("{} (order price)", price);
        }
    }

    NOT_AVAILABLE.to_string()
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Pre-submission view of validated parameters.
pub struct OrderSummary<'a>(pub &'a OrderParameters);

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.0;
        writeln!(f, "\n{}", rule())?;
        writeln!(f, "  ORDER REQUEST SUMMARY")?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "  Symbol     : {}", params.symbol)?;
        writeln!(f, "  Side       : {}", params.side)?;
        writeln!(f, "  Order Type : {}", params.order_type)?;
        writeln!(f, "  Quantity   : {}", params.quantity)?;
        match (params.order_type, params.price) {
            (OrderType::Limit, Some(price)) => writeln!(f, "  Price      : {}", price)?,
            _ => writeln!(f, "  Price      : MARKET (best available)")?,
        }
        writeln!(f, "{}", rule())
    }
}

/// Post-submission view of Binance's reply.
pub struct OrderReport<'a>(pub &'a OrderResponse);

impl fmt::Display for OrderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.0;
        writeln!(f, "\n{}", rule())?;
        writeln!(f, "  ORDER RESPONSE")?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "  Order ID     : {}", response.display("orderId"))?;
        writeln!(f, "  Client OID   : {}", response.display("clientOrderId"))?;
        writeln!(f, "  Symbol       : {}", response.display("symbol"))?;
        writeln!(f, "  Side         : {}", response.display("side"))?;
        writeln!(f, "  Type         : {}", response.display("type"))?;
        writeln!(f, "  Status       : {}", response.display("status"))?;
        writeln!(f, "  Orig Qty     : {}", response.display("origQty"))?;
        writeln!(f, "  Executed Qty : {}", response.display("executedQty"))?;
        writeln!(f, "  Avg Price    : {}", safe_avg_price(response))?;
        writeln!(f, "  Time in Force: {}", response.display("timeInForce"))?;
        writeln!(f, "{}\n", rule())
    }
}

pub fn print_order_summary(params: &OrderParameters) {
    print!("{}", OrderSummary(params));
}

pub fn print_order_response(response: &OrderResponse) {
    print!("{}", OrderReport(response));
}
