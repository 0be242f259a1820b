use crate::types::*;
use crate::defines::*;

use std::fmt;
use std::str::FromStr;

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        })
    }
}

/// Case-insensitive.
impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        })
    }
}

impl FromStr for OrderType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            _ => Err(()),
        }
    }
}

impl StatusCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl OrderRequest {
    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.params.push((key, value.to_string()));
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn keys(&self) -> Vec<&'static str> {
        self.params.iter().map(|(k, _)| *k).collect()
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{}}}", joined)
    }
}

impl OrderResponse {
    /// Textual value of `key`. Strings are returned as-is, other JSON
    /// values by their JSON text. `null` counts as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Value of `key` for display, `N/A` when absent.
    pub fn display(&self, key: &str) -> String {
        self.text(key).unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Numeric value of `key`, `None` when absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.fields.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for OrderResponse {
    fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        OrderResponse { fields }
    }
}
