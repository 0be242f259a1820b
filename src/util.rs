use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::info;
use ring::hmac;

/// Form-encode key/value pairs, keeping their order.
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Hex-encoded HMAC-SHA256 of `payload` keyed with the API secret.
pub fn sign(secret: &str, payload: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    hmac::sign(&key, payload.as_bytes())
        .as_ref()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// Milliseconds since unix epoch, as expected by the `timestamp` parameter.
pub fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

pub fn measure_start() -> Instant {
    Instant::now()
}

/// Log time elapsed since `start` for the named operation.
pub fn measure_end(start: &Instant, what: &str) {
    info!("{} took {} ms", what, start.elapsed().as_millis());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_keeps_order_and_escapes() {
        let q = encode_query([("symbol", "BTCUSDT"), ("side", "BUY"), ("note", "a b&c")]);
        assert_eq!(q, "symbol=BTCUSDT&side=BUY&note=a+b%26c");
    }

    // example taken from Binance's signed endpoint documentation
    #[test]
    fn signature_matches_binance_example() {
        let secret = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
        let payload = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        assert_eq!(
            sign(secret, payload),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn timestamp_is_after_2020() {
        assert!(timestamp_millis() > 1_577_836_800_000);
    }
}
