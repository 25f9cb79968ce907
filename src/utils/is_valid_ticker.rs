use crate::constants::MIN_TICKER_LEN;

/// A ticker is usable when it has at least six characters and contains only
/// alphanumerics. KRX short codes are normally six digits, but derivative
/// codes mix in letters, so letters are accepted too.
pub fn is_valid_ticker(ticker: &str) -> bool {
    if ticker.chars().count() < MIN_TICKER_LEN {
        return false;
    }

    ticker.chars().all(char::is_alphanumeric)
}
