use serde_json::Number;
use tracing::error;

use crate::errors::RetailerError;

/// Is capable of parsing the following into total cents:
/// 1. "$123.12"
/// 2. "123.12"
/// 3. "1,234.56"
/// 4. "5.9" (one decimal place, 590 cents)
/// 5. "100" (whole dollars)
///
/// Anything finer than a cent is rejected rather than rounded
pub(crate) fn price_to_cents(price: String) -> Result<u64, RetailerError> {
    let mut trimmed_price = price.trim().to_string();

    if trimmed_price.starts_with("$") {
        trimmed_price.remove(0);
    }

    trimmed_price = trimmed_price.replace(",", "");

    // lazily deal with missing cents
    // turns "100" -> "100.00"
    if !trimmed_price.contains(".") {
        trimmed_price = trimmed_price + ".00";
    }

    let Some((dollars, cents)) = trimmed_price.split_once(".") else {
        error!("Failed to parse price, missing divider: {}", price);
        return Err(RetailerError::InvalidNumber(price));
    };

    // "5.90" and "5.900" are the same price, "5.905" is not a price
    let cents = cents.trim_end_matches('0');
    if cents.len() > 2 {
        error!("Price has fractional cents: {}", price);
        return Err(RetailerError::InvalidNumber(price));
    }

    let parsed_dollars = string_to_u64(dollars.into())?;
    let parsed_cents = match cents.len() {
        0 => 0,
        1 => string_to_u64(cents.into())? * 10,
        _ => string_to_u64(cents.into())?,
    };

    parsed_dollars
        .checked_mul(100)
        .and_then(|total| total.checked_add(parsed_cents))
        .ok_or(RetailerError::InvalidNumber(price))
}

/// Converts a JSON number of whole dollars into cents without touching
/// floating point arithmetic: the number's shortest decimal form is parsed
pub(crate) fn dollars_to_cents(price: &Number) -> Result<u64, RetailerError> {
    if let Some(dollars) = price.as_u64() {
        return dollars
            .checked_mul(100)
            .ok_or(RetailerError::InvalidNumber(price.to_string()));
    }

    price_to_cents(price.to_string())
}

pub(crate) fn string_to_u64(string: String) -> Result<u64, RetailerError> {
    let Ok(parsed) = string.parse::<u64>() else {
        error!("Failed to parse string into u64 {}", string);
        return Err(RetailerError::InvalidNumber(string));
    };

    Ok(parsed)
}
