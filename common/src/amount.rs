//! Rendering of monetary amounts.
//!
//! Amounts are shown the way a JVM `double` prints itself: plain decimals
//! with at least one fractional digit inside `[1e-3, 1e7)`, computerized
//! scientific notation (`1.0E7`, `1.5E-4`) outside it, and `Infinity`,
//! `-Infinity` or `NaN` for the non-finite values.

const PLAIN_LOWER: f64 = 1e-3;
const PLAIN_UPPER: f64 = 1e7;

pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return String::from("NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (PLAIN_LOWER..PLAIN_UPPER).contains(&magnitude) {
        with_fraction(format!("{amount}"))
    } else {
        scientific(amount)
    }
}

fn with_fraction(digits: String) -> String {
    if digits.contains('.') {
        digits
    } else {
        digits + ".0"
    }
}

/// `{:e}` already yields the shortest round-trip digits (`1.5e-4`); only the
/// mantissa fraction and the exponent marker differ.
fn scientific(amount: f64) -> String {
    let rendered = format!("{amount:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => format!("{}E{}", with_fraction(mantissa.to_string()), exponent),
        None => rendered,
    }
}
