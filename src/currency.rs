//! Dollar amount formatting for display.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format `amount` as dollars with two decimal places, e.g. `-$1,234.50`.
///
/// If `negative_styled` is set, the magnitude of `amount` is shown with the
/// negative prefix regardless of its sign, which is how outflow figures that
/// are stored as positive magnitudes (e.g. category summaries) are displayed.
pub fn format_amount(amount: f64, negative_styled: bool) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let amount = if amount.is_finite() { amount } else { 0.0 };

    if amount == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    let formatted = if negative_styled || amount < 0.0 {
        NEGATIVE_FMT
            .get_or_init(|| currency_formatter("-$"))
            .fmt_string(amount.abs())
    } else {
        POSITIVE_FMT
            .get_or_init(|| currency_formatter("$"))
            .fmt_string(amount)
    };

    pad_cents(formatted)
}

fn currency_formatter(prefix: &str) -> Formatter {
    Formatter::currency(prefix)
        .expect("currency prefixes are short enough for numfmt")
        .precision(Precision::Decimals(2))
}

/// numfmt drops trailing zeros, so "12.30" comes out as "12.3" and "12.00" as
/// "12". Pad the cents back out to two digits.
fn pad_cents(formatted: String) -> String {
    match formatted.split_once('.') {
        Some((dollars, cents)) if cents.len() < 2 => format!("{dollars}.{cents:0<2}"),
        Some(_) => formatted,
        None => format!("{formatted}.00"),
    }
}

#[cfg(test)]
mod tests {
    use crate::currency::{format_amount, pad_cents};

    #[test]
    fn formats_positive_and_negative_amounts() {
        assert_eq!(format_amount(85.0, false), "$85.00");
        assert_eq!(format_amount(12.3, false), "$12.30");
        assert_eq!(format_amount(-15.0, false), "-$15.00");
        assert_eq!(format_amount(0.0, false), "$0.00");
    }

    #[test]
    fn negative_styled_uses_negative_prefix_for_magnitude() {
        assert_eq!(format_amount(15.0, true), "-$15.00");
        assert_eq!(format_amount(-15.0, true), "-$15.00");
        assert_eq!(format_amount(0.0, true), "$0.00");
    }

    #[test]
    fn non_finite_amounts_format_as_zero() {
        assert_eq!(format_amount(f64::NAN, false), "$0.00");
    }

    #[test]
    fn pads_cents() {
        assert_eq!(pad_cents("$1".to_owned()), "$1.00");
        assert_eq!(pad_cents("$1.5".to_owned()), "$1.50");
        assert_eq!(pad_cents("$1.25".to_owned()), "$1.25");
    }
}
