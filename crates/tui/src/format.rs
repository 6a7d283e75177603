/// Formats an amount as dollars with two decimals, e.g. `$12.30`.
///
/// Non-finite values do not panic and do not turn into Rust's `NaN`/`inf`
/// spellings:
///
/// - NaN renders as `$NaN`
/// - infinities render as `$Infinity` / `$-Infinity`
/// - negative amounts keep the sign after the dollar (`$-5.00`)
/// - negative zero renders as `$0.00`
///
/// An amount exactly halfway between two cents rounds away from zero
/// (`0.125` → `$0.13`). `1.005` is not such an amount: its nearest `f64` is
/// slightly below the half cent, so it renders as `$1.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("${sign}Infinity");
    }

    let magnitude = amount.abs();
    let rounded = if is_half_cent(magnitude) {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{sign}{:.2}", (magnitude * 100.0).ceil() / 100.0)
    } else {
        format!("{amount:.2}")
    };
    match rounded.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            format!("${magnitude}")
        }
        _ => format!("${rounded}"),
    }
}

/// Exact half cents are the odd multiples of 1/8; `{:.2}` alone would round
/// them to even.
fn is_half_cent(magnitude: f64) -> bool {
    let eighths = magnitude * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

/// Same as [`format_currency`] for amounts that arrive as text, such as the
/// amount input. Text that is not a number renders as `$NaN`.
#[must_use]
pub fn format_currency_str(amount: &str) -> String {
    format_currency(amount.trim().parse().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_currency(1.0), "$1.00");
        assert_eq!(format_currency(19.999), "$20.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(150.5), "$150.50");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }

    #[test]
    fn half_cents_round_away_from_zero() {
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(0.375), "$0.38");
        assert_eq!(format_currency(2.625), "$2.63");
        assert_eq!(format_currency(10.125), "$10.13");
        assert_eq!(format_currency(-0.125), "$-0.13");
        assert_eq!(format_currency(1.005), "$1.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency_str("2.625"), "$2.63");
    }

    #[test]
    fn non_finite_and_negative_values() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$Infinity");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$-Infinity");
        assert_eq!(format_currency(-5.0), "$-5.00");
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn parses_numeric_strings() {
        assert_eq!(format_currency_str("12.3"), "$12.30");
        assert_eq!(format_currency_str(" 7 "), "$7.00");
        assert_eq!(format_currency_str(""), "$NaN");
        assert_eq!(format_currency_str("twelve"), "$NaN");
    }
}
