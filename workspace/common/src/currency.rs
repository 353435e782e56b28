//! Parsing and formatting of display currency strings.
//!
//! Amounts in the seed data are stored the way they are shown (`$2,450`,
//! `$234.00`). Derivations parse them into [`Decimal`] so sums of many
//! amounts stay exact.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

const SYMBOL: char = '$';

/// Parses a display currency string like `$1,234.50` into a decimal.
///
/// Accepts one optional minus sign on either side of the symbol, thousands
/// separators in the whole part and surrounding whitespace.
pub fn try_parse_currency(input: &str) -> Result<Decimal, String> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix(SYMBOL).unwrap_or(rest);
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(inner) if !negative => (true, inner),
        _ => (negative, rest),
    };

    if rest.starts_with(['-', '+']) {
        return Err(format!("Repeated sign in currency amount '{}'", input));
    }

    let (whole, fraction) = match rest.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rest, None),
    };
    let empty_group = whole.contains(',') && whole.split(',').any(str::is_empty);
    if empty_group || fraction.is_some_and(|f| f.contains(',')) {
        return Err(format!("Misplaced separator in currency amount '{}'", input));
    }

    let digits: String = rest.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(format!("Empty currency amount '{}'", input));
    }

    let value = Decimal::from_str(&digits)
        .map_err(|e| format!("Failed to parse currency '{}': {}", input, e))?;

    Ok(if negative { -value } else { value })
}

/// Parses a display currency string, treating malformed input as zero.
///
/// One bad record must never take down the view that sums it, so failures
/// are logged and swallowed here.
pub fn parse_currency(input: &str) -> Decimal {
    match try_parse_currency(input) {
        Ok(value) => value,
        Err(e) => {
            warn!(input, error = %e, "Treating malformed currency amount as zero");
            Decimal::ZERO
        }
    }
}

/// Sums display amounts, parsing each with [`parse_currency`].
///
/// An amount that would overflow the running total is skipped with a warning,
/// so the result is always a usable total.
pub fn sum_currency<'a, I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = &'a str>,
{
    amounts.into_iter().fold(Decimal::ZERO, |total, amount| {
        match total.checked_add(parse_currency(amount)) {
            Some(next) => next,
            None => {
                warn!(amount, %total, "Currency total overflowed; skipping amount");
                total
            }
        }
    })
}

/// Formats a decimal as `$1234.00`: two decimal places, no grouping.
pub fn format_currency(value: Decimal) -> String {
    Money::new(value).to_string()
}

/// A decimal amount that displays in the dashboard's currency format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}{}{:.2}", sign, SYMBOL, rounded.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_amount() {
        assert_eq!(try_parse_currency("$234.00").unwrap(), Decimal::new(23400, 2));
    }

    #[test]
    fn test_parse_grouped_amount() {
        assert_eq!(try_parse_currency("$2,450").unwrap(), Decimal::new(2450, 0));
        assert_eq!(try_parse_currency(" $48,574.25 ").unwrap(), Decimal::new(4857425, 2));
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!(try_parse_currency("99.5").unwrap(), Decimal::new(995, 1));
    }

    #[test]
    fn test_parse_negative_amounts() {
        assert_eq!(try_parse_currency("-$12.00").unwrap(), Decimal::new(-1200, 2));
        assert_eq!(try_parse_currency("$-12.00").unwrap(), Decimal::new(-1200, 2));
    }

    #[test]
    fn test_try_parse_rejects_garbage() {
        assert!(try_parse_currency("").is_err());
        assert!(try_parse_currency("$").is_err());
        let err = try_parse_currency("$12.3x").unwrap_err();
        assert!(err.contains("Failed to parse currency"));

        // A second minus sign must not cancel the first
        assert!(try_parse_currency("-$-12.00").is_err());
        assert!(try_parse_currency("--12").is_err());
        assert!(try_parse_currency("$+5").is_err());

        assert!(try_parse_currency("$,,5").is_err());
        assert!(try_parse_currency("$1,,000").is_err());
        assert!(try_parse_currency("$1,000,").is_err());
        assert!(try_parse_currency("$1.0,5").is_err());
        assert_eq!(parse_currency("-$-12.00"), Decimal::ZERO);
    }

    #[test]
    fn test_sum_currency_skips_overflowing_amount() {
        let max = "$79,228,162,514,264,337,593,543,950,335";
        assert_eq!(sum_currency([max, "$1.00"]), Decimal::MAX);
        assert_eq!(sum_currency([max, max]), Decimal::MAX);
        assert_eq!(sum_currency(["$1.50", "oops", "$2.50"]), Decimal::new(4, 0));
        assert_eq!(sum_currency(std::iter::empty()), Decimal::ZERO);
    }

    #[test]
    fn test_parse_currency_fails_closed() {
        assert_eq!(parse_currency("n/a"), Decimal::ZERO);
        assert_eq!(parse_currency("$1..2"), Decimal::ZERO);
        assert_eq!(parse_currency("$567.00"), Decimal::new(56700, 2));
    }

    #[test]
    fn test_format_two_places_no_grouping() {
        assert_eq!(format_currency(Decimal::new(801, 0)), "$801.00");
        assert_eq!(format_currency(Decimal::new(236900, 2)), "$2369.00");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_currency(Decimal::new(338428571, 6)), "$338.43");
        assert_eq!(format_currency(Decimal::new(1005, 3)), "$1.01");
        assert_eq!(format_currency(Decimal::new(-1005, 3)), "-$1.01");
    }

    #[test]
    fn test_money_serializes_as_string() {
        let json = serde_json::to_string(&Money::new(Decimal::new(80100, 2))).unwrap();
        assert_eq!(json, "\"801.00\"");
    }
}
