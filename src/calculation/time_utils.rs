//! Clock-time and money helpers.
//!
//! Clock strings are parsed leniently: anything that is not `HH:MM` counts as
//! midnight. [`try_time_to_minutes`] is the strict variant for callers that
//! want to reject bad input instead.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

const THOUSAND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Parses `"HH:MM"` into minutes since midnight.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] for anything else.
pub fn try_time_to_minutes(clock: &str) -> EngineResult<u32> {
    NaiveTime::parse_from_str(clock.trim(), "%H:%M")
        .map(|time| time.hour() * 60 + time.minute())
        .map_err(|_| EngineError::InvalidTime {
            input: clock.to_string(),
        })
}

/// Parses `"HH:MM"` into minutes since midnight, yielding `0` for empty or
/// malformed input.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::time_to_minutes;
///
/// assert_eq!(time_to_minutes("09:30"), 570);
/// assert_eq!(time_to_minutes(""), 0);
/// assert_eq!(time_to_minutes("nine"), 0);
/// ```
pub fn time_to_minutes(clock: &str) -> u32 {
    try_time_to_minutes(clock).unwrap_or(0)
}

/// Formats a minute count as `"<H>시간"` or `"<H>시간 <M>분"`.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::minutes_to_label;
///
/// assert_eq!(minutes_to_label(480), "8시간");
/// assert_eq!(minutes_to_label(450), "7시간 30분");
/// ```
pub fn minutes_to_label(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{}시간", hours)
    } else {
        format!("{}시간 {}분", hours, rest)
    }
}

/// Converts minutes to hours.
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Groups a digit string with commas, dropping any non-digit characters and
/// leading zeros.
///
/// Leading zeros are not preserved, so `parse_thousands(format_thousands(s))`
/// returns the digits of `s` in canonical form (`"007"` comes back as `"7"`,
/// `"000"` as `"0"`).
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::format_thousands;
///
/// assert_eq!(format_thousands("2096270"), "2,096,270");
/// assert_eq!(format_thousands("1,000원"), "1,000");
/// ```
pub fn format_thousands(input: &str) -> String {
    let digits = digits_only(input);
    if digits.is_empty() {
        return String::new();
    }
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Strips the grouping (and anything else that is not a digit) from a
/// formatted amount.
pub fn parse_thousands(input: &str) -> String {
    digits_only(input)
}

/// Rounds to whole won, halves away from zero.
pub fn round_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as whole won with grouping, e.g. `"2,096,270원"`.
pub fn format_won(amount: Decimal) -> String {
    let whole = round_won(amount);
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}원", sign, format_thousands(&whole.abs().to_string()))
}

/// Rounds to the nearest 1,000 won, halves away from zero.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::round_to_nearest_thousand;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = Decimal::from_str("348642.8").unwrap();
/// assert_eq!(round_to_nearest_thousand(pay), Decimal::from(349_000));
/// ```
pub fn round_to_nearest_thousand(value: Decimal) -> Decimal {
    round_won(value / THOUSAND) * THOUSAND
}
