//! Currency rendering using the store's money template, e.g. `£{{amount}}`.
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::Serialize;

pub const AMOUNT_TOKEN: &str = "{{amount}}";
const NO_DECIMALS_TOKEN: &str = "{{amount_no_decimals}}";
const COMMA_SEPARATOR_TOKEN: &str = "{{amount_with_comma_separator}}";
const NO_DECIMALS_COMMA_SEPARATOR_TOKEN: &str = "{{amount_no_decimals_with_comma_separator}}";
const APOSTROPHE_SEPARATOR_TOKEN: &str = "{{amount_with_apostrophe_separator}}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMoney {
    /// The amount truncated towards zero. Callers use this to decide whether there were any sales at all.
    pub whole: i64,
    pub display: String,
}

impl FormattedMoney {
    pub fn is_zero(&self) -> bool {
        self.whole == 0
    }
}

/// Rounds `amount` to the nearest cent and substitutes it into `template`.
///
/// Ties round to even. A template that carries no amount placeholder comes back unchanged.
pub fn format_money(amount: Decimal, template: &str) -> FormattedMoney {
    let display = template
        .replace(AMOUNT_TOKEN, &render_amount(amount, 2, ',', '.'))
        .replace(NO_DECIMALS_TOKEN, &render_amount(amount, 0, ',', '.'))
        .replace(COMMA_SEPARATOR_TOKEN, &render_amount(amount, 2, '.', ','))
        .replace(NO_DECIMALS_COMMA_SEPARATOR_TOKEN, &render_amount(amount, 0, '.', ','))
        .replace(APOSTROPHE_SEPARATOR_TOKEN, &render_amount(amount, 2, '\'', '.'));
    FormattedMoney { whole: whole_units(amount), display }
}

fn whole_units(amount: Decimal) -> i64 {
    amount.trunc().to_i64().unwrap_or(if amount.is_sign_negative() { i64::MIN } else { i64::MAX })
}

/// Renders `amount` with exactly `decimals` decimal places and the given separators, e.g. `1,234.50`.
pub fn render_amount(amount: Decimal, decimals: u32, thousands: char, decimal_point: char) -> String {
    let mut rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(decimals);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        result.push('-');
    }
    result.push_str(&group_thousands(int_part, thousands));
    if let Some(frac) = frac_part {
        result.push(decimal_point);
        result.push_str(frac);
    }
    result
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    digits.chars().enumerate().fold(String::with_capacity(len + len / 3), |mut acc, (i, c)| {
        if i > 0 && (len - i) % 3 == 0 {
            acc.push(separator);
        }
        acc.push(c);
        acc
    })
}
