//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of claimed amounts
//! using rust_decimal for precise calculations without floating-point errors,
//! plus the lenient parser used for free-text currency fields such as
//! `"₹6,00,000"` or `"$1,200"`.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Characters stripped from a currency field before numeric parsing
const AMOUNT_NOISE: [char; 3] = ['₹', '$', ','];

/// Currencies recognized on claim intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    INR,
    USD,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
        }
    }

    /// Detects the currency from the symbol carried by a raw amount.
    ///
    /// Rupees are the house currency, so anything without a dollar sign
    /// is treated as INR.
    pub fn detect(raw: &str) -> Self {
        if raw.contains('$') {
            Currency::USD
        } else {
            Currency::INR
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Parses a free-text amount into a decimal.
///
/// Currency symbols (`₹`, `$`) and thousands separators are removed and the
/// remainder is trimmed before parsing. Anything else that is not part of a
/// decimal literal makes the whole value invalid.
///
/// # Examples
///
/// ```
/// use core_kernel::money::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("₹6,00,000").unwrap(), dec!(600000));
/// assert_eq!(parse_amount(" $1,200.50 ").unwrap(), dec!(1200.50));
/// assert!(parse_amount("twelve hundred").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<Decimal, MoneyError> {
    let cleaned: String = raw.chars().filter(|c| !AMOUNT_NOISE.contains(c)).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(MoneyError::InvalidAmount(raw.to_string()));
    }

    Decimal::from_str(cleaned).map_err(|_| MoneyError::InvalidAmount(raw.to_string()))
}

/// A monetary amount with associated currency
///
/// Amounts keep the full precision they were parsed with; only
/// [`Money::format_whole`] rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Parses a raw claim amount, detecting the currency from its symbol
    pub fn parse(raw: &str) -> Result<Self, MoneyError> {
        Ok(Self::new(parse_amount(raw)?, Currency::detect(raw)))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Rounds using banker's rounding (round half to even)
    pub fn round_bankers(&self, dp: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven),
            currency: self.currency,
        }
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Formats the amount in whole units with thousands separators,
    /// prefixed by the currency symbol (`₹600,000`).
    pub fn format_whole(&self) -> String {
        let whole = self.round_bankers(0).amount;
        let digits = whole.abs().trunc().to_string();
        let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };

        format!("{}{}{}", sign, self.currency.symbol(), group_thousands(&digits))
    }
}

/// Inserts a `,` every three digits counting from the right (`1234567` to
/// `1,234,567`). Expects a plain run of digits.
pub fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Represents a percentage rate (e.g., a payout ratio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.9 for 90%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a percentage (e.g., 90 for 90%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: (percentage / dec!(100)).normalize(),
        }
    }

    /// Applies this rate to a money amount without rounding
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_symbols_and_separators() {
        assert_eq!(parse_amount("₹600,000").unwrap(), dec!(600000));
        assert_eq!(parse_amount("$1,200").unwrap(), dec!(1200));
        assert_eq!(parse_amount("  42.5 ").unwrap(), dec!(42.5));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(parse_amount("abc"), Err(MoneyError::InvalidAmount(_))));
        assert!(parse_amount("₹").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12 000").is_err());
    }

    #[test]
    fn test_currency_detection() {
        assert_eq!(Currency::detect("$1,200"), Currency::USD);
        assert_eq!(Currency::detect("₹1,200"), Currency::INR);
        assert_eq!(Currency::detect("1200"), Currency::INR);
    }

    #[test]
    fn test_format_whole_groups_thousands() {
        assert_eq!(Money::new(dec!(600000), Currency::INR).format_whole(), "₹600,000");
        assert_eq!(Money::new(dec!(1200), Currency::USD).format_whole(), "$1,200");
        assert_eq!(Money::new(dec!(999), Currency::INR).format_whole(), "₹999");
        assert_eq!(Money::zero(Currency::INR).format_whole(), "₹0");
    }

    #[test]
    fn test_format_whole_rounds_half_to_even() {
        assert_eq!(Money::new(dec!(2.5), Currency::INR).format_whole(), "₹2");
        assert_eq!(Money::new(dec!(1234567.5), Currency::INR).format_whole(), "₹1,234,568");
    }

    #[test]
    fn test_format_whole_negative() {
        assert_eq!(Money::new(dec!(-1200), Currency::USD).format_whole(), "-$1,200");
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(90));
        let amount = Money::new(dec!(1000.00), Currency::INR);

        assert_eq!(rate.apply(&amount).amount(), dec!(900.00));
    }

    #[test]
    fn test_rate_application_keeps_precision() {
        let rate = Rate::from_percentage(dec!(90));
        let amount = Money::new(dec!(1.2345), Currency::INR);

        assert_eq!(rate.apply(&amount).amount(), dec!(1.11105));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("0"), "0");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grouped_amount_parses_back(amount in 0i64..10_000_000_000i64) {
            let money = Money::new(Decimal::from(amount), Currency::INR);
            let formatted = money.format_whole();

            prop_assert_eq!(parse_amount(&formatted).unwrap(), Decimal::from(amount));
        }
    }
}
