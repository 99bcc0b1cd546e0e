//! # Money Module
//!
//! Exact decimal money built on `rust_decimal` so that statement totals
//! never drift by a penny, plus an explicit display format that callers
//! pass to renderers instead of mutating any global currency settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A monetary amount with exact decimal arithmetic.
///
/// # Examples
/// ```
/// use vidstore_core::Money;
/// use rust_decimal_macros::dec;
///
/// let price = Money::new(dec!(2.00)) + Money::new(dec!(1.50)) * dec!(3);
/// assert_eq!(price, Money::new(dec!(6.50)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create Money from a decimal amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, factor: Decimal) -> Money {
        Money(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display options for monetary values.
///
/// Passed explicitly into renderer constructors; there is no shared
/// formatting state anywhere in the workspace.
///
/// # Examples
/// ```
/// use vidstore_core::{Money, MoneyFormat};
/// use rust_decimal_macros::dec;
///
/// let usd = MoneyFormat::usd();
/// assert_eq!(usd.format(Money::new(dec!(11.5))), "$11.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Currency symbol printed before the amount
    pub symbol: String,
    /// Number of decimal places shown
    pub decimal_places: u32,
}

impl MoneyFormat {
    /// Create a display format
    pub fn new(symbol: &str, decimal_places: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimal_places,
        }
    }

    /// US Dollar (2 decimals)
    pub fn usd() -> Self {
        Self::new("$", 2)
    }

    /// Render an amount with the symbol and a fixed number of decimals
    pub fn format(&self, money: Money) -> String {
        let mut amount = money.amount().round_dp(self.decimal_places);
        amount.rescale(self.decimal_places);
        format!("{}{}", self.symbol, amount)
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::usd()
    }
}
