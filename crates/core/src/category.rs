//! # Category Module
//!
//! Movie categories and their rate rules. Each category maps to a constant
//! set (base price, extra-day price, free-day threshold, points) and the
//! charge/point formulas are pure functions over those constants and the
//! elapsed rental days. Adding a category means adding a variant and its
//! constant set; only a diverging formula (like the NewRelease point bonus)
//! needs a new rule field.

use crate::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing tier of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Standard back-catalog title
    Regular,
    /// Recent release - flat premium price per rental
    NewRelease,
    /// Children's title - cheap with a long free period
    Children,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Regular => "regular",
            Category::NewRelease => "new_release",
            Category::Children => "children",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "regular" => Some(Category::Regular),
            "new_release" => Some(Category::NewRelease),
            "children" => Some(Category::Children),
            _ => None,
        }
    }

    /// The rate rule constants for this category
    pub fn rate_rule(&self) -> RateRule {
        match self {
            Category::Regular => RateRule {
                base_price: Money::new(dec!(2.00)),
                extra_price: Money::new(dec!(1.50)),
                free_days: 2,
                base_points: 1,
                bonus_after_days: None,
            },
            Category::NewRelease => RateRule {
                base_price: Money::new(dec!(3.00)),
                extra_price: Money::ZERO,
                free_days: 0,
                base_points: 1,
                bonus_after_days: Some(1),
            },
            Category::Children => RateRule {
                base_price: Money::new(dec!(1.50)),
                extra_price: Money::new(dec!(1.50)),
                free_days: 3,
                base_points: 1,
                bonus_after_days: None,
            },
        }
    }

    /// The per-rental list price shown on statements
    pub fn base_price(&self) -> Money {
        self.rate_rule().base_price
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Constant set and formulas for one pricing tier.
///
/// Charge: `base_price + extra_price * max(0, elapsed_days - free_days)`.
/// Points: `base_points`, plus one when `bonus_after_days` is set and the
/// rental ran longer than that threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRule {
    pub base_price: Money,
    pub extra_price: Money,
    pub free_days: i64,
    pub base_points: u32,
    pub bonus_after_days: Option<i64>,
}

impl RateRule {
    /// Charge for a rental held the given number of whole days.
    ///
    /// The extra-day term is clamped at zero, so short (or future-dated,
    /// clamped-to-zero) rentals always owe exactly the base price.
    pub fn charge_for(&self, elapsed_days: i64) -> Money {
        let billable_days = (elapsed_days.max(0) - self.free_days).max(0);
        self.base_price + self.extra_price * Decimal::from(billable_days)
    }

    /// Loyalty points earned for a rental held the given number of days
    pub fn points_for(&self, elapsed_days: i64) -> u32 {
        let mut points = self.base_points;
        if let Some(threshold) = self.bonus_after_days {
            if elapsed_days > threshold {
                points += 1;
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_charges() {
        let rule = Category::Regular.rate_rule();
        assert_eq!(rule.charge_for(0), Money::new(dec!(2.00)));
        assert_eq!(rule.charge_for(2), Money::new(dec!(2.00)));
        assert_eq!(rule.charge_for(3), Money::new(dec!(3.50)));
        assert_eq!(rule.charge_for(5), Money::new(dec!(6.50)));
    }

    #[test]
    fn test_children_charges() {
        let rule = Category::Children.rate_rule();
        assert_eq!(rule.charge_for(3), Money::new(dec!(1.50)));
        assert_eq!(rule.charge_for(5), Money::new(dec!(4.50)));
    }

    #[test]
    fn test_new_release_flat_charge() {
        let rule = Category::NewRelease.rate_rule();
        for days in 0..=14 {
            assert_eq!(rule.charge_for(days), Money::new(dec!(3.00)));
        }
    }

    #[test]
    fn test_negative_days_charge_base_price() {
        for category in [Category::Regular, Category::NewRelease, Category::Children] {
            let rule = category.rate_rule();
            assert_eq!(rule.charge_for(-3), rule.base_price);
        }
    }

    #[test]
    fn test_charges_monotonic_in_days() {
        for category in [Category::Regular, Category::NewRelease, Category::Children] {
            let rule = category.rate_rule();
            let mut previous = rule.charge_for(0);
            for days in 1..=30 {
                let charge = rule.charge_for(days);
                assert!(
                    charge >= previous,
                    "{} charge decreased at day {}",
                    category,
                    days
                );
                previous = charge;
            }
        }
    }

    #[test]
    fn test_points() {
        assert_eq!(Category::Regular.rate_rule().points_for(10), 1);
        assert_eq!(Category::Children.rate_rule().points_for(10), 1);
        assert_eq!(Category::NewRelease.rate_rule().points_for(1), 1);
        assert_eq!(Category::NewRelease.rate_rule().points_for(2), 2);
    }

    #[test]
    fn test_category_str_round_trip() {
        for category in [Category::Regular, Category::NewRelease, Category::Children] {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("NEW_RELEASE"), Some(Category::NewRelease));
        assert_eq!(Category::from_str("imax"), None);
    }
}
