//! # Rental Module
//!
//! A rental binds a movie to the calendar date it was rented. Charges and
//! points delegate to the movie's category rate rule, evaluated against a
//! caller-supplied reference date so results are reproducible in tests.

use crate::money::Money;
use crate::movie::Movie;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded movie rental. Immutable; lives as long as the owning
/// [`Customer`](crate::Customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    /// The rented movie
    pub movie: Movie,
    /// Calendar date the rental started
    pub rented_at: NaiveDate,
}

impl Rental {
    pub fn new(movie: Movie, rented_at: NaiveDate) -> Self {
        Self { movie, rented_at }
    }

    /// Whole days between the rental date and `as_of`, clamped at zero.
    ///
    /// A rental dated after the reference date counts as a same-day rental;
    /// a negative elapsed term would otherwise produce a charge below the
    /// base price.
    pub fn elapsed_days(&self, as_of: NaiveDate) -> i64 {
        (as_of - self.rented_at).num_days().max(0)
    }

    /// Amount owed for this rental as of the reference date
    pub fn charge(&self, as_of: NaiveDate) -> Money {
        self.movie
            .category
            .rate_rule()
            .charge_for(self.elapsed_days(as_of))
    }

    /// Loyalty points earned for this rental as of the reference date
    pub fn points(&self, as_of: NaiveDate) -> u32 {
        self.movie
            .category
            .rate_rule()
            .points_for(self.elapsed_days(as_of))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_elapsed_days() {
        let rental = Rental::new(Movie::new("Babe", Category::Children), date(2026, 8, 2));
        assert_eq!(rental.elapsed_days(date(2026, 8, 6)), 4);
        assert_eq!(rental.elapsed_days(date(2026, 8, 2)), 0);
    }

    #[test]
    fn test_future_rental_clamps_to_same_day() {
        let rental = Rental::new(Movie::new("Dune", Category::NewRelease), date(2026, 8, 20));
        assert_eq!(rental.elapsed_days(date(2026, 8, 6)), 0);
        assert_eq!(rental.charge(date(2026, 8, 6)), Money::new(dec!(3.00)));
        assert_eq!(rental.points(date(2026, 8, 6)), 1);
    }

    #[test]
    fn test_charge_delegates_to_rate_rule() {
        let rental = Rental::new(Movie::new("Mad Max", Category::Regular), date(2026, 8, 2));
        let as_of = date(2026, 8, 6);
        assert_eq!(rental.charge(as_of), Money::new(dec!(5.00)));
        assert_eq!(rental.points(as_of), 1);
    }
}
