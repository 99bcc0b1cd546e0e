//! # Customer Module
//!
//! The aggregate root. A customer owns an ordered, append-only list of
//! rentals and derives totals and the statement view from it on demand.

use crate::money::Money;
use crate::movie::Movie;
use crate::rental::Rental;
use crate::statement::{StatementLine, StatementView};
use chrono::NaiveDate;
use std::fmt;

/// A customer and their rental history.
///
/// Rentals are appended in the order they are recorded and that order is
/// the statement display order. Nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Display name
    pub name: String,
    rentals: Vec<Rental>,
}

impl Customer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rentals: Vec::new(),
        }
    }

    /// Record a rental. No limit on count, no deduplication.
    pub fn add_rental(&mut self, movie: Movie, rented_at: NaiveDate) {
        self.rentals.push(Rental::new(movie, rented_at));
    }

    /// The recorded rentals, insertion order
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Total owed over all rentals as of the reference date
    pub fn total_amount(&self, as_of: NaiveDate) -> Money {
        self.rentals.iter().map(|rental| rental.charge(as_of)).sum()
    }

    /// Total loyalty points over all rentals as of the reference date
    pub fn total_points(&self, as_of: NaiveDate) -> u32 {
        self.rentals.iter().map(|rental| rental.points(as_of)).sum()
    }

    /// Project the aggregate into the view renderers consume.
    ///
    /// Recomputed from the current rentals on every call.
    pub fn statement_view(&self, as_of: NaiveDate) -> StatementView {
        let lines = self
            .rentals
            .iter()
            .map(|rental| StatementLine {
                title: rental.movie.title.clone(),
                unit_price: rental.movie.category.base_price(),
                owed: rental.charge(as_of),
                rented_at: rental.rented_at,
            })
            .collect();

        StatementView {
            customer_name: self.name.clone(),
            lines,
            total_amount: self.total_amount(as_of),
            total_points: self.total_points(as_of),
            generated_at: as_of,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} rentals)", self.name, self.rentals.len())
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

    fn bob() -> Customer {
        let mut customer = Customer::new("Bob");
        customer.add_rental(Movie::new("Mad Max", Category::Regular), date(2026, 8, 2));
        customer.add_rental(Movie::new("Dune", Category::NewRelease), date(2026, 7, 27));
        customer.add_rental(Movie::new("Babe", Category::Children), date(2026, 8, 2));
        customer
    }

    #[test]
    fn test_empty_customer_totals() {
        let customer = Customer::new("Ann");
        let as_of = date(2026, 8, 6);
        assert_eq!(customer.total_amount(as_of), Money::ZERO);
        assert_eq!(customer.total_points(as_of), 0);
        assert!(customer.statement_view(as_of).lines.is_empty());
    }

    #[test]
    fn test_totals_match_per_rental_sums() {
        let customer = bob();
        let as_of = date(2026, 8, 6);

        let amount: Money = customer.rentals().iter().map(|r| r.charge(as_of)).sum();
        let points: u32 = customer.rentals().iter().map(|r| r.points(as_of)).sum();

        assert_eq!(customer.total_amount(as_of), amount);
        assert_eq!(customer.total_points(as_of), points);
        assert_eq!(customer.total_amount(as_of), Money::new(dec!(11.00)));
        assert_eq!(customer.total_points(as_of), 4);
    }

    #[test]
    fn test_statement_view_preserves_order() {
        let view = bob().statement_view(date(2026, 8, 6));

        let titles: Vec<&str> = view.lines.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Mad Max", "Dune", "Babe"]);

        assert_eq!(view.lines[0].owed, Money::new(dec!(5.00)));
        assert_eq!(view.lines[1].owed, Money::new(dec!(3.00)));
        assert_eq!(view.lines[2].owed, Money::new(dec!(3.00)));
        assert_eq!(view.lines[0].unit_price, Money::new(dec!(2.00)));
        assert_eq!(view.generated_at, date(2026, 8, 6));
        assert_eq!(view.rental_count(), 3);
    }

    #[test]
    fn test_view_tracks_reference_date() {
        let customer = bob();
        // A day later the regular rental accrues another extra-day charge
        let later = customer.statement_view(date(2026, 8, 7));
        assert_eq!(later.lines[0].owed, Money::new(dec!(6.50)));
        assert_eq!(later.lines[2].owed, Money::new(dec!(4.50)));
        assert_eq!(later.total_amount, Money::new(dec!(14.00)));
    }
}
