//! # Statement Module
//!
//! The read-only projection renderers consume. A view is recomputed from
//! the customer on every request - never cached - so it always reflects
//! the current rental list and reference date.

use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One statement row, in rental insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Movie title
    pub title: String,
    /// Per-rental list price of the movie's category
    pub unit_price: Money,
    /// Amount owed for this rental
    pub owed: Money,
    /// Calendar date the rental started
    pub rented_at: NaiveDate,
}

/// Aggregated statement data for one customer.
///
/// Renderers lay this out; they never recompute amounts or points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementView {
    /// Customer display name
    pub customer_name: String,
    /// Per-rental rows, insertion order
    pub lines: Vec<StatementLine>,
    /// Sum of owed amounts over all rows
    pub total_amount: Money,
    /// Sum of loyalty points over all rows
    pub total_points: u32,
    /// Reference date the view was computed for
    pub generated_at: NaiveDate,
}

impl StatementView {
    /// Number of rentals on the statement
    pub fn rental_count(&self) -> usize {
        self.lines.len()
    }
}
