//! # Vidstore Core
//!
//! Core domain types for Vidstore - Money, Category, Movie, Rental, Customer.
//!
//! This crate holds the pricing and loyalty-point engine. All computations
//! are pure functions of the rate constants and the elapsed rental days;
//! the reference date is always passed in by the caller, never read from
//! the system clock here.
//!
//! ## Types
//!
//! - [`Money`] / [`MoneyFormat`] - exact decimal amounts and display options
//! - [`Category`] / [`RateRule`] - per-category pricing and point rules
//! - [`Movie`], [`Rental`] - immutable rental records
//! - [`Customer`] - aggregate root over an ordered rental list
//! - [`StatementView`] - the read-only projection consumed by renderers

pub mod category;
pub mod customer;
pub mod money;
pub mod movie;
pub mod rental;
pub mod statement;

// Re-export main types
pub use category::{Category, RateRule};
pub use customer::Customer;
pub use money::{Money, MoneyFormat};
pub use movie::Movie;
pub use rental::Rental;
pub use statement::{StatementLine, StatementView};
