//! Statement command - load rentals, render, write to the chosen sink

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use vidstore_core::{Category, Customer, Movie};
use vidstore_statements::{RenderStatement, RendererRegistry};

/// On-disk rental data for a single customer
#[derive(Debug, Deserialize)]
pub struct StatementInput {
    pub customer: String,
    pub rentals: Vec<RentalEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RentalEntry {
    pub title: String,
    pub category: Category,
    pub rented_at: NaiveDate,
}

impl StatementInput {
    fn into_customer(self) -> Customer {
        let mut customer = Customer::new(&self.customer);
        for entry in self.rentals {
            customer.add_rental(Movie::new(&entry.title, entry.category), entry.rented_at);
        }
        customer
    }
}

pub fn run(
    data: Option<&Path>,
    format: &str,
    as_of: Option<NaiveDate>,
    output: Option<&Path>,
) -> Result<()> {
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let customer = match data {
        Some(path) => load_input(path)?.into_customer(),
        None => demo_customer(as_of),
    };

    let registry = RendererRegistry::with_defaults();
    tracing::debug!(requested = format, %as_of, "rendering statement");

    let content = customer.statement(&registry, format, as_of);
    write_statement(&content, output)
}

fn load_input(path: &Path) -> Result<StatementInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse data file {:?}", path))
}

fn write_statement(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).context("Failed to write statement file")?;
            println!("✅ Statement written: {:?}", path);
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

/// Built-in sample data for a quick demo run
fn demo_customer(as_of: NaiveDate) -> Customer {
    let mut customer = Customer::new("Bob");
    customer.add_rental(
        Movie::new("Mad Max", Category::Regular),
        as_of - Duration::days(4),
    );
    customer.add_rental(
        Movie::new("Dune", Category::NewRelease),
        as_of - Duration::days(10),
    );
    customer.add_rental(
        Movie::new("Babe", Category::Children),
        as_of - Duration::days(4),
    );
    customer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SAMPLE: &str = r#"{
        "customer": "Bob",
        "rentals": [
            {"title": "Mad Max", "category": "regular", "rented_at": "2026-08-02"},
            {"title": "Dune", "category": "new_release", "rented_at": "2026-07-27"},
            {"title": "Babe", "category": "children", "rented_at": "2026-08-02"}
        ]
    }"#;

    #[test]
    fn test_parse_input() {
        let input: StatementInput = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(input.customer, "Bob");
        assert_eq!(input.rentals.len(), 3);
        assert_eq!(input.rentals[1].category, Category::NewRelease);

        let customer = input.into_customer();
        assert_eq!(customer.rentals().len(), 3);
        assert_eq!(customer.rentals()[0].movie.title, "Mad Max");
    }

    #[test]
    fn test_unknown_category_fails_parse() {
        let raw = r#"{"customer": "Ann", "rentals": [
            {"title": "X", "category": "imax", "rented_at": "2026-08-02"}
        ]}"#;
        assert!(serde_json::from_str::<StatementInput>(raw).is_err());
    }

    #[test]
    fn test_demo_matches_data_file() {
        let as_of = date(2026, 8, 6);
        let from_file: StatementInput = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(demo_customer(as_of), from_file.into_customer());
    }

    #[test]
    fn test_write_statement_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.txt");

        let as_of = date(2026, 8, 6);
        let registry = RendererRegistry::with_defaults();
        let content = demo_customer(as_of).statement(&registry, "plain", as_of);

        write_statement(&content, Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        assert!(content.contains("Bob: total $11.00, 4 loyalty points"));
    }

    #[test]
    fn test_run_with_data_file_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("rentals.json");
        let out_path = dir.path().join("statement.html");
        fs::write(&data_path, SAMPLE).unwrap();

        run(
            Some(&data_path),
            "html",
            Some(date(2026, 8, 6)),
            Some(&out_path),
        )
        .unwrap();

        let html = fs::read_to_string(&out_path).unwrap();
        assert_eq!(html.matches("<tr><td>").count(), 3);
        assert!(html.contains("<strong>$11.00</strong>"));
    }
}
