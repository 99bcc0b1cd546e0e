//! Movie - an immutable title/category pair.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A movie available for rental. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title
    pub title: String,
    /// Pricing tier
    pub category: Category,
}

impl Movie {
    pub fn new(title: &str, category: Category) -> Self {
        Self {
            title: title.to_string(),
            category,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.category)
    }
}
