//! Statement renderers - plain text, HTML, JSON.
//!
//! Each renderer lays out a [`StatementView`]; amounts and points are
//! computed upstream and never recomputed here. Monetary display options
//! are passed in per renderer, not shared globally.

use vidstore_core::{MoneyFormat, StatementView};

/// Trait for rendering statements to different output formats
pub trait StatementRenderer: std::fmt::Debug {
    /// Render the view to the target format
    fn render(&self, view: &StatementView) -> String;

    /// Get the canonical format name used for registry lookup
    fn format_name(&self) -> &'static str;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;
}

// ============================================================================
// Plain Text Renderer
// ============================================================================

/// Newline-delimited text statement
#[derive(Debug)]
pub struct PlainRenderer {
    money: MoneyFormat,
}

impl Default for PlainRenderer {
    fn default() -> Self {
        Self {
            money: MoneyFormat::usd(),
        }
    }
}

impl PlainRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_money_format(mut self, money: MoneyFormat) -> Self {
        self.money = money;
        self
    }
}

impl StatementRenderer for PlainRenderer {
    fn render(&self, view: &StatementView) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rental Statement ({})\n", view.generated_at));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{}: total {}, {} loyalty points\n",
            view.customer_name,
            self.money.format(view.total_amount),
            view.total_points
        ));

        for line in &view.lines {
            output.push_str(&format!(
                "{:<28} {:>8} {:>8}  {}\n",
                line.title,
                self.money.format(line.unit_price),
                self.money.format(line.owed),
                line.rented_at
            ));
        }

        output
    }

    fn format_name(&self) -> &'static str {
        "plain"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }
}

// ============================================================================
// HTML Renderer
// ============================================================================

/// Well-formed HTML document with a summary paragraph and a rental table
#[derive(Debug)]
pub struct HtmlRenderer {
    money: MoneyFormat,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            money: MoneyFormat::usd(),
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_money_format(mut self, money: MoneyFormat) -> Self {
        self.money = money;
        self
    }

    /// Escape text so titles cannot break the markup
    fn escape_html(&self, raw: &str) -> String {
        let mut escaped = String::with_capacity(raw.len());
        for ch in raw.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}

impl StatementRenderer for HtmlRenderer {
    fn render(&self, view: &StatementView) -> String {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html>\n<head><title>Rental Statement</title></head>\n<body>\n");
        output.push_str(&format!(
            "<h1>Rental Statement ({})</h1>\n",
            view.generated_at
        ));
        output.push_str(&format!(
            "<p>{} owes <strong>{}</strong> and earned <strong>{}</strong> loyalty points</p>\n",
            self.escape_html(&view.customer_name),
            self.money.format(view.total_amount),
            view.total_points
        ));

        output.push_str("<table>\n");
        output.push_str("<tr><th>Title</th><th>Price</th><th>Owed</th><th>Rented On</th></tr>\n");
        for line in &view.lines {
            output.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                self.escape_html(&line.title),
                self.money.format(line.unit_price),
                self.money.format(line.owed),
                line.rented_at
            ));
        }
        output.push_str("</table>\n</body>\n</html>\n");

        output
    }

    fn format_name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }
}

// ============================================================================
// JSON Renderer
// ============================================================================

/// JSON statement (pretty or compact)
#[derive(Debug)]
pub struct JsonRenderer {
    pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl StatementRenderer for JsonRenderer {
    fn render(&self, view: &StatementView) -> String {
        if self.pretty {
            serde_json::to_string_pretty(view).unwrap_or_default()
        } else {
            serde_json::to_string(view).unwrap_or_default()
        }
    }

    fn format_name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}
