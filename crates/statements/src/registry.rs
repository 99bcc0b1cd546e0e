//! # Renderer Registry
//!
//! Maps case-normalized format names to renderer instances. Resolution
//! never fails a statement request: an unrecognized name logs a warning
//! and falls back to the plain renderer, which the registry holds as a
//! fixed entry independent of whatever was registered.

use crate::error::{StatementError, StatementResult};
use crate::renderers::{HtmlRenderer, JsonRenderer, PlainRenderer, StatementRenderer};
use chrono::NaiveDate;
use std::collections::HashMap;
use vidstore_core::Customer;

/// Registry of statement renderers keyed by format name.
pub struct RendererRegistry {
    entries: HashMap<String, Box<dyn StatementRenderer>>,
    fallback: PlainRenderer,
}

impl RendererRegistry {
    /// Empty registry. Resolution still works - everything falls back to
    /// the plain renderer.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: PlainRenderer::new(),
        }
    }

    /// Registry with the built-in formats: plain, html, json
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PlainRenderer::new()));
        registry.register(Box::new(HtmlRenderer::new()));
        registry.register(Box::new(JsonRenderer::new()));
        registry
    }

    /// Register a renderer under its canonical format name.
    ///
    /// Re-registering a name replaces the previous entry.
    pub fn register(&mut self, renderer: Box<dyn StatementRenderer>) {
        self.entries
            .insert(renderer.format_name().to_lowercase(), renderer);
    }

    /// Strict lookup, surfacing `UnknownFormat` for unregistered names
    pub fn try_resolve(&self, name: &str) -> StatementResult<&dyn StatementRenderer> {
        self.entries
            .get(&name.to_lowercase())
            .map(|renderer| renderer.as_ref())
            .ok_or_else(|| StatementError::UnknownFormat {
                requested: name.to_string(),
            })
    }

    /// Resolve a format name, substituting the plain fallback for
    /// unrecognized names. The diagnostic goes to the log channel, never
    /// into the statement body.
    pub fn resolve(&self, name: &str) -> &dyn StatementRenderer {
        match self.try_resolve(name) {
            Ok(renderer) => renderer,
            Err(err) => {
                tracing::warn!(
                    requested = name,
                    fallback = self.fallback.format_name(),
                    "{err}; falling back"
                );
                &self.fallback
            }
        }
    }

    /// Registered format names, sorted
    pub fn formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statement rendering entry point on the customer aggregate.
///
/// Lives here rather than in the core crate so pricing stays independent
/// of output formats.
pub trait RenderStatement {
    /// Render this customer's statement in the requested format as of the
    /// given reference date. Unknown format names fall back to plain.
    fn statement(&self, registry: &RendererRegistry, format: &str, as_of: NaiveDate) -> String;
}

impl RenderStatement for Customer {
    fn statement(&self, registry: &RendererRegistry, format: &str, as_of: NaiveDate) -> String {
        registry.resolve(format).render(&self.statement_view(as_of))
    }
}
