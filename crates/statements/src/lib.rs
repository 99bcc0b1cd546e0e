//! # Vidstore Statements
//!
//! Statement rendering - plain text, HTML, JSON formats with fallback
//! resolution.
//!
//! Renderers consume the read-only [`StatementView`](vidstore_core::StatementView)
//! projection; layout and encoding live here, pricing stays in
//! `vidstore-core`.
//!
//! ## Renderers
//!
//! - [`PlainRenderer`] - newline-delimited text
//! - [`HtmlRenderer`] - HTML document with an escaped rental table
//! - [`JsonRenderer`] - JSON (pretty or compact)
//!
//! ## Resolution
//!
//! [`RendererRegistry`] maps case-normalized format names to renderers.
//! Unknown names log a warning and fall back to the plain renderer; a
//! statement request never fails on the format selector.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vidstore_statements::{RenderStatement, RendererRegistry};
//!
//! let registry = RendererRegistry::with_defaults();
//! let html = customer.statement(&registry, "html", as_of);
//! let still_plain = customer.statement(&registry, "docx", as_of);
//! ```

pub mod error;
pub mod registry;
pub mod renderers;

// Re-export main types
pub use error::{StatementError, StatementResult};
pub use registry::{RenderStatement, RendererRegistry};
pub use renderers::{HtmlRenderer, JsonRenderer, PlainRenderer, StatementRenderer};
