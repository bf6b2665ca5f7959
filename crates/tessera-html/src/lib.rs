//! HTML helpers for Tessera
//!
//! - **Escaping**: [`escape`] and [`escape_attr`] for text and attribute values
//! - **Content**: [`Content`] is either text (escaped on output) or a raw
//!   [`Expression`] that is emitted verbatim
//! - **Attributes**: ordered attribute maps, rendering, and [`decorate`] which
//!   merges user attributes into defaults with CSS class union/exclusion
//! - **Builder**: [`HtmlBuilder`] produces single elements
//!
//! # Example
//!
//! ```rust
//! use tessera_html::{HtmlBuilder, attributes, decorate};
//!
//! let attrs = decorate(
//!     &attributes([("class", "table !table-bordered"), ("id", "users")]),
//!     &attributes([("class", "table table-bordered")]),
//! );
//!
//! let html = HtmlBuilder::new().create("table", None, &attrs);
//! assert_eq!(html, r#"<table class="table" id="users">"#);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod builder;
pub mod content;
pub mod escape;

// Re-exports for convenience
pub use attributes::{Attributes, attributes, decorate, render_attributes};
pub use builder::HtmlBuilder;
pub use content::{Content, Expression};
pub use escape::{escape, escape_attr};
