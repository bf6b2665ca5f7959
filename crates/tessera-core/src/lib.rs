//! Shared plumbing for Tessera grids
//!
//! This crate holds everything the table and form builders have in common:
//!
//! - **Row access**: [`RowAccessor`] reads a (dotted) field path out of
//!   heterogeneous row representations
//! - **Query parameters**: [`QueryParams`] is the request query string the
//!   grids read search, sort and page input from
//! - **Naming**: the id/label dispatch used when registering columns and
//!   form controls
//! - **Layouts**: built-in (`horizontal`, `vertical`) or custom view names
//! - **Settings**: TOML/JSON backed defaults for tables and forms
//! - **Translation**: the [`Translator`] seam used for user-facing messages
//! - **Templates**: a Tera registry that the renderers draw from
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Environment] --> B[Settings]
//!     A --> C[Templates]
//!     A --> D[Translator]
//!     E[Grid / FormGrid] --> F[QueryParams]
//!     E --> G[RowAccessor]
//!     E --> H[Layout]
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod environment;
pub mod error;
pub mod layout;
pub mod naming;
pub mod query;
pub mod row;
pub mod settings;
pub mod template;
pub mod translation;

// Re-exports for convenience
pub use environment::Environment;
pub use error::{CoreError, Result};
pub use layout::Layout;
pub use naming::Identity;
pub use query::QueryParams;
pub use row::{RowAccessor, Serialized, value_to_string};
pub use settings::{FormSettings, Settings, TableSettings};
pub use template::Templates;
pub use translation::{NullTranslator, Translator};
