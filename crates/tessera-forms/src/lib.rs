//! Declarative HTML form grids
//!
//! A [`FormGrid`] groups [`Field`] controls into [`Fieldset`]s, binds them to
//! a row and carries the presentation options of the form. [`FormBuilder`]
//! renders it through the Tera templates registered in the
//! [`Environment`](tessera_core::Environment), together with the validation
//! messages of a [`MessageBag`].
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[FormBuilder] --> B[FormGrid]
//!     A --> C[MessageBag]
//!     B --> D[Fieldset]
//!     B --> E[Hidden fields]
//!     D --> F[Field]
//!     A --> G[Templates]
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tessera_core::Environment;
//! use tessera_forms::{FieldType, FormBuilder, register_templates};
//!
//! let mut env = Environment::default();
//! register_templates(env.templates_mut()).unwrap();
//!
//! let form = FormBuilder::make(&env, |form| {
//!     form.with(json!({"id": 3, "name": "Ann", "role": "admin"}));
//!     form.set_token(false);
//!     form.hidden("id");
//!     form.fieldset("Profile", |fieldset| {
//!         fieldset.control("name").set_help("Shown on your profile");
//!         fieldset
//!             .typed_control(FieldType::Select, "role")
//!             .set_options([("admin", "Administrator"), ("member", "Member")]);
//!     });
//!     Ok(())
//! })
//! .unwrap();
//!
//! let html = form.render().unwrap();
//! assert!(html.contains(r#"<input type="hidden" name="id" id="id" value="3">"#));
//! assert!(html.contains(r#"<option value="admin" selected="selected">Administrator</option>"#));
//! assert!(html.contains("<legend>Profile</legend>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod error;
pub mod field;
pub mod fieldset;
pub mod grid;
pub mod messages;
pub mod templates;

// Re-exports for convenience
pub use builder::{ControlContext, FieldsetContext, FormBuilder, FormContext, TOKEN_NAME};
pub use error::{FormError, Result};
pub use field::{Field, FieldRenderer, FieldType, FieldValue};
pub use fieldset::Fieldset;
pub use grid::FormGrid;
pub use messages::MessageBag;
pub use templates::{HORIZONTAL, VERTICAL, register_templates};
