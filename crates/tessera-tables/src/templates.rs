//! Built-in table templates

use tessera_core::layout::builtin_view;
use tessera_core::{CoreError, Templates};

/// Source of the horizontal layout, one row per record
pub const HORIZONTAL: &str = include_str!("../templates/horizontal.html");

/// Source of the vertical layout, one row per column
pub const VERTICAL: &str = include_str!("../templates/vertical.html");

/// Registers the `horizontal` and `vertical` table templates
///
/// ```rust
/// use tessera_core::Templates;
///
/// let mut templates = Templates::new();
/// tessera_tables::register_templates(&mut templates).unwrap();
/// assert!(templates.has("tessera/table/horizontal.html"));
/// assert!(templates.has("tessera/table/vertical.html"));
/// ```
pub fn register_templates(templates: &mut Templates) -> Result<(), CoreError> {
	templates.register(&builtin_view("table", "horizontal"), HORIZONTAL)?;
	templates.register(&builtin_view("table", "vertical"), VERTICAL)?;
	Ok(())
}
