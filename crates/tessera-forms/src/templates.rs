//! Built-in form templates

use tessera_core::layout::builtin_view;
use tessera_core::{CoreError, Templates};

/// Source of the horizontal layout, labels beside the controls
pub const HORIZONTAL: &str = include_str!("../templates/horizontal.html");

/// Source of the vertical layout, labels above the controls
pub const VERTICAL: &str = include_str!("../templates/vertical.html");

/// Registers the `horizontal` and `vertical` form templates
///
/// ```rust
/// use tessera_core::Templates;
///
/// let mut templates = Templates::new();
/// tessera_forms::register_templates(&mut templates).unwrap();
/// assert!(templates.has("tessera/form/horizontal.html"));
/// assert!(templates.has("tessera/form/vertical.html"));
/// ```
pub fn register_templates(templates: &mut Templates) -> Result<(), CoreError> {
	templates.register(&builtin_view("form", "horizontal"), HORIZONTAL)?;
	templates.register(&builtin_view("form", "vertical"), VERTICAL)?;
	Ok(())
}
