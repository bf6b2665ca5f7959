//! HTML escaping

/// Escapes text placed between tags, such as cell values and labels
///
/// ```
/// use tessera_html::escape;
///
/// assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape("<b>O'Neil</b>"), "&lt;b&gt;O&#x27;Neil&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escapes a quoted attribute value
///
/// Line breaks and tabs are encoded as well, otherwise attribute value
/// normalization turns them into spaces.
///
/// ```
/// use tessera_html::escape_attr;
///
/// assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
/// assert_eq!(escape_attr("first\nsecond"), "first&#10;second");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}
