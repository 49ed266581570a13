//! The loading indicator fragment.

use super::escape;
use crate::models::loading::DEFAULT_LOADING_TEXT;

/// Renders a spinner plus a message. A `None` text falls back to
/// "Loading...". The `.loading` and `.spinner` classes are styled by the
/// layout shell.
pub fn render(text: Option<&str>) -> String {
    let text = text.unwrap_or(DEFAULT_LOADING_TEXT);
    format!(
        r#"<div class="loading"><div class="spinner"></div><p>{}</p></div>"#,
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the default text appears when none is supplied.
    #[test]
    fn test_default_text() {
        let html = render(None);
        assert!(html.contains("Loading..."));
        assert!(html.contains(r#"class="spinner""#));
    }

    /// Test that a supplied text replaces the default.
    #[test]
    fn test_custom_text() {
        let html = render(Some("Fetching customers"));
        assert!(html.contains("Fetching customers"));
        assert!(!html.contains("Loading..."));
    }

    /// Markup in the text must not leak into the fragment structure.
    #[test]
    fn test_text_is_escaped() {
        let html = render(Some("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
