//! The root layout shell.

use super::loading;
use crate::models::Loading;

/// Renders the main layout page. The loading fragment is embedded only
/// while the store's loading flag is active; the handler passes the
/// store state in.
pub fn render(state: &Loading) -> String {
    let indicator = if state.active {
        loading::render(Some(&state.text))
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>appshell</title>
<style>
  body {{ font-family: sans-serif; margin: 0; }}
  nav {{ padding: 10px; border-bottom: 1px solid #ddd; }}
  nav a {{ margin-right: 10px; color: #1976d2; }}
  main {{ padding: 10px; }}
  .loading {{ display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 200px; }}
  .spinner {{ width: 40px; height: 40px; border: 4px solid #ddd; border-top: 4px solid #1976d2; border-radius: 50%; animation: spin 1s linear infinite; }}
  .loading p {{ margin-top: 10px; font-size: 14px; color: #555; }}
  @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/details">Details</a></nav>
<main>{}</main>
</body>
</html>
"#,
        indicator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that an idle store renders the shell without a spinner.
    #[test]
    fn test_idle_layout_has_no_spinner() {
        let html = render(&Loading::default());
        assert!(html.contains("<nav>"));
        assert!(!html.contains(r#"class="loading""#));
    }

    /// Test that an active loading state embeds the indicator with its text.
    #[test]
    fn test_active_layout_embeds_indicator() {
        let html = render(&Loading {
            active: true,
            text: "Fetching users".to_string(),
        });
        assert!(html.contains(r#"class="loading""#));
        assert!(html.contains("Fetching users"));
    }
}
