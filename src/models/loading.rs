use serde::{Deserialize, Serialize};

/// The text shown next to the spinner when a caller supplies none.
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// Global loading indicator state.
///
/// `text` keeps its last value across mutations that do not supply one,
/// so a caller toggling `active` off does not reset the message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Loading {
    pub active: bool,
    pub text: String,
}

impl Default for Loading {
    fn default() -> Self {
        Loading {
            active: false,
            text: DEFAULT_LOADING_TEXT.to_string(),
        }
    }
}
