use serde::{Deserialize, Serialize};

/// Snapshot of the user's foreground window, handed in by the capture
/// layer. Both fields are optional; a capture with either one missing
/// disables context augmentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_window_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_screen_text: Option<String>,
}

impl WindowContext {
    /// Create a context with both fields populated
    pub fn new(
        active_window_name: impl Into<String>,
        clean_screen_text: impl Into<String>,
    ) -> Self {
        Self {
            active_window_name: Some(active_window_name.into()),
            clean_screen_text: Some(clean_screen_text.into()),
        }
    }

    /// True when both fields are present with actual content
    pub fn has_capture(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.active_window_name) && filled(&self.clean_screen_text)
    }
}
