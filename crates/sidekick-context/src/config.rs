// Rendering configuration shared by everything that turns messages into
// wire payloads.

use serde::{Deserialize, Serialize};

/// Controls how user prompts are rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Embed the captured window title and screen text into user turns.
    /// Off by default: extraction output is noisy and frequently
    /// irrelevant to the request.
    #[serde(default)]
    pub include_window_context: bool,
}

impl ContextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_context(mut self, enabled: bool) -> Self {
        self.include_window_context = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_context_off_by_default() {
        assert!(!ContextConfig::default().include_window_context);
        assert!(!ContextConfig::new().include_window_context);
    }

    #[test]
    fn test_builder_toggles_flag() {
        let config = ContextConfig::new().with_window_context(true);
        assert!(config.include_window_context);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ContextConfig::new().with_window_context(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ContextConfig = serde_json::from_str(&json).unwrap();
        assert!(deserialized.include_window_context);
    }

    #[test]
    fn test_missing_field_defaults_off() {
        let config: ContextConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.include_window_context);
    }
}
