use crate::config::ContextConfig;
use crate::error::Result;
use crate::fewshot::FewShotRegistry;
use crate::types::{ApiMessage, Message};

/// Assembles the `messages` array for one chat-completion request: the
/// few-shot seed first, then the live turns.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    registry: FewShotRegistry,
    config: ContextConfig,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    /// Builder over the built-in seed set with default configuration
    pub fn new() -> Self {
        Self {
            registry: FewShotRegistry::builtin(),
            config: ContextConfig::default(),
        }
    }

    pub fn with_registry(mut self, registry: FewShotRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: ContextConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &FewShotRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Render seed and live turns into the flat role/content array sent
    /// as a request body's `messages` value.
    ///
    /// Fails only on the user-turn invariant; see
    /// [`Message::to_api_with`].
    pub fn request_messages(&self, live: &[Message]) -> Result<Vec<ApiMessage>> {
        let mut rendered = Vec::with_capacity(self.registry.len() + live.len());
        for message in self.registry.iter().chain(live.iter()) {
            rendered.push(message.to_api_with(&self.config)?);
        }

        tracing::debug!(
            "Assembled chat context: {} seed + {} live messages",
            self.registry.len(),
            live.len()
        );

        Ok(rendered)
    }
}
