use super::context::WindowContext;
use crate::config::ContextConfig;

/// A live user request paired with whatever was captured on screen when
/// the assistant was invoked.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub context: WindowContext,
    pub prompt: String,
}

impl Prompt {
    pub fn new(context: WindowContext, prompt: impl Into<String>) -> Self {
        Self {
            context,
            prompt: prompt.into(),
        }
    }

    /// Render with default configuration (window context disabled).
    pub fn render(&self) -> String {
        self.render_with(&ContextConfig::default())
    }

    /// Render the content string for a user turn.
    ///
    /// Always wraps the trimmed request text in the fenced "User Prompt"
    /// block. When `include_window_context` is on and both capture fields
    /// carry content, the block is embedded in the richer template that
    /// hands the model the window title and extracted screen text.
    /// Total over its inputs: empty text and missing capture fields fall
    /// back to the plain form.
    pub fn render_with(&self, config: &ContextConfig) -> String {
        let user_prompt = format!("User Prompt:\n```\n{}\n```", self.prompt.trim());

        if config.include_window_context && self.context.has_capture() {
            let title = self.context.active_window_name.as_deref().unwrap_or("");
            let text = self.context.clean_screen_text.as_deref().unwrap_or("");
            return format!(
                "Active Window Title: {}\n\n\
                 Active Window OCR Extracted Text (RAW):\n\
                 ------ OCR DATA START ------\n\
                 ```\n\
                 {}\n\
                 ```\n\
                 ------ OCR DATA END ------\n\n\
                 {}\n\n\
                 Please answer \"User Prompt\" using the raw OCR text as context to the message.",
                title.trim(),
                text.trim(),
                user_prompt,
            )
            .trim()
            .to_string();
        }

        user_prompt.trim().to_string()
    }
}
