pub mod config;
pub mod conversation;
pub mod error;
pub mod fewshot;
pub mod types;

pub use config::ContextConfig;
pub use conversation::ContextBuilder;
pub use error::{ContextError, Result};
pub use fewshot::FewShotRegistry;
pub use types::{ApiMessage, Message, MessageContent, Prompt, Role, WindowContext};
