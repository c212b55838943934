pub mod context;
pub mod message;
pub mod prompt;

pub use context::WindowContext;
pub use message::{ApiMessage, Message, MessageContent, Role};
pub use prompt::Prompt;
