pub mod dto;
pub mod handler;
pub mod prompt;

pub use dto::{HintRequest, HintResponse};
pub use prompt::HintPrompt;
