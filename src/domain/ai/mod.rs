pub mod client;

pub use client::{OpenAiGenerator, SharedGenerator, TextGenerator};
