pub mod configuration;
pub mod error;
pub mod prompt;
pub mod summarizer;
