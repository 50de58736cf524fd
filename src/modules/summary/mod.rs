pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use domain::{GameFacts, Summarizer, SUMMARY_FAILED};
pub use infrastructure::LlmRegistry;
pub use traits::{Prompt, TextGenerator};
