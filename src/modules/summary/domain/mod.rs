pub mod game_facts;
pub mod prompts;
pub mod summarizer;

pub use game_facts::GameFacts;
pub use summarizer::{Summarizer, SUMMARY_FAILED};
