mod league;
mod llm_choice;

pub use league::League;
pub use llm_choice::LlmChoice;
