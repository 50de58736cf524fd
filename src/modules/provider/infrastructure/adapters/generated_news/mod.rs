pub mod adapter;
pub mod parser;
pub mod prompts;

pub use adapter::GeneratedMlbNewsProvider;
