pub mod adapters;
pub mod registry;

pub use adapters::{GeminiClient, GrokClient};
pub use registry::LlmRegistry;
