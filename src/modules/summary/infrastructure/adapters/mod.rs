pub mod gemini;
pub mod grok;

pub use gemini::GeminiClient;
pub use grok::GrokClient;
