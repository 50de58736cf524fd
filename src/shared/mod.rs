// Shared kernel used by every module

pub mod config; // Environment-driven settings
pub mod domain; // Shared value objects
pub mod errors; // Shared error types
pub mod utils; // Logging and text helpers
