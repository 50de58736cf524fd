pub mod entities;
pub mod services;

// Re-exports for easy access
pub use entities::*;
pub use services::ArticleSelector;
