pub mod modules;
pub mod shared;

pub use modules::screamsheet::{Screamsheet, ScreamsheetFactory, SheetKind, SheetRequest};
pub use shared::config::Settings;
pub use shared::errors::{AppError, AppResult};
