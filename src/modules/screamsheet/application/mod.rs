pub mod factory;

pub use factory::{ScreamsheetFactory, SheetKind, SheetRequest};
