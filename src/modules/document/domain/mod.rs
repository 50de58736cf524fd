pub mod flowable;
pub mod style;

pub use flowable::{Document, Flowable, Table};
