pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use domain::{Document, Flowable, Table};
pub use infrastructure::{PdfWriter, TextWriter};
pub use traits::DocumentWriter;
