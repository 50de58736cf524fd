pub mod pdf_writer;
pub mod text_writer;

pub use pdf_writer::PdfWriter;
pub use text_writer::TextWriter;
