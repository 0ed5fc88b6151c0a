pub mod pdf;
pub mod table;

pub use pdf::{render_pdf, render_pdf_in, write_pdf, PdfArtifact, PlanReport, DOCUMENT_TITLE};
pub use table::write_csv;
