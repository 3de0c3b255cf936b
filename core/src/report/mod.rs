pub mod record;
pub mod writer;

pub use record::EmissionReport;
pub use writer::ReportWriter;
