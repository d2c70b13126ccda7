pub mod csv_writer;
pub mod table_preview;

pub use csv_writer::CsvWriter;
pub use table_preview::TablePreview;
