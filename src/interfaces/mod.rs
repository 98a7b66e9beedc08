pub mod csv;
pub mod receipt_writer;
