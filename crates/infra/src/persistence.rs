// crates/infra/src/persistence.rs
pub mod document_store;
pub mod file_reader;
pub mod file_writer;

pub use document_store::{DocumentFormat, RangeDocumentStore};
pub use file_reader::FileReader;
pub use file_writer::FileWriter;
