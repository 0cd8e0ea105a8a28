#![forbid(unsafe_code)]

pub mod file;
pub mod mapping;
pub mod sheet;
pub mod source;

pub use file::{CsvFileSource, EmbeddedCsvSource};
pub use sheet::{SheetConfig, SheetSource};
pub use source::{InMemorySource, SourceError, Sources, WordSource};
