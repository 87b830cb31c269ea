pub mod csv_rows;
pub mod memory;
pub mod sqlite;

pub use csv_rows::{write_template, CsvRowSource};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
