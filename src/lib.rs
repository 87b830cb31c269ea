pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{write_template, CsvRowSource, MemoryStore, SqliteStore};
pub use core::aggregate::{aggregate_rows, WeeklyAggregator};
pub use core::catalog::{CatalogService, INITIAL_FOODS};
pub use core::reconcile::{ImportReconciler, IMPORT_HEADERS};
pub use core::schedule::WeeklySchedule;
pub use core::units::format_order;
pub use domain::model::{FoodTotal, ImportSummary};
pub use domain::ports::{CatalogStore, RowSource};
pub use utils::error::{MinutasError, Result};
