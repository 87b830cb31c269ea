pub mod aggregate;
pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod reconcile;
pub mod schedule;
pub mod units;

pub use crate::domain::model::{FoodTotal, ImportSummary, RawRow};
pub use crate::domain::ports::{CatalogStore, RowSource};
pub use crate::utils::error::Result;
