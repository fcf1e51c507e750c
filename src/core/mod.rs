pub mod converter;
pub mod engine;
pub mod exporter;
pub mod history;

pub use crate::domain::model::{CalculationRecord, Direction, Tool, Unit};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
