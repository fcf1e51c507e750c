pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::storage::LocalStorage;
pub use app::session::Session;
pub use crate::core::{engine::ConverterEngine, exporter::HistoryExporter, history::CalculationHistory};
pub use domain::model::{CalculationRecord, Direction, Tool, Unit, UnitBound};
pub use utils::error::{ConverterError, Result};
