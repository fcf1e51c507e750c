use crate::core::converter;
use crate::core::exporter::HistoryExporter;
use crate::core::history::{CalculationHistory, RecentView};
use crate::domain::model::{BoundTable, CalculationRecord, Tool, Unit};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{ConverterError, Result};
use crate::utils::validation::parse_and_validate;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Owns the session history and runs validate → convert → append.
pub struct ConverterEngine<S: Storage> {
    tool: Tool,
    bounds: BoundTable,
    max_recent: usize,
    export_prefix: String,
    history: CalculationHistory,
    exporter: HistoryExporter<S>,
}

impl<S: Storage> ConverterEngine<S> {
    pub fn new<C: ConfigProvider>(storage: S, config: &C) -> Self {
        let tool = config.tool();
        Self {
            tool,
            bounds: config.bounds(),
            max_recent: config.max_recent(),
            export_prefix: config.export_prefix().to_string(),
            history: CalculationHistory::new(),
            exporter: HistoryExporter::new(storage, tool),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Converts `raw_text` into `target`, recording the result on success.
    ///
    /// The input is read in the tool's other unit and checked against that
    /// unit's bound. Failed attempts leave the history untouched.
    pub fn convert_to(&mut self, target: Unit, raw_text: &str) -> Result<&CalculationRecord> {
        let direction =
            self.tool
                .direction_to(target)
                .ok_or_else(|| ConverterError::UnsupportedUnitError {
                    unit: target.name().to_string(),
                    tool: self.tool.heading().to_lowercase(),
                })?;

        let source = direction.from();
        let value = match parse_and_validate(raw_text, self.bounds.minimum(source)) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Rejected {} input '{}': {}", source, raw_text.trim(), e);
                return Err(e);
            }
        };

        let answer = converter::convert(direction, value);
        let record = CalculationRecord::new(value, source, answer, target);
        tracing::debug!("Converted: {}", record);

        self.history.append(record);
        Ok(&self.history.all_oldest_first()[self.history.total_count() - 1])
    }

    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// History can only be viewed or exported once something was calculated.
    pub fn can_show_history(&self) -> bool {
        self.history.total_count() > 0
    }

    pub fn recent_view(&self) -> RecentView<'_> {
        self.history.recent_view(self.max_recent)
    }

    pub fn export_file_name(&self, export_date: NaiveDate) -> String {
        HistoryExporter::<S>::file_name(export_date, &self.export_prefix)
    }

    /// A failed export leaves the history as it was.
    pub fn export(&self, export_date: NaiveDate) -> Result<PathBuf> {
        match self
            .exporter
            .export(self.history.all_oldest_first(), export_date, &self.export_prefix)
        {
            Ok(path) => {
                tracing::info!(
                    "Exported {} calculations to {}",
                    self.history.total_count(),
                    path.display()
                );
                Ok(path)
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn help_text(&self) -> String {
        let [a, b] = self.tool.units();
        let noun = self.tool.heading().to_lowercase();
        format!(
            "To use the program, enter the {noun} you wish to convert and choose to \
             convert it to either {a} or {b}.\n\n\
             Please note that you cannot convert a value below {min_a} {a} or {min_b} {b}. \
             If you try, you will get an error message.\n\n\
             To see your calculation history and export it to a text file, use 'history' \
             and 'export'.",
            noun = noun,
            a = a,
            b = b,
            min_a = self.bounds.minimum(a),
            min_b = self.bounds.minimum(b),
        )
    }
}
