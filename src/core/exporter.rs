use crate::domain::model::{CalculationRecord, Tool};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Writes the whole history to `<prefix>_YYYY_MM_DD.txt`.
pub struct HistoryExporter<S: Storage> {
    storage: S,
    tool: Tool,
}

impl<S: Storage> HistoryExporter<S> {
    pub fn new(storage: S, tool: Tool) -> Self {
        Self { storage, tool }
    }

    pub fn file_stem(export_date: NaiveDate, prefix: &str) -> String {
        format!("{}_{}", prefix, export_date.format("%Y_%m_%d"))
    }

    pub fn file_name(export_date: NaiveDate, prefix: &str) -> String {
        format!("{}.txt", Self::file_stem(export_date, prefix))
    }

    pub fn render(&self, records: &[CalculationRecord], export_date: NaiveDate) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "***** {} Calculations ******", self.tool.heading());
        let _ = writeln!(out, "Generated: {}", export_date.format("%d/%m/%Y"));
        out.push('\n');
        out.push_str("Here is your calculation history (oldest to newest)...\n");
        for record in records {
            let _ = writeln!(out, "{}", record);
        }
        out
    }

    /// Existing files with the same name are replaced.
    pub fn export(
        &self,
        records: &[CalculationRecord],
        export_date: NaiveDate,
        prefix: &str,
    ) -> Result<PathBuf> {
        let file_name = Self::file_name(export_date, prefix);
        let content = self.render(records, export_date);

        tracing::debug!(
            "Exporting {} records ({} bytes) to {}",
            records.len(),
            content.len(),
            file_name
        );

        self.storage.write_file(&file_name, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Unit;
    use crate::utils::error::ConverterError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for &MemoryStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(PathBuf::from(path))
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn write_file(&self, _path: &str, _data: &[u8]) -> Result<PathBuf> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_file_name_is_zero_padded() {
        assert_eq!(
            HistoryExporter::<FailingStorage>::file_name(date(), "weights"),
            "weights_2024_03_07.txt"
        );
    }

    #[test]
    fn test_export_writes_exact_content() {
        let storage = MemoryStorage::default();
        let exporter = HistoryExporter::new(&storage, Tool::Weight);
        let records = vec![
            CalculationRecord::new(12.0, Unit::Grams, 0.4, Unit::Ounces),
            CalculationRecord::new(1.0, Unit::Ounces, 28.4, Unit::Grams),
        ];

        let path = exporter.export(&records, date(), "weights").unwrap();
        assert_eq!(path, PathBuf::from("weights_2024_03_07.txt"));

        let files = storage.files.borrow();
        let content = String::from_utf8(files["weights_2024_03_07.txt"].clone()).unwrap();
        assert_eq!(
            content,
            "***** Weight Calculations ******\n\
             Generated: 07/03/2024\n\
             \n\
             Here is your calculation history (oldest to newest)...\n\
             12.0G is 0.4Oz\n\
             1.0Oz is 28.4G\n"
        );
    }

    #[test]
    fn test_temperature_header() {
        let exporter = HistoryExporter::new(FailingStorage, Tool::Temperature);
        let text = exporter.render(&[], date());
        assert!(text.starts_with("***** Temperature Calculations ******\n"));
    }

    #[test]
    fn test_storage_failure_is_surfaced() {
        let exporter = HistoryExporter::new(FailingStorage, Tool::Weight);
        let err = exporter.export(&[], date(), "weights").unwrap_err();
        assert!(matches!(err, ConverterError::IoError(_)));
    }
}
