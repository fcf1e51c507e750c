use crate::domain::model::{BoundTable, Tool};
use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Writes `data` to `path`, replacing any existing file, and returns the
    /// location written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn tool(&self) -> Tool;
    fn output_path(&self) -> &str;
    fn export_prefix(&self) -> &str;
    fn max_recent(&self) -> usize;
    fn bounds(&self) -> BoundTable;
}
