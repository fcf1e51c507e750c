use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // The handle is dropped on every return path, including a failed write.
        let mut writer = BufWriter::new(File::create(&full_path)?);
        writer.write_all(data)?;
        writer.flush()?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(full_path)
    }
}
