use crate::domain::model::{BoundTable, Tool, UnitBound};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ConverterError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_RECENT: usize = 5;
pub const DEFAULT_OUTPUT_PATH: &str = ".";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub converter: ConverterConfig,
    pub export: Option<ExportConfig>,
    pub bounds: Option<BoundsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub tool: Tool,
    pub max_recent: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: Option<String>,
    pub prefix: Option<String>,
}

/// Lower bound overrides; units left out keep their physical limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub grams: Option<f64>,
    pub ounces: Option<f64>,
    pub celsius: Option<f64>,
    pub fahrenheit: Option<f64>,
}

impl BoundsConfig {
    pub fn apply(&self, mut table: BoundTable) -> BoundTable {
        if let Some(min) = self.grams {
            table.grams = UnitBound::new(table.grams.unit, min);
        }
        if let Some(min) = self.ounces {
            table.ounces = UnitBound::new(table.ounces.unit, min);
        }
        if let Some(min) = self.celsius {
            table.celsius = UnitBound::new(table.celsius.unit, min);
        }
        if let Some(min) = self.fahrenheit {
            table.fahrenheit = UnitBound::new(table.fahrenheit.unit, min);
        }
        table
    }

    fn entries(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("bounds.grams", self.grams),
            ("bounds.ounces", self.ounces),
            ("bounds.celsius", self.celsius),
            ("bounds.fahrenheit", self.fahrenheit),
        ]
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConverterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConverterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConverterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("export.output_path", self.output_path())?;
        validation::validate_non_empty_string("export.prefix", self.export_prefix())?;
        validation::validate_positive_number("converter.max_recent", self.max_recent(), 1)?;

        if let Some(bounds) = &self.bounds {
            for (field, value) in bounds.entries() {
                if let Some(value) = value {
                    validation::validate_finite(field, value)?;
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn tool(&self) -> Tool {
        self.converter.tool
    }

    fn output_path(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|e| e.output_path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn export_prefix(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|e| e.prefix.as_deref())
            .unwrap_or(self.converter.tool.default_export_prefix())
    }

    fn max_recent(&self) -> usize {
        self.converter.max_recent.unwrap_or(DEFAULT_MAX_RECENT)
    }

    fn bounds(&self) -> BoundTable {
        match &self.bounds {
            Some(overrides) => overrides.apply(BoundTable::default()),
            None => BoundTable::default(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Unit;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[converter]
tool = "temperature"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.tool(), Tool::Temperature);
        assert_eq!(config.export_prefix(), "temps");
        assert_eq!(config.output_path(), ".");
        assert_eq!(config.max_recent(), 5);
        assert_eq!(config.bounds(), BoundTable::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[converter]
tool = "weight"
max_recent = 3

[export]
output_path = "./exports"
prefix = "kitchen"

[bounds]
grams = 1.5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.tool(), Tool::Weight);
        assert_eq!(config.max_recent(), 3);
        assert_eq!(config.output_path(), "./exports");
        assert_eq!(config.export_prefix(), "kitchen");
        assert_eq!(config.bounds().minimum(Unit::Grams), 1.5);
        assert_eq!(config.bounds().minimum(Unit::Ounces), 0.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_CONVERTER_TEST_OUT", "/tmp/converter-out");

        let toml_content = r#"
[converter]
tool = "weight"

[export]
output_path = "${SMALL_CONVERTER_TEST_OUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/converter-out");

        std::env::remove_var("SMALL_CONVERTER_TEST_OUT");
    }

    #[test]
    fn test_unknown_tool_is_rejected() {
        let toml_content = r#"
[converter]
tool = "volume"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, ConverterError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[converter]
tool = "weight"
max_recent = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[converter]
tool = "weight"

[export]
prefix = "   "
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[converter]
tool = "temperature"
max_recent = 10
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.max_recent(), 10);
    }
}
