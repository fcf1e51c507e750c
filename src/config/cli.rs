use crate::config::toml_config::{TomlConfig, DEFAULT_MAX_RECENT, DEFAULT_OUTPUT_PATH};
use crate::domain::model::{BoundTable, Tool};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-converter")]
#[command(about = "Weight and temperature converter with calculation history export")]
pub struct CliConfig {
    /// Which converter to run
    #[arg(long, value_enum)]
    pub tool: Option<Tool>,

    /// Directory the history export is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// File name prefix for exports (defaults to "weights" or "temps")
    #[arg(long)]
    pub prefix: Option<String>,

    /// How many calculations the history view shows
    #[arg(long)]
    pub max_recent: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub bounds: Option<BoundTable>,
}

impl CliConfig {
    /// Fills every setting not given on the command line from `file`.
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        self.tool = self.tool.or(Some(file.tool()));
        self.output_path = self
            .output_path
            .or_else(|| Some(file.output_path().to_string()));
        if self.prefix.is_none() && self.tool == Some(file.tool()) {
            self.prefix = Some(file.export_prefix().to_string());
        }
        self.max_recent = self.max_recent.or(Some(file.max_recent()));
        self.bounds = Some(file.bounds());
        self
    }
}

impl ConfigProvider for CliConfig {
    fn tool(&self) -> Tool {
        self.tool.unwrap_or(Tool::Weight)
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn export_prefix(&self) -> &str {
        self.prefix
            .as_deref()
            .unwrap_or(self.tool().default_export_prefix())
    }

    fn max_recent(&self) -> usize {
        self.max_recent.unwrap_or(DEFAULT_MAX_RECENT)
    }

    fn bounds(&self) -> BoundTable {
        self.bounds.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", self.output_path())?;
        validation::validate_non_empty_string("prefix", self.export_prefix())?;
        validation::validate_positive_number("max_recent", self.max_recent(), 1)?;
        for bound in self.bounds().all() {
            let field = format!("bounds.{}", bound.unit.name().to_lowercase());
            validation::validate_finite(&field, bound.minimum)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["small-converter"]);
        assert_eq!(config.tool(), Tool::Weight);
        assert_eq!(config.export_prefix(), "weights");
        assert_eq!(config.output_path(), ".");
        assert_eq!(config.max_recent(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefix_follows_tool() {
        let config = CliConfig::parse_from(["small-converter", "--tool", "temperature"]);
        assert_eq!(config.export_prefix(), "temps");
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[converter]
tool = "weight"
max_recent = 8

[export]
output_path = "./from-file"
prefix = "file"

[bounds]
ounces = 2.0
"#,
        )
        .unwrap();

        let config = CliConfig::parse_from(["small-converter", "--max-recent", "3"]).merge_file(&file);
        assert_eq!(config.max_recent(), 3);
        assert_eq!(config.output_path(), "./from-file");
        assert_eq!(config.export_prefix(), "file");
        assert_eq!(config.bounds().minimum(crate::domain::model::Unit::Ounces), 2.0);
    }

    #[test]
    fn test_file_prefix_ignored_when_tool_overridden() {
        let file = TomlConfig::from_toml_str(
            r#"
[converter]
tool = "weight"

[export]
prefix = "kitchen"
"#,
        )
        .unwrap();

        let config =
            CliConfig::parse_from(["small-converter", "--tool", "temperature"]).merge_file(&file);
        assert_eq!(config.export_prefix(), "temps");
    }

    #[test]
    fn test_nan_bound_from_file_is_rejected() {
        let file = TomlConfig::from_toml_str(
            r#"
[converter]
tool = "weight"

[bounds]
grams = nan
"#,
        )
        .unwrap();
        assert!(file.validate().is_err());

        let config = CliConfig::parse_from(["small-converter"]).merge_file(&file);
        let err = config.validate().unwrap_err();
        match err {
            crate::utils::error::ConverterError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "bounds.grams")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_max_recent_is_invalid() {
        let config = CliConfig::parse_from(["small-converter", "--max-recent", "0"]);
        assert!(config.validate().is_err());
    }
}
