pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "halal-city-etl")]
#[command(about = "Enrich travel-directory cities with halal-suitability scores")]
pub struct CliConfig {
    #[arg(long, default_value = "data/cities.json")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',')]
    pub reference_overrides: Vec<String>,

    #[arg(long, default_value = "1")]
    pub workers: usize,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    #[arg(long, default_value = "travel-directory")]
    pub source: String,

    #[arg(long)]
    pub max_records: Option<usize>,

    #[arg(long, help = "Also write a ZIP bundle with this file name")]
    pub bundle: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase timings and memory usage")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn reference_overrides(&self) -> &[String] {
        &self.reference_overrides
    }

    fn workers(&self) -> usize {
        self.workers
    }

    fn source_label(&self) -> &str {
        &self.source
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    fn bundle_filename(&self) -> Option<&str> {
        self.bundle.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extensions("input", std::slice::from_ref(&self.input), &["json"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_extensions(
            "reference_overrides",
            &self.reference_overrides,
            &["json"],
        )?;
        validation::validate_positive_number("workers", self.workers, 1)?;
        validation::validate_output_formats("formats", &self.formats)?;
        validation::validate_non_empty_string("source", &self.source)?;
        if let Some(bundle) = &self.bundle {
            validation::validate_file_extensions("bundle", std::slice::from_ref(bundle), &["zip"])?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["halal-city-etl"]);
        assert_eq!(config.input, "data/cities.json");
        assert_eq!(config.workers, 1);
        assert_eq!(config.formats, vec!["json".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_lists_and_validation() {
        let config = CliConfig::parse_from([
            "halal-city-etl",
            "--input",
            "cities.json",
            "--formats",
            "json,csv,tsv",
            "--reference-overrides",
            "a.json,b.json",
            "--workers",
            "4",
        ]);
        assert_eq!(config.reference_overrides.len(), 2);
        assert_eq!(config.output_formats().len(), 3);
        assert!(config.validate().is_ok());

        let bad = CliConfig::parse_from(["halal-city-etl", "--workers", "0"]);
        assert!(bad.validate().is_err());

        let bad_input = CliConfig::parse_from(["halal-city-etl", "--input", "cities.csv"]);
        assert!(bad_input.validate().is_err());
    }
}
