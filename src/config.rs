use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::{CheckerError, CheckerResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckerConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    #[serde(default = "default_first_file_number")]
    pub first_file_number: usize,

    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    #[serde(default = "default_true")]
    pub progress: bool,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            input_extension: default_input_extension(),
            first_file_number: default_first_file_number(),
            output_file: default_output_file(),
            progress: default_true(),
            report: ReportConfig::default(),
        }
    }
}

impl CheckerConfig {
    /// Path of the `number`-th input file.
    pub fn input_path(&self, number: usize) -> PathBuf {
        self.input_dir.join(format!("{}.{}", number, self.input_extension))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Append the lexer's token log to every sentence
    #[serde(default)]
    pub show_lexer_output: bool,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> CheckerResult<T> {
    let file = File::open(path.as_ref()).map_err(|e| {
        CheckerError::Config(format!(
            "Failed to open config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| CheckerError::Config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> CheckerResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| CheckerError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_input_extension() -> String {
    "txt".to_string()
}
fn default_first_file_number() -> usize {
    1
}
fn default_output_file() -> PathBuf {
    PathBuf::from("parser_output.txt")
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: CheckerConfig = from_str("{}").unwrap();
        assert_eq!(config, CheckerConfig::default());
        assert_eq!(config.output_file, PathBuf::from("parser_output.txt"));
        assert_eq!(config.report.format, ReportFormat::Text);
        assert!(config.progress);
    }

    #[test]
    fn test_partial_override() {
        let config: CheckerConfig = from_str(
            r#"{
                "input_dir": "samples",
                "first_file_number": 3,
                "report": { "format": "json", "show_lexer_output": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.input_path(3), PathBuf::from("samples").join("3.txt"));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert!(config.report.show_lexer_output);
        assert_eq!(config.input_extension, "txt");
    }

    #[test]
    fn test_invalid_json() {
        let result: CheckerResult<CheckerConfig> = from_str("{ not json");
        assert!(matches!(result, Err(CheckerError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "progress": false }}"#).unwrap();
        let config: CheckerConfig = from_file(file.path()).unwrap();
        assert!(!config.progress);

        let missing: CheckerResult<CheckerConfig> = from_file("/definitely/not/here.json");
        assert!(missing.is_err());
    }

    #[test]
    fn test_report_format_names() {
        assert_eq!(ReportFormat::from_str("json").unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::Text.to_string(), "text");
    }
}
