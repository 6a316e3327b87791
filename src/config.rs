//! Configuration for an analysis run.
//!
//! [`AnalysisConfig`] is an explicit value passed to the components that need
//! it. It can be loaded from a JSON file or from a `.properties` file using
//! the long-standing dotted key names (see [`AnalysisConfig::from_properties`]).

pub mod properties;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::keyword::DEFAULT_WRAP_WIDTH;
use crate::error::{Result, WordscopeError};
use crate::pipeline::FanOutMode;

pub use properties::Properties;

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum length of a big word (0 admits every token).
    pub big_word_min_length: usize,

    /// Width of the longest histogram bar. Must be positive.
    pub histogram_max_width: usize,

    /// Keyword list, one keyword per line.
    #[serde(default)]
    pub keyword_file: Option<PathBuf>,

    /// Keyword positions per rendered line. Must be positive.
    #[serde(default = "default_wrap_width")]
    pub keyword_wrap_width: usize,

    /// Fail the run when the keyword list cannot be loaded.
    #[serde(default)]
    pub keywords_required: bool,

    /// How tokens are dispatched to analyzers.
    #[serde(default)]
    pub fan_out: FanOutMode,

    /// Report destinations.
    #[serde(default)]
    pub output: OutputConfig,

    /// Labels printed in the summary report.
    #[serde(default)]
    pub summary: SummaryMetadata,
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

/// Output directory and one file name per report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub summary: String,
    pub unique: String,
    pub big_words: String,
    pub token_count: String,
    pub token_size: String,
    pub keyword: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            summary: "summary.txt".to_string(),
            unique: "unique_tokens.txt".to_string(),
            big_words: "big_words.txt".to_string(),
            token_count: "token_count.txt".to_string(),
            token_size: "token_size.txt".to_string(),
            keyword: "keywords.txt".to_string(),
        }
    }
}

impl OutputConfig {
    /// File name for the report produced by the analyzer called `name`.
    pub fn file_name(&self, name: &str) -> Option<&str> {
        let file = match name {
            "summary" => &self.summary,
            "unique" => &self.unique,
            "big_words" => &self.big_words,
            "token_count" => &self.token_count,
            "token_size" => &self.token_size,
            "keyword" => &self.keyword,
            _ => return None,
        };
        Some(file.as_str())
    }

    /// Full destination path for the analyzer called `name`.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        self.file_name(name).map(|file| self.dir.join(file))
    }
}

/// Static labels for the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryMetadata {
    pub application_name: String,
    pub author: String,
    pub author_email: String,
}

impl Default for SummaryMetadata {
    fn default() -> Self {
        Self {
            application_name: env!("CARGO_PKG_NAME").to_string(),
            author: String::new(),
            author_email: String::new(),
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with the two required thresholds and defaults elsewhere.
    pub fn new(big_word_min_length: usize, histogram_max_width: usize) -> Self {
        Self {
            big_word_min_length,
            histogram_max_width,
            keyword_file: None,
            keyword_wrap_width: DEFAULT_WRAP_WIDTH,
            keywords_required: false,
            fan_out: FanOutMode::default(),
            output: OutputConfig::default(),
            summary: SummaryMetadata::default(),
        }
    }

    /// Set the keyword list file.
    pub fn with_keyword_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.keyword_file = Some(path.into());
        self
    }

    /// Set the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output.dir = dir.into();
        self
    }

    /// Set the fan-out mode.
    pub fn with_fan_out(mut self, fan_out: FanOutMode) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Load from `path`: `.json` files as JSON, anything else as properties.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            WordscopeError::config_load(format!("cannot read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_properties(&Properties::parse(&text))?
        };

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| WordscopeError::config_load(format!("invalid JSON configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Build and validate a configuration from properties.
    ///
    /// `bigwords.minimum.length` and `maximum.token.size` are required.
    pub fn from_properties(properties: &Properties) -> Result<Self> {
        let mut config = Self::new(
            properties.require("bigwords.minimum.length")?,
            properties.require("maximum.token.size")?,
        );

        config.keyword_file = properties.get("file.path.keywords").map(PathBuf::from);
        if let Some(width) = properties.parse_value::<usize>("keyword.wrap.width")? {
            config.keyword_wrap_width = width;
        }
        if let Some(required) = properties.parse_value::<bool>("keywords.required")? {
            config.keywords_required = required;
        }
        if let Some(parallel) = properties.parse_value::<bool>("analysis.parallel")? {
            config.fan_out = if parallel {
                FanOutMode::Parallel
            } else {
                FanOutMode::Sequential
            };
        }

        let output = &mut config.output;
        if let Some(dir) = properties.get("output.dir") {
            output.dir = PathBuf::from(dir);
        }
        for (key, slot) in [
            ("output.file.summary", &mut output.summary),
            ("output.file.unique", &mut output.unique),
            ("output.file.bigwords", &mut output.big_words),
            ("output.file.token.count", &mut output.token_count),
            ("output.file.token.size", &mut output.token_size),
            ("output.file.keyword", &mut output.keyword),
        ] {
            if let Some(file) = properties.get(key) {
                *slot = file.to_string();
            }
        }

        let summary = &mut config.summary;
        for (key, slot) in [
            ("application.name", &mut summary.application_name),
            ("author", &mut summary.author),
            ("author.email.address", &mut summary.author_email),
        ] {
            if let Some(value) = properties.get(key) {
                *slot = value.to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the analyzers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.histogram_max_width == 0 {
            return Err(WordscopeError::config_load(
                "histogram maximum width must be positive",
            ));
        }
        if self.keyword_wrap_width == 0 {
            return Err(WordscopeError::config_load(
                "keyword wrap width must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::Builder;

    const PROPERTIES: &str = "\
application.name=Analyzer
author=Ada Lovelace
author.email.address=ada@example.com
bigwords.minimum.length=14
maximum.token.size=80
file.path.keywords=config/keywords.txt
output.dir=output
output.file.summary=summary.txt
output.file.unique=unique_tokens.txt
output.file.bigwords=big_words.txt
output.file.token.count=token_count.txt
output.file.token.size=token_size.txt
output.file.keyword=keywords.txt
";

    #[test]
    fn test_from_properties() {
        let config = AnalysisConfig::from_properties(&Properties::parse(PROPERTIES)).unwrap();
        assert_eq!(config.big_word_min_length, 14);
        assert_eq!(config.histogram_max_width, 80);
        assert_eq!(
            config.keyword_file,
            Some(PathBuf::from("config/keywords.txt"))
        );
        assert_eq!(config.keyword_wrap_width, DEFAULT_WRAP_WIDTH);
        assert_eq!(config.fan_out, FanOutMode::Sequential);
        assert_eq!(config.summary.author, "Ada Lovelace");
        assert_eq!(config.summary.author_email, "ada@example.com");
        assert_eq!(
            config.output.path_for("token_size"),
            Some(PathBuf::from("output/token_size.txt"))
        );
        assert_eq!(config.output.path_for("nonexistent"), None);
    }

    #[test]
    fn test_missing_threshold() {
        let result = AnalysisConfig::from_properties(&Properties::parse("maximum.token.size=80"));
        assert!(matches!(result, Err(WordscopeError::ConfigLoad(_))));
    }

    #[test]
    fn test_non_numeric_threshold() {
        let text = "bigwords.minimum.length=fourteen\nmaximum.token.size=80";
        let result = AnalysisConfig::from_properties(&Properties::parse(text));
        assert!(matches!(result, Err(WordscopeError::ConfigLoad(_))));
    }

    #[test]
    fn test_zero_width_rejected() {
        let text = "bigwords.minimum.length=3\nmaximum.token.size=0";
        let result = AnalysisConfig::from_properties(&Properties::parse(text));
        assert!(matches!(result, Err(WordscopeError::ConfigLoad(_))));

        let mut config = AnalysisConfig::new(3, 10);
        config.keyword_wrap_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_optional_properties() {
        let text = "bigwords.minimum.length=0\nmaximum.token.size=5\n\
                    keyword.wrap.width=3\nkeywords.required=true\nanalysis.parallel=true";
        let config = AnalysisConfig::from_properties(&Properties::parse(text)).unwrap();
        assert_eq!(config.big_word_min_length, 0);
        assert_eq!(config.keyword_wrap_width, 3);
        assert!(config.keywords_required);
        assert_eq!(config.fan_out, FanOutMode::Parallel);
        assert_eq!(config.keyword_file, None);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "big_word_min_length": 6,
            "histogram_max_width": 40,
            "keyword_file": "keywords.txt",
            "fan_out": "parallel",
            "output": { "dir": "reports" },
            "summary": { "author": "Ada" }
        }"#;
        let config = AnalysisConfig::from_json_str(json).unwrap();
        assert_eq!(config.big_word_min_length, 6);
        assert_eq!(config.histogram_max_width, 40);
        assert_eq!(config.fan_out, FanOutMode::Parallel);
        assert_eq!(config.output.dir, PathBuf::from("reports"));
        assert_eq!(config.output.summary, "summary.txt");
        assert_eq!(config.summary.author, "Ada");
        assert_eq!(config.summary.application_name, "wordscope");
    }

    #[test]
    fn test_json_malformed_threshold() {
        let json = r#"{ "big_word_min_length": "six", "histogram_max_width": 40 }"#;
        assert!(matches!(
            AnalysisConfig::from_json_str(json),
            Err(WordscopeError::ConfigLoad(_))
        ));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let mut json = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"big_word_min_length": 2, "histogram_max_width": 9}}"#).unwrap();
        assert_eq!(AnalysisConfig::load(json.path()).unwrap().histogram_max_width, 9);

        let mut props = Builder::new().suffix(".properties").tempfile().unwrap();
        write!(props, "{PROPERTIES}").unwrap();
        assert_eq!(AnalysisConfig::load(props.path()).unwrap().big_word_min_length, 14);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AnalysisConfig::load("/nonexistent/analyzer.properties"),
            Err(WordscopeError::ConfigLoad(_))
        ));
    }
}
