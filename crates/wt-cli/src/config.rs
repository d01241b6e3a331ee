//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One rendered sentence per workout.
    #[default]
    Text,
    /// One JSON object per workout.
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub format: OutputFormat,

    /// Abort a batch at the first package that cannot be dispatched.
    pub fail_fast: bool,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WT_*)
        figment = figment.merge(Env::prefixed("WT_"));

        figment.extract()
    }

    /// Output format after applying a `--json` flag.
    pub const fn output_format(&self, json: bool) -> OutputFormat {
        if json { OutputFormat::Json } else { self.format }
    }
}

/// Returns the platform-specific config directory for wt.
///
/// On Linux: `~/.config/wt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_text_and_lenient() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_dirs_config_path_ends_with_wt() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "wt");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "format = \"json\"\nfail_fast = true\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_load_from_rejects_unknown_format() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "format = \"yaml\"\n").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let config = Config::default();
        assert_eq!(config.output_format(true), OutputFormat::Json);
        assert_eq!(config.output_format(false), OutputFormat::Text);
    }
}
