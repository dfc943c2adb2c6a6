use crate::error::{LexgrepError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_DICT: &str = "/usr/share/dict/words";
pub const DEFAULT_SEARCH_URL: &str = "https://www.dictionary.com/browse/%s";

/// The token in a search URL template that gets replaced by the matched word.
pub const URL_TOKEN: &str = "%s";

/// Configuration for lexgrep, stored in config.json under the platform
/// config directory (or `LEXGREP_CONFIG_DIR` when set).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexgrepConfig {
    /// Word list to search (one word per line)
    #[serde(default = "default_dict")]
    pub dict: PathBuf,

    /// Online dictionary URL template; "%s" is replaced by the matched word.
    /// An empty string disables embedded links.
    #[serde(default = "default_search")]
    pub search: String,
}

fn default_dict() -> PathBuf {
    PathBuf::from(DEFAULT_DICT)
}

fn default_search() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

impl Default for LexgrepConfig {
    fn default() -> Self {
        Self {
            dict: default_dict(),
            search: default_search(),
        }
    }
}

impl LexgrepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LexgrepError::Io)?;
        let config: LexgrepConfig =
            serde_json::from_str(&content).map_err(LexgrepError::Serialization)?;
        Ok(config)
    }
}

/// Resolve the config directory: `LEXGREP_CONFIG_DIR` wins, otherwise the
/// platform config dir. `None` when neither can be determined.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var("LEXGREP_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "lexgrep", "lexgrep").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the config from the resolved directory, falling back to defaults
/// when the directory is unknown or the file is unreadable.
pub fn load_or_default() -> LexgrepConfig {
    match config_dir() {
        Some(dir) => LexgrepConfig::load(dir).unwrap_or_default(),
        None => LexgrepConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexgrepConfig::default();
        assert_eq!(config.dict, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(config.search, "https://www.dictionary.com/browse/%s");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = LexgrepConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, LexgrepConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"dict": "/tmp/words"}"#,
        )
        .unwrap();

        let config = LexgrepConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.dict, PathBuf::from("/tmp/words"));
        assert_eq!(config.search, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"dict": "/tmp/words", "search": ""}"#,
        )
        .unwrap();

        let config = LexgrepConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.dict, PathBuf::from("/tmp/words"));
        assert_eq!(config.search, "");
    }

    #[test]
    fn test_load_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(LexgrepConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = LexgrepConfig {
            dict: PathBuf::from("/opt/words"),
            search: "https://example.com/%s".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: LexgrepConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
