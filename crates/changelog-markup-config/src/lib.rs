use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid changelog entry pattern '{pattern}': {source}")]
    InvalidEntryPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to list changelog entries in {changelog_path}: {source}")]
    EntryListError {
        changelog_path: PathBuf,
        source: glob::GlobError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one source file per changelog entry.
    pub changelog_path: PathBuf,
    /// Glob, relative to `changelog_path`, selecting entry files.
    #[serde(default = "default_entry_pattern")]
    pub entry_pattern: String,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// How hosts clip preview-mode output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Rendered lines shown before the preview is cut off.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
        }
    }
}

fn default_entry_pattern() -> String {
    "*.md".to_string()
}

fn default_max_lines() -> usize {
    6
}

impl Config {
    pub fn new(changelog_path: impl Into<PathBuf>) -> Self {
        Self {
            changelog_path: changelog_path.into(),
            entry_pattern: default_entry_pattern(),
            preview: PreviewConfig::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded changelog path
        config.changelog_path =
            Self::expand_path(&config.changelog_path).unwrap_or(config.changelog_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/changelog-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Entry files matching `entry_pattern` inside `changelog_path`, sorted.
    pub fn entry_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let base = glob::Pattern::escape(&self.changelog_path.to_string_lossy());
        let pattern = Path::new(&base)
            .join(&self.entry_pattern)
            .to_string_lossy()
            .into_owned();

        let paths = glob::glob(&pattern).map_err(|source| ConfigError::InvalidEntryPattern {
            pattern: self.entry_pattern.clone(),
            source,
        })?;

        let mut entries = paths
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::EntryListError {
                changelog_path: self.changelog_path.clone(),
                source,
            })?;
        entries.retain(|p| p.is_file());
        entries.sort();
        log::debug!("found {} changelog entries with {pattern}", entries.len());
        Ok(entries)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/changelog-markup/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            changelog_path: PathBuf::from("/tmp/changelog"),
            entry_pattern: "**/*.changelog".to_string(),
            preview: PreviewConfig { max_lines: 3 },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let config: Config = toml::from_str(r#"changelog_path = "/srv/changelog""#).unwrap();

        assert_eq!(config.entry_pattern, "*.md");
        assert_eq!(config.preview.max_lines, 6);
    }

    #[test]
    fn test_partial_preview_table() {
        let config: Config = toml::from_str(
            r#"
changelog_path = "/srv/changelog"

[preview]
"#,
        )
        .unwrap();

        assert_eq!(config.preview, PreviewConfig::default());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("CHANGELOG_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$CHANGELOG_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("CHANGELOG_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "changelog_path = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config::new("/tmp/changelog");

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_entry_paths_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("b.md"), "# B").unwrap();
        std::fs::write(root.join("a.md"), "# A").unwrap();
        std::fs::write(root.join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(root.join("dir.md")).unwrap();

        let entries = Config::new(root).entry_paths().unwrap();

        assert_eq!(entries, vec![root.join("a.md"), root.join("b.md")]);
    }

    #[test]
    fn test_entry_paths_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("2024-01.changelog"), "").unwrap();
        std::fs::write(root.join("readme.md"), "").unwrap();

        let mut config = Config::new(root);
        config.entry_pattern = "*.changelog".to_string();

        assert_eq!(
            config.entry_paths().unwrap(),
            vec![root.join("2024-01.changelog")]
        );
    }

    #[test]
    fn test_entry_paths_invalid_pattern() {
        let mut config = Config::new("/tmp");
        config.entry_pattern = "[".to_string();

        let err = config.entry_paths().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidEntryPattern { .. }));
    }
}
