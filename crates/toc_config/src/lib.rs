use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file used when none is specified on the command line.
///
/// Linux: ~/.config/mdtoc/config.toml
/// macOS: ~/Library/Application\ Support/org.mdtoc.mdtoc/config.toml
/// Windows: ~\AppData\Roaming\mdtoc\mdtoc\config\config.toml
pub fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("org", "mdtoc", "mdtoc").map(|dirs| dirs.config_dir().join("config.toml"))
}

pub struct LoadedConfig {
    pub config: Config,
    /// `None` if no config location could be determined at all.
    pub file_path: Option<PathBuf>,
    /// Present if the file exists but is not valid, `config` is the default then.
    pub maybe_error: Option<toml::de::Error>,
}

/// Loads the config from `specified_config_file` or the default location.
///
/// A missing or unreadable file silently yields the default config.
pub fn load_config(specified_config_file: Option<PathBuf>) -> LoadedConfig {
    let file_path = specified_config_file.or_else(default_config_file);

    let mut maybe_error = None;
    let config: Config = file_path
        .as_ref()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|contents| {
            toml::from_str(&contents)
                .map_err(|err| {
                    maybe_error.replace(err);
                })
                .ok()
        })
        .unwrap_or_default();

    LoadedConfig {
        config,
        file_path,
        maybe_error,
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogConfig {
    /// Specify the log file path.
    ///
    /// Logging is disabled unless a log file is given here, via `--log`
    /// or the `MDTOC_LOG_PATH` environment variable.
    pub log_file: Option<String>,

    /// Specify the max log level.
    pub max_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            max_level: "debug".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Log config.
    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
          [log]
          log-file = "/tmp/mdtoc.log"
          max-level = "trace"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config,
            Config {
                log: LogConfig {
                    log_file: Some("/tmp/mdtoc.log".into()),
                    max_level: "trace".into(),
                }
            }
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.max_level, "debug");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("[output]\nbullet = \"*\"").is_err());
        assert!(toml::from_str::<Config>("[log]\nlevel = \"info\"").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let file = config_file("[log]\nmax-level = \"info\"\n");
        let loaded = load_config(Some(file.path().to_path_buf()));
        assert!(loaded.maybe_error.is_none());
        assert_eq!(loaded.file_path.as_deref(), Some(file.path()));
        assert_eq!(loaded.config.log.max_level, "info");
        assert_eq!(loaded.config.log.log_file, None);
    }

    #[test]
    fn test_load_invalid_config_falls_back_to_default() {
        let file = config_file("[log\nmax-level = ");
        let loaded = load_config(Some(file.path().to_path_buf()));
        assert!(loaded.maybe_error.is_some());
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(dir.path().join("missing.toml")));
        assert!(loaded.maybe_error.is_none());
        assert_eq!(loaded.config, Config::default());
    }
}
