use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法解析配置文件 '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("配置校验失败: {message}")]
    Validation { message: String },
}

/// 应用配置 (config.toml)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub placeholder: String,
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Todo App".to_string(),
            placeholder: "Enter a new todo".to_string(),
            show_help: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 未设置时不记录日志
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// 默认配置路径 (~/.config/todo-tui/config.toml)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("todo-tui")
            .join("config.toml")
    }

    /// 加载配置。显式指定的文件必须存在，默认路径缺失时使用默认值
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.title.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "ui.title 不能为空".to_string(),
            });
        }

        if let Err(e) = EnvFilter::try_new(&self.log.level) {
            return Err(ConfigError::Validation {
                message: format!("无效的日志级别 '{}': {}", self.log.level, e),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        config.validate().unwrap();
        assert_eq!(config.ui.title, "Todo App");
        assert_eq!(config.ui.placeholder, "Enter a new todo");
        assert!(config.ui.show_help);
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[ui]\ntitle = \"Groceries\"\nshow_help = false\n\n[log]\nlevel = \"debug\"\nfile = \"/tmp/todo.log\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.ui.title, "Groceries");
        assert_eq!(config.ui.placeholder, "Enter a new todo");
        assert!(!config.ui.show_help);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/todo.log")));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[ui\ntitle = ").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[ui]\ntitle = \"  \"").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }
}
