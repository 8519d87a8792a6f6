use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// 顶层错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("无法创建日志文件 '{path}': {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("终端错误: {0}")]
    Io(#[from] io::Error),
}
