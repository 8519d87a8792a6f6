use std::fs::File;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

/// 初始化日志，只写入文件以免破坏 TUI 画面。
///
/// 未配置日志文件时直接跳过；`RUST_LOG` 优先于配置中的级别。
pub fn init_tracing(file: Option<&Path>, level: &str) -> Result<(), AppError> {
    let Some(path) = file else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::Log {
        path: path.to_path_buf(),
        source,
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(())
}
