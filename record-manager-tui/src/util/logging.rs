//! 文件日志
//!
//! TUI 占用 stdout，日志写入数据目录下的文件。
//! 级别由 `RUST_LOG` 控制，默认 `info`。
//! store crate 使用 `log` 门面，`try_init` 会一并安装 `log` → `tracing` 桥接。

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "record-manager.log";

/// 默认日志目录：`<data_local_dir>/record-manager/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("record-manager").join("logs"))
}

/// 打开（追加）日志文件
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok((file, path))
}

/// 初始化全局日志，返回日志文件路径
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    let (file, path) = open_log_file(dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
