use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{self, filter::EnvFilter, fmt, prelude::*, util::SubscriberInitExt};

use crate::config::LogConfig;

const LOG_FILE_NAME: &str = "tema_import.log";

// 自定义本地时间格式
pub struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

// RUST_LOG 优先，否则使用配置中的级别
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// 初始化 tracing 日志系统。
///
/// - 控制台输出层：本地时间、文件名/行号、日志级别。
/// - 文件输出层：追加写入 `<directory>/tema_import.log`，不轮转（一次性工具）。
///
/// 返回的 `WorkerGuard` 必须在 main 中保持存活，否则文件日志可能丢失。
pub fn init_logging(log_config: &LogConfig) -> Result<WorkerGuard> {
    // 1. 准备日志目录和非阻塞文件写入器
    let log_dir = PathBuf::from(&log_config.directory);
    fs::create_dir_all(&log_dir)
        .context(format!("Failed to create log directory: {log_dir:?}"))?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&log_dir)
        .context(format!("Failed to open log file {LOG_FILE_NAME} in {log_dir:?}"))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // 2. 创建一个 fmt 层用于文件输出
    let file_layer = fmt::layer()
        .with_ansi(false) // 文件输出不需要 ANSI 颜色
        .with_writer(file_writer)
        .with_target(true)
        .with_timer(LocalTimer)
        .with_line_number(true)
        .with_file(true)
        .with_level(true)
        .with_filter(build_filter(&log_config.level));

    // 3. 创建一个 fmt 层用于控制台输出
    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .with_timer(LocalTimer)
        .with_target(false)
        .with_level(true)
        .with_filter(build_filter(&log_config.level));

    // 4. 将两个层组合起来并初始化全局订阅者
    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    Ok(guard)
}
