use anyhow::{Context, Result};
use tema_import::{
    AppConfig, FsSource, TemaImporter,
    importer::current_timestamp,
    logging,
};
use tracing::info;

fn main() -> Result<()> {
    // 1. 加载配置（配置文件可选，缺省值即旧脚本中的常量）
    let app_config = AppConfig::new().context("Failed to load application configuration")?;

    // 2. 初始化日志系统，guard 需要活到 main 结束
    let _log_guard = logging::init_logging(&app_config.log).context("Failed to initialize logging")?;
    info!("Configuration loaded: {app_config:?}");

    // 3. 生成 SQL
    let importer = TemaImporter::new(app_config.import.clone(), app_config.row.clone(), FsSource);
    let timestamp = current_timestamp();
    let report = importer
        .run_to_file(timestamp)
        .context(format!("Failed to generate {}", app_config.import.output_path))?;

    // 4. 输出汇总
    info!(
        "Finished: {} imported, {} already imported, {} malformed, {} missing",
        report.imported, report.skipped_duplicate, report.skipped_malformed, report.skipped_missing
    );
    info!(
        "Report: {}",
        serde_json::to_string(&report).context("Failed to serialize import report")?
    );

    Ok(())
}
