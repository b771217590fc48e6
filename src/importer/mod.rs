pub mod source;
pub mod tema_importer;

pub use source::{FsSource, MemorySource, SourceProvider};
pub use tema_importer::TemaImporter;

/// 当前 Unix 时间戳（秒），created/modified 共用同一个值。
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
