use std::io;
use std::path::PathBuf;

// 导入过程中不可恢复的错误。跳过的条目不属于错误，见 ImportOutcome
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("无法创建输出文件 {path:?}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("读取源文件失败 {path:?}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("写入 SQL 失败: {0}")]
    Write(#[from] io::Error),
}
