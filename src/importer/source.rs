use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 读取源文本的抽象，测试中可以用内存实现代替文件系统。
pub trait SourceProvider {
    /// 文件不存在时返回 `Ok(None)`，其余 I/O 错误向上传播。
    fn read_source(&self, path: &Path) -> io::Result<Option<String>>;
}

/// 读取真实文件系统，并把 `\r\n` 和单独的 `\r` 统一成 `\n`。
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl SourceProvider for FsSource {
    fn read_source(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(normalize_newlines(&text))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// 内存中的源文件集合，键为完整路径。
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl SourceProvider for MemorySource {
    fn read_source(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
