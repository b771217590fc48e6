use regex::Regex;
use std::sync::LazyLock;

// 只锚定开头：与旧脚本一致，".txt" 之后的内容不会导致匹配失败
static TEMA_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Tema (\d+)\. (.*)\.txt").expect("valid tema filename regex"));

/// 从文件名中解析出的编号和标题（标题尚未转义）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub numero: String,
    pub titulo: String,
}

/// 解析 `Tema <数字>. <标题>.txt` 形式的文件名，不匹配时返回 `None`。
pub fn parse_tema_filename(filename: &str) -> Option<ParsedFilename> {
    let caps = TEMA_FILENAME.captures(filename)?;
    Some(ParsedFilename {
        numero: caps[1].to_string(),
        titulo: caps[2].to_string(),
    })
}
