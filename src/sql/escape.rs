/// 把单引号加倍，用于标题。
pub fn escape_quotes(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// 把单引号加倍，并把换行替换成两个字符 `\n`，使结果能放进单行 SQL 字符串字面量。
///
/// 不处理反斜杠、NUL 或其他控制字符。
pub fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\'' => escaped.push_str("''"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_quotes_and_flattens_newlines() {
        assert_eq!(escape_text("Hello's\nWorld"), "Hello''s\\nWorld");
        assert!(!escape_text("a\nb\nc").contains('\n'));
    }

    #[test]
    fn already_doubled_quotes_are_doubled_again() {
        assert_eq!(escape_text("''"), "''''");
        assert_eq!(escape_quotes("''"), "''''");
    }

    #[test]
    fn backslashes_pass_through() {
        assert_eq!(escape_text(r"C:\temas"), r"C:\temas");
    }

    #[test]
    fn title_escaping_keeps_newlines() {
        assert_eq!(escape_quotes("L'Estat\n"), "L''Estat\n");
    }
}
