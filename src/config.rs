use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub row: RowDefaults,
    #[serde(default)]
    pub log: LogConfig,
}

/// 导入来源与输出位置。默认值即历史脚本中写死的常量。
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    pub source_directory: String,
    pub output_path: String,
    // 只处理这里列出的文件，目录本身不会被扫描
    pub filenames: Vec<String>,
    // 已导入的标题（引号已转义后的形式）
    pub exclusion_list: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source_directory: "temas/bloque3".to_string(),
            output_path: "sql/insert_temas_bloque3.sql".to_string(),
            filenames: vec!["Tema 7. Ley 39_2015. Procedimiento Administrativo Común.txt".to_string()],
            exclusion_list: vec!["Ley 40_2015. Régimen Jurídico del Sector Público".to_string()],
        }
    }
}

/// 每一行 INSERT 中的固定字段。
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RowDefaults {
    pub bloque: i64,
    pub nivel_dificultad: i64,
    pub posicion_x: i64,
    pub posicion_y: i64,
    pub posicion_z: i64,
    pub color: String,
}

impl Default for RowDefaults {
    fn default() -> Self {
        Self {
            bloque: 3,
            nivel_dificultad: 1,
            posicion_x: 0,
            posicion_y: 0,
            posicion_z: 0,
            color: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub directory: String,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config/default")
    }

    /// 从指定文件（可不存在）加载配置，环境变量优先级更高。
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        Self::from_sources(name, Self::environment())
    }

    // 允许环境变量覆盖 (例如: APP__IMPORT__OUTPUT_PATH)，列表项用逗号分隔 (例如: APP__IMPORT__FILENAMES)
    fn environment() -> config::Environment {
        config::Environment::with_prefix("APP")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("import.filenames")
            .with_list_parse_key("import.exclusion_list")
            .try_parsing(true)
    }

    fn from_sources(name: &str, environment: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(name).required(false)) // 例如 config/default.toml
            .add_source(environment);

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_historical_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.row.bloque, 3);
        assert_eq!(cfg.row.nivel_dificultad, 1);
        assert_eq!(cfg.row.color, "#FFFFFF");
        assert_eq!(cfg.import.filenames.len(), 1);
        assert!(
            cfg.import
                .exclusion_list
                .iter()
                .any(|t| t == "Ley 40_2015. Régimen Jurídico del Sector Público")
        );
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let cfg = AppConfig::from_file("config/does-not-exist").expect("defaults should load");
        assert_eq!(cfg.import.source_directory, "temas/bloque3");
        assert_eq!(cfg.log.level, "info");
    }

    // 用显式的变量表代替进程环境，避免测试之间互相干扰
    fn load_with_env(vars: &[(&str, &str)]) -> Result<AppConfig, config::ConfigError> {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_sources(
            "config/does-not-exist",
            AppConfig::environment().source(Some(source)),
        )
    }

    #[test]
    fn env_overrides_filename_list() {
        let cfg = load_with_env(&[("APP__IMPORT__FILENAMES", "Tema 1. A.txt,Tema 2. B.txt")])
            .expect("list override should load");
        assert_eq!(cfg.import.filenames, vec!["Tema 1. A.txt", "Tema 2. B.txt"]);
    }

    #[test]
    fn env_overrides_single_entry_lists() {
        let cfg = load_with_env(&[
            ("APP__IMPORT__FILENAMES", "Tema 1. A.txt"),
            ("APP__IMPORT__EXCLUSION_LIST", "L''Estat"),
        ])
        .expect("single-entry lists should load");
        assert_eq!(cfg.import.filenames, vec!["Tema 1. A.txt"]);
        assert_eq!(cfg.import.exclusion_list, vec!["L''Estat"]);
    }

    #[test]
    fn env_overrides_scalars() {
        let cfg = load_with_env(&[
            ("APP__IMPORT__OUTPUT_PATH", "x/out.sql"),
            ("APP__ROW__BLOQUE", "5"),
        ])
        .expect("scalar overrides should load");
        assert_eq!(cfg.import.output_path, "x/out.sql");
        assert_eq!(cfg.row.bloque, 5);
        assert_eq!(cfg.import.filenames.len(), 1);
    }
}
