use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{ImportConfig, RowDefaults};
use crate::importer::source::SourceProvider;
use crate::models::{ImportOutcome, ImportReport, TemaRow};
use crate::parsers::parse_tema_filename;
use crate::sql::{escape_quotes, escape_text, write_insert};
use crate::utils::ImportError;

pub struct TemaImporter<S: SourceProvider> {
    import_config: ImportConfig,
    row_defaults: RowDefaults,
    source: S,
}

impl<S: SourceProvider> TemaImporter<S> {
    pub fn new(import_config: ImportConfig, row_defaults: RowDefaults, source: S) -> Self {
        TemaImporter {
            import_config,
            row_defaults,
            source,
        }
    }

    pub fn source_path(&self, filename: &str) -> PathBuf {
        Path::new(&self.import_config.source_directory).join(filename)
    }

    /// 处理单个文件名。顺序与旧脚本一致：先读文件，再解析文件名，最后检查排除列表。
    pub fn import_entry(
        &self,
        filename: &str,
        timestamp: i64,
    ) -> Result<ImportOutcome, ImportError> {
        let path = self.source_path(filename);

        let raw = self
            .source
            .read_source(&path)
            .map_err(|source| ImportError::SourceRead {
                path: path.clone(),
                source,
            })?;
        let Some(raw) = raw else {
            warn!("Source file not found, skipping: {path:?}");
            return Ok(ImportOutcome::SkippedMissing { path });
        };
        let descripcion = escape_text(&raw);

        let Some(parsed) = parse_tema_filename(filename) else {
            warn!("Filename does not match 'Tema <n>. <title>.txt', skipping: {filename}");
            return Ok(ImportOutcome::SkippedMalformed {
                filename: filename.to_string(),
            });
        };

        let titulo = escape_quotes(&parsed.titulo);
        if self.import_config.exclusion_list.contains(&titulo) {
            info!("Tema '{titulo}' already imported, skipping");
            return Ok(ImportOutcome::SkippedDuplicate { title: titulo });
        }

        let defaults = &self.row_defaults;
        let row = TemaRow {
            bloque: defaults.bloque,
            numero: parsed.numero,
            titulo,
            descripcion,
            nivel_dificultad: defaults.nivel_dificultad,
            posicion_x: defaults.posicion_x,
            posicion_y: defaults.posicion_y,
            posicion_z: defaults.posicion_z,
            color: defaults.color.clone(),
            timecreated: timestamp,
            timemodified: timestamp,
        };
        debug!("Built row for tema {} ({} chars of description)", row.numero, row.descripcion.len());
        Ok(ImportOutcome::Imported(row))
    }

    /// 依次处理配置中的每个文件名，把导入的行写入 `out`。
    pub fn run<W: Write>(&self, out: &mut W, timestamp: i64) -> Result<ImportReport, ImportError> {
        let mut report = ImportReport::default();
        for filename in &self.import_config.filenames {
            let outcome = self.import_entry(filename, timestamp)?;
            if let ImportOutcome::Imported(row) = &outcome {
                write_insert(out, row)?;
                info!("Wrote INSERT for tema {} '{}'", row.numero, row.titulo);
            }
            report.record(outcome);
        }
        Ok(report)
    }

    /// 截断（或创建）输出文件后执行 `run`。父目录不存在时直接报错。
    pub fn run_to_file(&self, timestamp: i64) -> Result<ImportReport, ImportError> {
        let output_path = PathBuf::from(&self.import_config.output_path);
        let file = File::create(&output_path).map_err(|source| ImportError::OutputOpen {
            path: output_path.clone(),
            source,
        })?;
        info!("Output file opened: {output_path:?}");

        let mut writer = BufWriter::new(file);
        let report = self.run(&mut writer, timestamp)?;
        writer.flush()?;
        Ok(report)
    }
}
