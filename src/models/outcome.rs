use serde::Serialize;
use std::path::PathBuf;

use crate::models::tema::TemaRow;

/// 单个文件的处理结果。三种跳过情况在输出上完全相同（不写任何内容），只是日志里可以区分。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ImportOutcome {
    Imported(TemaRow),
    SkippedDuplicate { title: String },
    SkippedMalformed { filename: String },
    SkippedMissing { path: PathBuf },
}

/// 一次运行的汇总，main 会把它以 JSON 形式写进日志。
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped_duplicate: usize,
    pub skipped_malformed: usize,
    pub skipped_missing: usize,
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportReport {
    pub fn record(&mut self, outcome: ImportOutcome) {
        match &outcome {
            ImportOutcome::Imported(_) => self.imported += 1,
            ImportOutcome::SkippedDuplicate { .. } => self.skipped_duplicate += 1,
            ImportOutcome::SkippedMalformed { .. } => self.skipped_malformed += 1,
            ImportOutcome::SkippedMissing { .. } => self.skipped_missing += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
