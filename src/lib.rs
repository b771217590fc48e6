pub mod config;
pub mod importer;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod sql;
pub mod utils;

pub use config::AppConfig;
pub use importer::{FsSource, TemaImporter};
pub use models::{ImportOutcome, ImportReport, TemaRow};
pub use utils::ImportError;
