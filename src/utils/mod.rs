pub mod import_error;

pub use import_error::ImportError;
