pub mod filename_parser;

pub use filename_parser::{ParsedFilename, parse_tema_filename};
