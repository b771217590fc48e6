pub mod escape;
pub mod insert_writer;

pub use escape::{escape_quotes, escape_text};
pub use insert_writer::{TEMAS_TABLE, format_insert, write_insert};
