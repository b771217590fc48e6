pub mod outcome;
pub mod tema;

pub use outcome::{ImportOutcome, ImportReport};
pub use tema::TemaRow;
