mod entry;
mod hint;
mod mistake;

pub use entry::{WordEntry, WordEntryError};
pub use hint::Hint;
pub use mistake::Mistake;
