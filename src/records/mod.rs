//! The two persisted mappings: vocabulary and score ledger

mod ledger;
mod vocabulary;

pub use ledger::ScoreLedger;
pub use vocabulary::{InvalidEntry, ReplaceError, Vocabulary};
