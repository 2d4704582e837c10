//! Journal tables and the operations over their rows.

pub mod filter;
pub mod prepare;
pub mod table;

pub use filter::{
    AnyMatchThreshold, LanguageFilterMode, filter_entries_by_date, filter_entries_by_languages,
    filter_entries_by_languages_with,
};
pub use prepare::{EntryPreparer, LanguageDetector, WhatlangDetector, prepare_entries};
pub use table::JournalTable;
