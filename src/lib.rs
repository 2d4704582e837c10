//! # Diarist
//!
//! Text cleanup and light analytics for journal entries saved from e-mail
//! drafts.
//!
//! ## Features
//!
//! - Sentence segmentation aware of draft bullets and paragraphs
//! - Lemmatization and Snowball stemming
//! - N-gram counting and most-used-word ranking with stopword removal
//! - Filtering journal tables by detected language and by date
//! - JSON Lines journal files and a command line interface

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod journal;
pub mod text;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
