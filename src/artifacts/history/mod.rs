//! RCS history files and their CVS locations
//!
//! ## Components
//!
//! - `source_entry`: Relative paths discovered under the RCS source root
//! - `history_file`: Classification of `RCS/<name>,v` files and flattening of their paths

pub mod history_file;
pub mod source_entry;

pub use history_file::{RcsHistoryFile, is_rcs_history_file};
pub use source_entry::SourceEntry;
