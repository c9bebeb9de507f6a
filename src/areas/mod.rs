//! File system areas touched by a migration
//!
//! - `source_tree`: The legacy RCS tree, scanned for history files
//! - `cvs_repository`: The CVS repository receiving the flattened copies
//! - `initializer`: Creation of the CVS repository through the external `cvs` tool

pub mod cvs_repository;
pub mod initializer;
pub mod source_tree;
