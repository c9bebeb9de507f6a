//! Migration data structures
//!
//! - `history`: Source entries, RCS history file classification and path flattening
//! - `report`: Observation of a run (per-copy records and the final summary)

pub mod history;
pub mod report;
