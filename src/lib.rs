//! Prepare an RCS project for processing with cvs2svn
//!
//! RCS keeps the history of every file in a `,v` file inside an `RCS`
//! directory next to it. cvs2svn reads CVS repositories, which keep the same
//! `,v` files directly where the working files would be and carry a `CVSROOT`
//! directory. This crate creates such a repository and copies the history
//! files into it:
//!
//! ```text
//! hello/RCS/hello.txt,v      ->  hello_cvs/hello.txt,v
//! hello/sub/RCS/world.c,v    ->  hello_cvs/sub/world.c,v
//! ```
//!
//! - `areas`: The source tree, the destination repository and its initializer
//! - `artifacts`: History file classification and run reporting
//! - `commands`: The command line entry point, initialization and conversion

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod logging;

pub use commands::{convert, initialize_destination_if_needed, run};
pub use errors::{MigrationError, MigrationResult};
