//! File outputs.
//!
//! - report text write (`report_file`)
//! - optional advice JSON export (`export`)

pub mod export;
pub mod report_file;

pub use export::*;
pub use report_file::*;
