//! Terminal-friendly chart rendering for the report.

pub mod ascii;

pub use ascii::*;
