//! Report rendering: the text artifact and the stdout conclusion line.

pub mod format;

pub use format::*;
