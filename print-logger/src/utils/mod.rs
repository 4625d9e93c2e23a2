//! # Utilities Module
//!
//! Internal utility modules for the print-logger crate.

pub(crate) mod template;

pub use template::{format_template, FormatArg};
