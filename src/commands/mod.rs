//! Command implementations for the CLI
//!
//! - search: resolve a batch of part numbers and write the result workbook
//! - template: write a blank part-list input template
//! - config: configuration display and validation

pub mod config;
pub mod search;
pub mod template;
