//! Report documents and output formatting

pub mod formatter;
pub mod report;
