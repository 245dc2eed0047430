// Noticescan Library
// Copyright, license notice and header structure clues from source text

pub mod config;
pub mod copyright;
pub mod error;
pub mod finder;
pub mod header;
pub mod license;
pub mod logging;
pub mod scanner;
pub mod text;

pub use config::ScanConfig;
pub use error::{ConfigError, ScanError};
pub use scanner::{ScanReport, ScanSummary, Scanner, SourceText};
