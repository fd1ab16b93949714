//! Wrapped-text display
//!
//! This module writes wrapper results to the terminal:
//! - Plain text, optionally under a column ruler
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (column ruler, line splitting)
//! - `text` - Plain text formatter with optional colored ruler
//! - `json` - JSON output

mod config;
mod json;
mod text;
mod utils;

pub use config::OutputConfig;
pub use json::{WrapReport, print_json, write_json};
pub use text::TextFormatter;
pub use utils::{output_lines, ruler};
