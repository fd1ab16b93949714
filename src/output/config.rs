//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print a `1234567890...` column ruler above the text
    pub ruler: bool,
}
