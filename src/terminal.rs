//! Terminal geometry, queried once per process.

use once_cell::sync::Lazy;

use crate::options::WrapOptions;

/// Width used when the terminal cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;
/// Height used when the terminal cannot be queried.
pub const FALLBACK_HEIGHT: usize = 40;

/// Column and row count of the controlling terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
        }
    }
}

impl ScreenSize {
    /// Build a size from a `(columns, rows)` query result, falling back on
    /// failure or on a zero dimension.
    fn from_query<E: std::fmt::Display>(query: Result<(u16, u16), E>) -> Self {
        match query {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Self {
                width: usize::from(cols),
                height: usize::from(rows),
            },
            Ok((cols, rows)) => {
                tracing::debug!(cols, rows, "terminal reported empty size, using fallback");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "terminal size query failed, using fallback");
                Self::default()
            }
        }
    }
}

static SCREEN_SIZE: Lazy<ScreenSize> =
    Lazy::new(|| ScreenSize::from_query(crossterm::terminal::size()));

static DEFAULT_WRAP_OPTIONS: Lazy<WrapOptions> =
    Lazy::new(|| WrapOptions::for_width(SCREEN_SIZE.width));

/// Size of the controlling terminal, or 80x40 when it can't be determined.
pub fn screen_size() -> ScreenSize {
    *SCREEN_SIZE
}

/// The process-wide default options: screen width, no indent or margin,
/// TAB/CR escapes, no justification.
pub fn default_wrap_options() -> &'static WrapOptions {
    &DEFAULT_WRAP_OPTIONS
}
