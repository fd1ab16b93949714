//! Shared utility functions for output formatting

const RULER_DIGITS: &str = "1234567890";

/// A column ruler exactly `width` characters long.
///
/// ```
/// use clip::output::ruler;
///
/// assert_eq!(ruler(12), "123456789012");
/// ```
pub fn ruler(width: usize) -> String {
    RULER_DIGITS.chars().cycle().take(width).collect()
}

/// Split wrapped text into its output lines.
///
/// Unlike `str::lines`, a trailing `\n` yields a final empty line, so the
/// split round-trips with `join("\n")`.
pub fn output_lines(wrapped: &str) -> Vec<&str> {
    wrapped.split('\n').collect()
}
