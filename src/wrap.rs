//! The line wrapper.
//!
//! Text is scanned left to right in a single owned buffer. Each output line
//! is cut from the front of the buffer at the best break found so far, and
//! the remainder is re-padded with indent or margin spaces before scanning
//! resumes. Escape characters are rewritten in the buffer as they are met.

use tracing::trace;

use crate::justify::justify_chars;
use crate::options::WrapOptions;
use crate::string_utils::{is_break_space, pad_front, trim_end_spaces, trim_start_spaces};
use crate::terminal::default_wrap_options;

/// Leading spacing for the line after a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Indent,
    Margin,
}

/// Scan state for the line currently being built.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Column where the line's text begins, after its leading spaces.
    start: usize,
    /// Next character to inspect.
    pos: usize,
    /// Best known break point.
    chop: usize,
}

impl Cursor {
    fn at(column: usize) -> Self {
        Self {
            start: column,
            pos: column,
            chop: column,
        }
    }
}

impl WrapOptions {
    /// Wrap `text` according to these options.
    ///
    /// The options are normalized first, so any configuration is accepted.
    /// A single trailing newline on the input is dropped and trailing spaces
    /// are removed. Lines are separated by `\n` with no trailing separator
    /// added.
    ///
    /// # Example
    ///
    /// ```
    /// use clip::WrapOptions;
    ///
    /// let opts = WrapOptions::for_width(20).with_indent(5).with_margin(10);
    /// assert_eq!(opts.wrap("hi\rhello\r"), "     hi\n     hello\n");
    /// ```
    pub fn wrap(&self, text: &str) -> String {
        let opts = self.normalized();
        let margin_escape = opts.margin_escape();
        let indent_escape = opts.indent_escape();

        let text = text.strip_suffix('\n').unwrap_or(text);
        let body: Vec<char> = text.trim_end_matches(' ').chars().collect();
        let mut buf = pad_front(opts.indent, &body);
        let mut result = String::with_capacity(buf.len() + buf.len() / opts.width);
        let mut cursor = Cursor::at(opts.indent);

        loop {
            let mut lead = Lead::Margin;
            let mut ch = buf.get(cursor.pos).copied();
            trace!(
                start = cursor.start,
                pos = cursor.pos,
                len = buf.len(),
                ch = ?ch,
                "scan"
            );

            if ch == Some(margin_escape) {
                if cursor.pos < opts.margin {
                    pad_escape(&mut buf, &mut cursor, opts.margin);
                    continue;
                }
                buf[cursor.pos] = '\n';
                ch = Some('\n');
            } else if ch == Some(indent_escape) {
                lead = Lead::Indent;
                if cursor.pos < opts.indent {
                    pad_escape(&mut buf, &mut cursor, opts.indent);
                    continue;
                }
                buf[cursor.pos] = '\n';
                ch = Some('\n');
            }

            if ch.is_some_and(is_break_space) {
                cursor.chop = cursor.pos;
            }

            match ch {
                None => cursor.chop = buf.len(),
                Some('\n') => cursor.chop = cursor.pos + 1,
                Some(_) if cursor.pos == opts.width => {
                    if cursor.chop == cursor.start {
                        cursor.chop = opts.width;
                    }
                }
                Some(_) => {
                    cursor.pos += 1;
                    continue;
                }
            }
            trace!(chop = cursor.chop, "break");

            let mut rest = buf.split_off(cursor.chop);
            let mut add = buf;

            if cursor.chop > 0 && !rest.is_empty() {
                let had_newline = add.last() == Some(&'\n');
                if had_newline {
                    add.pop();
                }
                trim_end_spaces(&mut add);
                add.push('\n');

                if !had_newline || opts.trim_newline_spaces {
                    trim_start_spaces(&mut rest);
                }
                if opts.justify && !had_newline && add.len() > 2 {
                    add = justify_chars(&add, opts.width);
                }
            } else {
                trim_end_spaces(&mut add);
            }

            trace!(
                add = ?add.iter().collect::<String>(),
                rest = ?rest.iter().collect::<String>(),
                lead = ?lead,
                "segment"
            );
            result.extend(add);

            if rest.is_empty() {
                return result;
            }

            let column = match lead {
                Lead::Indent => opts.indent,
                Lead::Margin => opts.margin,
            };
            buf = pad_front(column, &rest);
            cursor = Cursor::at(column);
        }
    }
}

/// Replace the escape under the cursor with spaces reaching `column`.
///
/// When the escape opens the line, the line start moves to `column` so the
/// padding counts as leading space rather than as a break point.
fn pad_escape(buf: &mut Vec<char>, cursor: &mut Cursor, column: usize) {
    let pos = cursor.pos;
    buf.splice(pos..=pos, std::iter::repeat_n(' ', column - pos));
    if pos == cursor.start {
        *cursor = Cursor::at(column);
    }
}

/// Wrap with the default options but an explicit width, indent and margin.
///
/// # Example
///
/// ```
/// use clip::wrap_with_args;
///
/// assert_eq!(
///     wrap_with_args("hellohellohellohello hello", 20, 0, 0),
///     "hellohellohellohello\nhello"
/// );
/// ```
pub fn wrap_with_args(text: &str, width: usize, indent: usize, margin: usize) -> String {
    default_wrap_options()
        .clone()
        .with_width(width)
        .with_indent(indent)
        .with_margin(margin)
        .wrap(text)
}

/// Wrap with the default options (screen width, no indent or margin).
pub fn wrap_default(text: &str) -> String {
    default_wrap_options().wrap(text)
}
