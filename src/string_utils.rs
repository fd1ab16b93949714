//! Character-buffer helpers shared by the wrapper and the justifier.

/// Whether a character counts as a word break.
///
/// Only ASCII whitespace is considered: space, tab, newline, vertical tab,
/// form feed and carriage return.
///
/// # Example
///
/// ```
/// use clip::string_utils::is_break_space;
///
/// assert!(is_break_space(' '));
/// assert!(is_break_space('\x0b'));
/// assert!(!is_break_space('\u{a0}'));
/// ```
pub fn is_break_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Remove trailing `' '` characters from a buffer in place.
///
/// Newlines and other whitespace are left alone.
pub fn trim_end_spaces(buf: &mut Vec<char>) {
    while buf.last() == Some(&' ') {
        buf.pop();
    }
}

/// Remove leading `' '` characters from a buffer in place.
pub fn trim_start_spaces(buf: &mut Vec<char>) {
    let leading = buf.iter().take_while(|&&c| c == ' ').count();
    buf.drain(..leading);
}

/// Build a buffer of `count` spaces followed by `rest`.
pub fn pad_front(count: usize, rest: &[char]) -> Vec<char> {
    let mut buf = Vec::with_capacity(count + rest.len());
    buf.resize(count, ' ');
    buf.extend_from_slice(rest);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_is_break_space_ascii_only() {
        for ch in [' ', '\t', '\n', '\r', '\x0b', '\x0c'] {
            assert!(is_break_space(ch), "{:?} should break", ch);
        }
        assert!(!is_break_space('a'));
        assert!(!is_break_space('\u{2003}'));
    }

    #[test]
    fn test_trim_end_spaces_keeps_newline() {
        let mut buf = chars("hi \n  ");
        trim_end_spaces(&mut buf);
        assert_eq!(buf, chars("hi \n"));
    }

    #[test]
    fn test_trim_end_spaces_all_spaces() {
        let mut buf = chars("    ");
        trim_end_spaces(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_trim_start_spaces() {
        let mut buf = chars("   bye bye");
        trim_start_spaces(&mut buf);
        assert_eq!(buf, chars("bye bye"));

        let mut tabbed = chars("\t bye");
        trim_start_spaces(&mut tabbed);
        assert_eq!(tabbed, chars("\t bye"));
    }

    #[test]
    fn test_pad_front() {
        assert_eq!(pad_front(3, &chars("ab")), chars("   ab"));
        assert_eq!(pad_front(0, &chars("ab")), chars("ab"));
        assert_eq!(pad_front(2, &[]), chars("  "));
    }
}
