//! Full justification of a single wrapped line.

use crate::string_utils::is_break_space;

/// Stretch `line` to exactly `width` characters by widening its word gaps.
///
/// Gaps are widened one space at a time, starting from the end of the line
/// and cycling backward. Leading indentation is never touched. A trailing
/// newline is kept; other trailing whitespace is dropped. Lines that are
/// already `width` long, or that have no internal gap, come back unchanged
/// apart from that trimming.
///
/// # Example
///
/// ```
/// use clip::justify;
///
/// assert_eq!(justify("    lo he lo\n", 14), "    lo  he  lo\n");
/// assert_eq!(justify("    hello\n", 14), "    hello\n");
/// ```
pub fn justify(line: &str, width: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    justify_chars(&chars, width).into_iter().collect()
}

pub(crate) fn justify_chars(line: &[char], width: usize) -> Vec<char> {
    let had_newline = line.last() == Some(&'\n');
    let visible = line
        .iter()
        .rposition(|&c| !is_break_space(c))
        .map_or(0, |last| last + 1);

    let mut text = line[..visible].to_vec();
    let size = text.len();

    if size < width {
        if let Some(first) = text.iter().position(|&c| c != ' ') {
            if first + 1 < size {
                stretch(&mut text, first, width - size);
            }
        }
    }

    if had_newline {
        text.push('\n');
    }
    text
}

/// Insert `need` spaces into `text`, walking gaps right to left and wrapping
/// back to the end of the line when the walk reaches the first word.
///
/// The walk first cycles over the line as it was before any insertion. Text
/// pushed past that window by earlier insertions is out of its reach, so any
/// spaces still missing are then placed cycling over the whole current line.
fn stretch(text: &mut Vec<char>, first: usize, need: usize) {
    let window = text.len() - 1;
    let need = insert_gaps(text, first, need, Some(window));
    if need > 0 {
        insert_gaps(text, first, need, None);
    }
}

/// Widen up to `need` gaps, cycling back to `window` (or the current end of
/// the line when `None`). Returns how many spaces could not be placed.
fn insert_gaps(text: &mut Vec<char>, first: usize, mut need: usize, window: Option<usize>) -> usize {
    let mut cur = text.len() - 1;
    while need > 0 {
        let last = window.unwrap_or(text.len() - 1);
        let Some(word) = scan_back(text, first, last, cur, |c| c == ' ') else {
            break;
        };
        let Some(gap) = scan_back(text, first, last, word, |c| c != ' ') else {
            break;
        };
        text.insert(gap, ' ');
        cur = gap;
        need -= 1;
    }
    need
}

/// Walk backward from `from` while `skip` matches, cycling over
/// `first + 1 ..= last`. `None` if the walk comes all the way around.
fn scan_back(
    text: &[char],
    first: usize,
    last: usize,
    from: usize,
    skip: impl Fn(char) -> bool,
) -> Option<usize> {
    let mut pos = from;
    for _ in 0..text.len() {
        if !skip(text[pos]) {
            return Some(pos);
        }
        pos = if pos - 1 == first { last } else { pos - 1 };
        if pos == from {
            return None;
        }
    }
    None
}
