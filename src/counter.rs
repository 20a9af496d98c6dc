//! Counting of contentful `msgstr` additions in unified diff text.
//!
//! A translated string is either written on one line (`msgstr "text"`) or,
//! when the catalog tool wraps it, as an empty `msgstr ""` followed by
//! quoted continuation lines. Both shapes count as a single change.

/// Default number of lines, including the opening `+msgstr ""`, searched
/// for a non-empty continuation fragment.
pub const DEFAULT_LOOKAHEAD: usize = 20;

const MULTILINE_OPENER: &str = "+msgstr \"\"";
const EMPTY_CONTINUATION: &str = "+\"\"";
const SINGLE_LINE_PREFIX: &str = "+msgstr \"";
const ADDED_FILE_HEADER: &str = "+++";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    InEntry { start: usize },
}

/// Count added `msgstr` entries with non-empty content.
///
/// Wrapped entries are only recognized when a non-empty fragment appears
/// within `lookahead` lines of the opener; longer wraps are not counted.
pub fn count_msgstr_changes(diff: &str, lookahead: usize) -> usize {
    let lines: Vec<&str> = diff.lines().collect();
    let mut count = 0;
    let mut state = State::Scanning;
    let mut i = 0;

    while i < lines.len() {
        match state {
            State::Scanning => {
                let line = lines[i];
                if line == MULTILINE_OPENER {
                    state = State::InEntry { start: i };
                    continue;
                }
                if single_line_content(line).is_some_and(|c| !c.is_empty()) {
                    count += 1;
                }
                i += 1;
            }
            State::InEntry { start } => {
                if entry_has_content(&lines, start, lookahead) {
                    count += 1;
                }
                state = State::Scanning;
                i = start + 1;
            }
        }
    }

    count
}

/// Content between the quotes of a single-line `+msgstr "..."` addition.
fn single_line_content(line: &str) -> Option<&str> {
    if line.starts_with(ADDED_FILE_HEADER) {
        return None;
    }
    line.strip_prefix(SINGLE_LINE_PREFIX)?
        .trim_end()
        .strip_suffix('"')
}

/// Fragment of a `+"..."` continuation line, up to its last quote.
fn continuation_fragment(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("+\"")?;
    let end = rest.rfind('"')?;
    Some(&rest[..end])
}

fn entry_has_content(lines: &[&str], start: usize, lookahead: usize) -> bool {
    let end = start.saturating_add(lookahead).min(lines.len());
    for line in lines.iter().take(end).skip(start + 1) {
        if !line.starts_with('+') {
            break;
        }
        if *line == EMPTY_CONTINUATION {
            continue;
        }
        if continuation_fragment(line).is_some_and(|f| !f.is_empty()) {
            return true;
        }
    }
    false
}
