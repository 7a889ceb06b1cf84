/// How a single input line is treated by every loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    Record(&'a str),
}

/// Classifies a line with its terminator already removed.
///
/// Only a `#` in the very first column marks a comment.
pub(crate) fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        Line::Blank
    } else if line.starts_with('#') {
        Line::Comment
    } else {
        Line::Record(line)
    }
}

/// Yields `(line_no, record)` for every record line, numbering from 1.
pub(crate) fn records<'a, I>(lines: I) -> impl Iterator<Item = (usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| match classify(line) {
            Line::Record(record) => Some((idx + 1, record)),
            Line::Blank | Line::Comment => None,
        })
}
