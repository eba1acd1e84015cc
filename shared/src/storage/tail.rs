//! Line splitting and tail windows over append-only text.

/// Splits file content into lines.
///
/// Lines end at `\n`; a trailing `\r` is dropped. A final newline does not
/// produce an extra empty line, while an unterminated last line (a partial
/// write) is still returned.
pub fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines()
}

/// Returns the last line of the content, if any.
#[must_use]
pub fn last_line(content: &str) -> Option<&str> {
    lines(content).last()
}

/// Returns the last `limit` lines in their original order.
///
/// A `limit` of zero yields no lines.
#[must_use]
pub fn tail(content: &str, limit: usize) -> Vec<&str> {
    if limit == 0 {
        return Vec::new();
    }

    let all: Vec<&str> = lines(content).collect();
    let start = all.len().saturating_sub(limit);
    all[start..].to_vec()
}
