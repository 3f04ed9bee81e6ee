//! Shared utility functions.

/// Single-line preview of provider text for logs and reports.
///
/// Newlines and runs of whitespace collapse to one space; the result is cut
/// at `max_chars` characters with `...` appended when anything was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &flat[..end]),
        None => flat,
    }
}
