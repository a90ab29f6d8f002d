// Output — CSV count tables and the terminal run summary.

pub mod table;
pub mod terminal;

/// Shorten a skill name for the summary column, marking the cut with "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
