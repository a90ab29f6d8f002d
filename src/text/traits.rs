// Tokenizer trait — the seam between counting modes.
//
// The two counting modes differ only in how a lowercased document is split
// into tokens, so each mode owns a tokenizer behind this trait.

/// Split a piece of text into tokens.
pub trait Tokenizer {
    /// Tokenize `text` into owned tokens, in document order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
