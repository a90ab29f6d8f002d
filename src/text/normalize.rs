// Document normalization for the lemmatized text variant.
//
// lowercase -> drop apostrophes -> sentence split -> Treebank tokens ->
// drop bare punctuation -> noun lemmas -> single-space join

use super::lemmatizer::Lemmatizer;
use super::tokenize::{split_sentences, TreebankTokenizer};
use super::traits::Tokenizer;

/// Tokens removed outright before lemmatization.
const PUNCTUATION_TOKENS: [&str; 6] = ["?", ":", "!", ".", ",", ";"];

/// Normalize one document into its lemmatized form.
///
/// "Master's degree required." becomes "master degree required".
pub fn normalize_document(text: &str, lemmatizer: &Lemmatizer) -> String {
    let lowered = text.to_lowercase().replace(['\'', '\u{2019}'], "");

    split_sentences(&lowered)
        .into_iter()
        .flat_map(|sentence| TreebankTokenizer.tokenize(sentence))
        .filter(|token| !PUNCTUATION_TOKENS.contains(&token.as_str()))
        .map(|token| lemmatizer.lemmatize(&token))
        .collect::<Vec<_>>()
        .join(" ")
}
