// Text processing — tokenization, noun lemmatization, and document
// normalization.

pub mod lemmatizer;
pub mod normalize;
pub mod tokenize;
pub mod traits;
