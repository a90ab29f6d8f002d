// Term counting — document frequencies of vocabulary terms over n-grams.

pub mod counter;
pub mod result;
