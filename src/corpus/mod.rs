// Job posting corpus — reading postings for one job type and building the
// raw and lemmatized document lists the counting passes draw from.

pub mod documents;
pub mod postings;
