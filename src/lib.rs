// skillcount: skill and keyword frequency tables for job postings
//
// This is the library root. Each module corresponds to one stage of the
// counting pipeline.

pub mod config;
pub mod corpus;
pub mod counting;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod text;
pub mod vocab;
