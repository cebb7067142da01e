// sotu: TF-IDF term reports for dated speech corpora
//
// This is the library root. Each module corresponds to a stage of the
// batch pipeline: load the corpus, weight its terms, group by decade,
// and render the report.

pub mod config;
pub mod corpus;
pub mod decades;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod tfidf;
