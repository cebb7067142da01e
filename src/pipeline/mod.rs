// Analysis pipeline — runs every stage over a loaded corpus.

pub mod analyze;
pub mod report;
pub mod stats;

pub use analyze::{analyze, analyze_with_progress, Analysis, AnalysisOptions};
pub use report::{DecadeTerms, DesignatedTerms, RankedTerm, Report};
pub use stats::CorpusStats;
