// Decade grouping — bucket documents by decade and sum their weight vectors.

pub mod aggregate;
pub mod bucket;

pub use aggregate::aggregate;
pub use bucket::{Decade, DecadeBuckets, DecadeRange};
