// Deterministic résumé scoring: normalization, keyword extraction, section
// detection, weighted scoring and rule-based suggestions.
// Pure and synchronous. No I/O happens anywhere under this module.

pub mod keywords;
pub mod normalizer;
pub mod scorer;
pub mod sections;
pub mod suggestions;

pub use scorer::{AtsScorer, ScoreResult};
pub use sections::SectionChecks;
