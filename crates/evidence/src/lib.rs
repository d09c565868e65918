//! Per-repository evidence collection and cross-repository skill scoring.
//!
//! This crate provides:
//! - A per-repository [`EvidenceCollector`] turning raw metadata into a
//!   ranked, capped signal list
//! - An [`EvidenceAggregator`] folding signals across a user's
//!   repositories into calibrated per-language confidences
//! - A [`SkillProfiler`] façade combining both behind one call
//!
//! Everything here is synchronous, CPU-only, and total: malformed or
//! absent fields degrade to "no evidence", never to an error.

pub mod aggregate;
pub mod collector;
pub mod explain;
pub mod input;
pub mod policy;
pub mod profiler;
pub mod signal;

pub use aggregate::{
    context_penalty, coverage, density, source_diversity, token_diversity, EvidenceAggregator,
    LanguageEvidenceAggregate, SkillRecord,
};
pub use collector::EvidenceCollector;
pub use explain::{highlight, summarize_profile};
pub use input::{RepositoryEvidenceInput, SanitizedInput};
pub use policy::EvidencePolicy;
pub use profiler::SkillProfiler;
pub use signal::{EvidenceSignal, SignalSource, FORKED_TAG, INACTIVE_TAG};
