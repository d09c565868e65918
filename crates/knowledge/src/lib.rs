//! Weak-signal knowledge base for interpreting repository metadata.
//!
//! This crate provides:
//! - Token and topic hint tables auto-generated from the taxonomy, with
//!   hand-tuned overrides layered on top
//! - An alias table, a noise-token table, regex hints, license hints,
//!   and negative-context archetype detectors
//! - A frozen, process-wide [`KnowledgeBase`] singleton
//!
//! Regex validity is a construction concern: [`KnowledgeBase::build`]
//! validates every pattern once and evaluation paths never fail.

pub mod builder;
pub mod hint;
pub mod license;
pub mod negative;
pub mod noise;
pub mod overrides;

pub use builder::{KnowledgeBase, KnowledgeError};
pub use hint::{HintTier, RegexHint, WeightedHint};
pub use license::LicenseHint;
pub use negative::{ContextSeverity, NegativeContextProfile};
pub use noise::{NoiseSeverity, NoiseTokenProfile};

use once_cell::sync::Lazy;

static KNOWLEDGE_BASE: Lazy<KnowledgeBase> = Lazy::new(|| {
    // All table inputs are compile-time constants; a failure here is a
    // programming error caught by the construction tests.
    KnowledgeBase::build().unwrap_or_else(|e| panic!("knowledge base construction failed: {e}"))
});

/// The shared, read-only knowledge base, built on first use.
#[must_use]
pub fn knowledge_base() -> &'static KnowledgeBase {
    &KNOWLEDGE_BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_is_stable() {
        let a = knowledge_base() as *const KnowledgeBase;
        let b = knowledge_base() as *const KnowledgeBase;
        assert_eq!(a, b);
    }

    #[test]
    fn test_singleton_serves_lookups() {
        let kb = knowledge_base();
        assert!(kb.token_hint("tensorflow").is_some());
        assert!(kb.topic_hint("nextjs").is_some());
    }
}
