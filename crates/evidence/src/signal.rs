//! Evidence signals and their provenance.

use serde::{Deserialize, Serialize};
use skillprint_taxonomy::SkillCategory;

/// Context tag recorded for forked repositories.
pub const FORKED_TAG: &str = "ForkedRepository";
/// Context tag recorded for archived or disabled repositories.
pub const INACTIVE_TAG: &str = "InactiveRepository";

/// Where a signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalSource {
    /// The platform's single declared language.
    PrimaryLanguage,
    /// Per-language byte breakdown.
    LanguageBytes,
    /// Curated topic tags.
    Topics,
    /// Free text in the name and description.
    RepoText,
    /// License-name fragments.
    License,
    /// Wiki/pages metadata.
    RepoMetadata,
    /// Fork/archived/disabled flags; context only, never a skill.
    RepoFlags,
    /// Detected repository archetype; context only, never a skill.
    NegativeContext,
}

impl SignalSource {
    /// Short stable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimaryLanguage => "primary-language",
            Self::LanguageBytes => "language-bytes",
            Self::Topics => "topics",
            Self::RepoText => "repo-text",
            Self::License => "license",
            Self::RepoMetadata => "repo-metadata",
            Self::RepoFlags => "repo-flags",
            Self::NegativeContext => "negative-context",
        }
    }

    /// Fixed prior reliability of this source kind. A surviving signal's
    /// confidence is blended toward this before ranking.
    #[must_use]
    pub fn reliability(&self) -> f64 {
        match self {
            Self::PrimaryLanguage => 0.95,
            Self::LanguageBytes => 0.9,
            Self::Topics => 0.85,
            Self::RepoText => 0.55,
            Self::License => 0.3,
            Self::RepoMetadata => 0.35,
            Self::RepoFlags => 0.9,
            Self::NegativeContext => 0.9,
        }
    }

    /// Context sources record repository circumstances, not skills.
    #[must_use]
    pub fn is_context_only(&self) -> bool {
        matches!(self, Self::RepoFlags | Self::NegativeContext)
    }
}

impl std::fmt::Display for SignalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One atomic, attributed piece of evidence.
///
/// Transient: consumed by the aggregator immediately after collection,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSignal {
    /// Canonical language, or a context tag for context-only sources.
    pub language: String,
    /// Category resolved for the language at collection time.
    pub category: SkillCategory,
    /// Provenance.
    pub source: SignalSource,
    /// Strength in [0, 1].
    pub score: f64,
    /// Reliability in [0, 1].
    pub confidence: f64,
    /// The token or topic that matched, when one did.
    pub token: Option<String>,
    /// Human-readable provenance detail.
    pub detail: String,
}

impl EvidenceSignal {
    /// Ranking strength.
    #[must_use]
    pub fn strength(&self) -> f64 {
        self.score * self.confidence
    }

    /// Dedupe key: signals agreeing on all three are the same finding.
    #[must_use]
    pub fn dedupe_key(&self) -> (String, SignalSource, Option<String>) {
        (self.language.clone(), self.source, self.token.clone())
    }

    /// Clamp score and confidence into [0, 1].
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.score = self.score.clamp(0.0, 1.0);
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(language: &str, source: SignalSource, score: f64, confidence: f64) -> EvidenceSignal {
        EvidenceSignal {
            language: language.to_string(),
            category: SkillCategory::Backend,
            source,
            score,
            confidence,
            token: None,
            detail: String::new(),
        }
    }

    #[test]
    fn test_context_sources_are_flagged() {
        assert!(SignalSource::RepoFlags.is_context_only());
        assert!(SignalSource::NegativeContext.is_context_only());
        assert!(!SignalSource::Topics.is_context_only());
    }

    #[test]
    fn test_reliability_ordering_matches_trust() {
        assert!(SignalSource::PrimaryLanguage.reliability() > SignalSource::Topics.reliability());
        assert!(SignalSource::Topics.reliability() > SignalSource::RepoText.reliability());
        assert!(SignalSource::RepoText.reliability() > SignalSource::License.reliability());
    }

    #[test]
    fn test_strength_and_clamping() {
        let s = signal("Rust", SignalSource::Topics, 1.4, 0.5).clamped();
        assert_eq!(s.score, 1.0);
        assert_eq!(s.strength(), 0.5);
    }

    #[test]
    fn test_dedupe_key_distinguishes_tokens() {
        let mut a = signal("Go", SignalSource::RepoText, 0.5, 0.5);
        let mut b = a.clone();
        a.token = Some("golang".into());
        b.token = Some("gin".into());
        assert_ne!(a.dedupe_key(), b.dedupe_key());
    }
}
