//! Evidence collection policy.
//!
//! The sole externally tunable surface of the core. Every field has a
//! safe default, so an unconfigured profiler works out of the box.

use serde::{Deserialize, Serialize};

/// Controls which optional signal families run and how they are weighed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidencePolicy {
    /// Match curated topic tags.
    pub enable_topics: bool,
    /// Match free text in the repository name and description.
    pub enable_text: bool,
    /// Derive weak hints from license names.
    pub enable_license: bool,
    /// Derive minor hints from wiki/pages metadata.
    pub enable_metadata: bool,
    /// Score multiplier for topic signals.
    pub topic_weight: f64,
    /// Score multiplier for free-text signals.
    pub text_weight: f64,
    /// Score multiplier for license signals.
    pub license_weight: f64,
    /// Score multiplier for metadata signals.
    pub metadata_weight: f64,
    /// Signals scoring below this floor are dropped.
    pub min_signal_score: f64,
    /// Signals less confident than this floor are dropped.
    pub min_signal_confidence: f64,
    /// Cap on signals kept per repository after ranking.
    pub max_signals_per_repo: usize,
    /// Cap on signals gathered per source family before ranking.
    pub max_signals_per_family: usize,
    /// Free-text tokens shorter than this are ignored.
    pub min_token_length: usize,
    /// Trade recall for precision: raises the score floor and discounts
    /// free-text confidence.
    pub favor_precision: bool,
}

impl Default for EvidencePolicy {
    fn default() -> Self {
        Self {
            enable_topics: true,
            enable_text: true,
            enable_license: true,
            enable_metadata: true,
            topic_weight: 1.0,
            text_weight: 1.0,
            license_weight: 1.0,
            metadata_weight: 1.0,
            min_signal_score: 0.12,
            min_signal_confidence: 0.08,
            max_signals_per_repo: 24,
            max_signals_per_family: 8,
            min_token_length: 2,
            favor_precision: false,
        }
    }
}

impl EvidencePolicy {
    /// Extra score floor applied in precision mode.
    const PRECISION_FLOOR_BUMP: f64 = 0.08;
    /// Free-text confidence discount applied in precision mode.
    const PRECISION_TEXT_DAMP: f64 = 0.85;

    /// Effective minimum score after the precision bias.
    #[must_use]
    pub fn effective_min_score(&self) -> f64 {
        if self.favor_precision {
            (self.min_signal_score + Self::PRECISION_FLOOR_BUMP).min(1.0)
        } else {
            self.min_signal_score
        }
    }

    /// Confidence multiplier for free-text matches.
    #[must_use]
    pub fn text_confidence_damp(&self) -> f64 {
        if self.favor_precision {
            Self::PRECISION_TEXT_DAMP
        } else {
            1.0
        }
    }

    /// Number of enabled non-context source families, used as the
    /// denominator of the aggregator's source-diversity term.
    #[must_use]
    pub fn eligible_source_kinds(&self) -> usize {
        // primary-language and language-bytes are always on.
        let mut kinds = 2;
        if self.enable_topics {
            kinds += 1;
        }
        if self.enable_text {
            kinds += 1;
        }
        if self.enable_license {
            kinds += 1;
        }
        if self.enable_metadata {
            kinds += 1;
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let policy = EvidencePolicy::default();
        assert!(policy.enable_topics && policy.enable_text);
        assert!(policy.enable_license && policy.enable_metadata);
        assert_eq!(policy.eligible_source_kinds(), 6);
    }

    #[test]
    fn test_precision_mode_raises_floor() {
        let mut policy = EvidencePolicy::default();
        let relaxed = policy.effective_min_score();
        policy.favor_precision = true;
        assert!(policy.effective_min_score() > relaxed);
        assert!(policy.text_confidence_damp() < 1.0);
    }

    #[test]
    fn test_disabled_families_shrink_eligibility() {
        let policy = EvidencePolicy {
            enable_license: false,
            enable_metadata: false,
            ..Default::default()
        };
        assert_eq!(policy.eligible_source_kinds(), 4);
    }

    #[test]
    fn test_policy_deserializes_from_partial_json() {
        let policy: EvidencePolicy =
            serde_json::from_str(r#"{"favor_precision": true}"#).unwrap();
        assert!(policy.favor_precision);
        assert!(policy.enable_topics);
    }
}
