//! Weighted hint entries and their conflict-resolution rules.

use serde::Serialize;

/// A token's or topic's prior association with a language, independent of
/// any particular repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedHint {
    /// Canonical language/technology name the hint points at.
    pub language: &'static str,
    /// Strength of the association in [0, 1].
    pub score: f64,
    /// How reliable the association is in [0, 1].
    pub confidence: f64,
    /// How specific the triggering token is to this language in [0, 1].
    /// "tensorflow" is specific; "web" is not.
    pub specificity: f64,
}

impl WeightedHint {
    /// Combined strength used when two hints collide on one key.
    #[must_use]
    pub fn strength(&self) -> f64 {
        self.score * self.confidence
    }

    /// Pick the stronger of two colliding hints.
    ///
    /// Higher score×confidence wins; exact ties fall back to higher
    /// specificity, then keep the incumbent.
    #[must_use]
    pub fn stronger(self, other: WeightedHint) -> WeightedHint {
        let lhs = self.strength();
        let rhs = other.strength();
        if rhs > lhs {
            other
        } else if rhs == lhs && other.specificity > self.specificity {
            other
        } else {
            self
        }
    }

    /// Copy of this hint with clamped fields.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.score = self.score.clamp(0.0, 1.0);
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self.specificity = self.specificity.clamp(0.0, 1.0);
        self
    }
}

/// Generation tier for auto-derived hints. Earlier tiers are trusted more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    /// The profile's canonical name itself.
    Canonical,
    /// A registered alias.
    Alias,
    /// An ecosystem keyword (framework, tool, runtime).
    Ecosystem,
    /// A loose descriptive tag.
    Tag,
}

impl HintTier {
    /// (score, confidence, specificity) defaults for this tier.
    #[must_use]
    pub fn defaults(&self) -> (f64, f64, f64) {
        match self {
            Self::Canonical => (0.92, 0.90, 0.90),
            Self::Alias => (0.86, 0.82, 0.85),
            Self::Ecosystem => (0.62, 0.58, 0.60),
            Self::Tag => (0.45, 0.42, 0.40),
        }
    }

    /// Build the default hint for a language at this tier.
    #[must_use]
    pub fn hint(&self, language: &'static str) -> WeightedHint {
        let (score, confidence, specificity) = self.defaults();
        WeightedHint { language, score, confidence, specificity }
    }
}

/// A regex-driven hint for multi-word or punctuated technology mentions
/// in free text ("Next.js", "ruby on rails").
#[derive(Debug, Clone)]
pub struct RegexHint {
    /// Compiled pattern, applied to lowercased repository text.
    pub pattern: regex::Regex,
    /// Canonical language the match indicates.
    pub language: &'static str,
    /// Association strength in [0, 1].
    pub score: f64,
    /// Reliability in [0, 1].
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(language: &'static str, score: f64, confidence: f64, specificity: f64) -> WeightedHint {
        WeightedHint { language, score, confidence, specificity }
    }

    #[test]
    fn test_stronger_prefers_higher_strength() {
        let weak = hint("Python", 0.5, 0.5, 0.9);
        let strong = hint("Rust", 0.9, 0.9, 0.1);
        assert_eq!(weak.clone().stronger(strong.clone()).language, "Rust");
        assert_eq!(strong.stronger(weak).language, "Rust");
    }

    #[test]
    fn test_stronger_breaks_ties_on_specificity() {
        let generic = hint("Python", 0.8, 0.5, 0.3);
        let specific = hint("Rust", 0.5, 0.8, 0.9);
        assert_eq!(generic.stronger(specific).language, "Rust");
    }

    #[test]
    fn test_tier_ordering() {
        let canonical = HintTier::Canonical.hint("Go");
        let tag = HintTier::Tag.hint("Go");
        assert!(canonical.strength() > tag.strength());
    }

    #[test]
    fn test_clamped() {
        let wild = hint("Go", 1.8, -0.2, 0.5).clamped();
        assert_eq!(wild.score, 1.0);
        assert_eq!(wild.confidence, 0.0);
    }
}
