//! Static technology profile descriptors.

use crate::category::SkillCategory;

/// A static descriptor for one language or technology.
///
/// Profiles are defined at build time and never mutated. Weights form a
/// partial map: a technology may score in several categories and the
/// weights need not sum to 1.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Canonical display name (e.g. "TypeScript").
    pub name: &'static str,
    /// Alternate spellings that resolve to this profile ("ts", "k8s").
    pub aliases: &'static [&'static str],
    /// Partial category→weight map.
    pub weights: &'static [(SkillCategory, f64)],
    /// Frameworks, runtimes, and tools commonly co-occurring with this
    /// technology in repository text.
    pub ecosystem: &'static [&'static str],
    /// Loose descriptive tags, weakest association tier.
    pub tags: &'static [&'static str],
}

impl LanguageProfile {
    /// Weight assigned to `category`, zero when absent from the map.
    #[must_use]
    pub fn weight_for(&self, category: SkillCategory) -> f64 {
        self.weights
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    /// Highest-weighted category in the profile, if any weight is set.
    #[must_use]
    pub fn dominant_category(&self) -> Option<SkillCategory> {
        self.weights
            .iter()
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.0.priority_rank().cmp(&a.0.priority_rank()))
            })
            .map(|(c, _)| *c)
    }

    /// Whether `candidate` matches the canonical name or an alias,
    /// case-insensitively.
    #[must_use]
    pub fn answers_to(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: LanguageProfile = LanguageProfile {
        name: "Elm",
        aliases: &["elm-lang"],
        weights: &[
            (SkillCategory::Frontend, 0.9),
            (SkillCategory::Backend, 0.1),
        ],
        ecosystem: &["elm-ui"],
        tags: &["functional"],
    };

    #[test]
    fn test_weight_for_missing_category_is_zero() {
        assert_eq!(SAMPLE.weight_for(SkillCategory::Database), 0.0);
    }

    #[test]
    fn test_dominant_category() {
        assert_eq!(SAMPLE.dominant_category(), Some(SkillCategory::Frontend));
    }

    #[test]
    fn test_answers_to_is_case_insensitive() {
        assert!(SAMPLE.answers_to("ELM"));
        assert!(SAMPLE.answers_to("Elm-Lang"));
        assert!(!SAMPLE.answers_to("elmo"));
    }
}
