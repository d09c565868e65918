//! Knowledge-base construction.
//!
//! Auto-generates the weak-signal tables from the taxonomy registry,
//! layers hand-tuned overrides on top, compiles every regex, and freezes
//! the result. Construction runs once; everything after is read-only.

use std::collections::HashMap;

use thiserror::Error;

use skillprint_taxonomy::{find_profile, profiles};

use crate::hint::{HintTier, RegexHint, WeightedHint};
use crate::license::{LicenseHint, LICENSE_HINTS};
use crate::negative::{NegativeContextProfile, NEGATIVE_CONTEXT_SPECS};
use crate::noise::{NoiseTokenProfile, NOISE_TOKENS};
use crate::overrides::{REGEX_HINT_SPECS, TOKEN_OVERRIDES, TOPIC_OVERRIDES};

/// Confidence bump the topic table gets over the token table: topics are
/// curated by the repository owner, free text is not.
const TOPIC_TRUST_BUMP: f64 = 0.06;

/// Errors surfaced once, at construction time.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// A negative-context or hint pattern failed to compile.
    #[error("invalid pattern {pattern:?} for {tag}: {source}")]
    InvalidPattern {
        tag: &'static str,
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
    /// An override or license hint names a language the registry lacks.
    #[error("hint key {key:?} references unknown language {language:?}")]
    UnknownLanguage {
        key: &'static str,
        language: &'static str,
    },
}

/// The frozen knowledge base.
///
/// Built exactly once (see [`crate::knowledge_base`]) and never mutated;
/// concurrent readers need no synchronization.
#[derive(Debug)]
pub struct KnowledgeBase {
    token_hints: HashMap<String, WeightedHint>,
    topic_hints: HashMap<String, WeightedHint>,
    regex_hints: Vec<RegexHint>,
    aliases: HashMap<String, &'static str>,
    noise: HashMap<String, &'static NoiseTokenProfile>,
    negative_contexts: Vec<NegativeContextProfile>,
    license_hints: Vec<LicenseHint>,
}

impl KnowledgeBase {
    /// Build and validate all tables.
    pub fn build() -> Result<Self, KnowledgeError> {
        let mut token_hints: HashMap<String, WeightedHint> = HashMap::new();
        let mut topic_hints: HashMap<String, WeightedHint> = HashMap::new();
        let mut aliases: HashMap<String, &'static str> = HashMap::new();

        // Auto-generate from the taxonomy, tier by tier.
        for profile in profiles() {
            insert_generated(&mut token_hints, &mut topic_hints, profile.name, HintTier::Canonical, profile.name);
            for alias in profile.aliases {
                insert_generated(&mut token_hints, &mut topic_hints, alias, HintTier::Alias, profile.name);
                aliases.entry(normalize_key(alias)).or_insert(profile.name);
            }
            for keyword in profile.ecosystem {
                insert_generated(&mut token_hints, &mut topic_hints, keyword, HintTier::Ecosystem, profile.name);
            }
            for tag in profile.tags {
                insert_generated(&mut token_hints, &mut topic_hints, tag, HintTier::Tag, profile.name);
            }
        }

        // Overrides replace colliding generated keys outright.
        for entry in TOKEN_OVERRIDES {
            ensure_known(entry.key, entry.language)?;
            token_hints.insert(normalize_key(entry.key), entry.hint());
        }
        for entry in TOPIC_OVERRIDES {
            ensure_known(entry.key, entry.language)?;
            topic_hints.insert(normalize_key(entry.key), entry.hint());
        }

        let mut regex_hints = Vec::with_capacity(REGEX_HINT_SPECS.len());
        for spec in REGEX_HINT_SPECS {
            ensure_known(spec.pattern, spec.language)?;
            let pattern = regex::Regex::new(spec.pattern).map_err(|source| {
                KnowledgeError::InvalidPattern { tag: spec.language, pattern: spec.pattern, source }
            })?;
            regex_hints.push(RegexHint {
                pattern,
                language: spec.language,
                score: spec.score,
                confidence: spec.confidence,
            });
        }

        let mut negative_contexts = Vec::with_capacity(NEGATIVE_CONTEXT_SPECS.len());
        for spec in NEGATIVE_CONTEXT_SPECS {
            let mut patterns = Vec::with_capacity(spec.patterns.len());
            for raw in spec.patterns {
                let compiled = regex::Regex::new(raw).map_err(|source| {
                    KnowledgeError::InvalidPattern { tag: spec.tag, pattern: raw, source }
                })?;
                patterns.push(compiled);
            }
            negative_contexts.push(NegativeContextProfile {
                patterns,
                tag: spec.tag,
                penalty: spec.penalty,
                severity: spec.severity,
                reason: spec.reason,
                affected_categories: spec.affected_categories,
            });
        }

        let mut noise: HashMap<String, &'static NoiseTokenProfile> = HashMap::new();
        for profile in NOISE_TOKENS {
            noise.insert(profile.token.to_string(), profile);
            for alias in profile.aliases {
                noise.entry((*alias).to_string()).or_insert(profile);
            }
        }

        for hint in LICENSE_HINTS {
            ensure_known(hint.fragment, hint.language)?;
        }

        tracing::debug!(
            token_hints = token_hints.len(),
            topic_hints = topic_hints.len(),
            regex_hints = regex_hints.len(),
            negative_contexts = negative_contexts.len(),
            "knowledge base constructed"
        );

        Ok(Self {
            token_hints,
            topic_hints,
            regex_hints,
            aliases,
            noise,
            negative_contexts,
            license_hints: LICENSE_HINTS.to_vec(),
        })
    }

    /// Hint for a free-text token, if any.
    #[must_use]
    pub fn token_hint(&self, token: &str) -> Option<&WeightedHint> {
        self.token_hints.get(&normalize_key(token))
    }

    /// Hint for a curated topic tag, if any.
    #[must_use]
    pub fn topic_hint(&self, topic: &str) -> Option<&WeightedHint> {
        self.topic_hints.get(&normalize_key(topic))
    }

    /// Canonical language name for an alias token ("k8s" → "Kubernetes").
    #[must_use]
    pub fn canonical_alias(&self, token: &str) -> Option<&'static str> {
        self.aliases.get(&normalize_key(token)).copied()
    }

    /// Noise profile for a token, if the token is filler vocabulary.
    #[must_use]
    pub fn noise_profile(&self, token: &str) -> Option<&NoiseTokenProfile> {
        self.noise.get(&token.to_ascii_lowercase()).copied()
    }

    /// Compiled free-text regex hints.
    #[must_use]
    pub fn regex_hints(&self) -> &[RegexHint] {
        &self.regex_hints
    }

    /// Compiled negative-context archetypes.
    #[must_use]
    pub fn negative_contexts(&self) -> &[NegativeContextProfile] {
        &self.negative_contexts
    }

    /// License-fragment hints.
    #[must_use]
    pub fn license_hints(&self) -> &[LicenseHint] {
        &self.license_hints
    }

    /// Substring fallback for long compound tokens ("reactdashboard"
    /// contains "react"). Only keys of five or more characters qualify,
    /// and the strongest hint wins; key order breaks exact ties so the
    /// result is deterministic.
    #[must_use]
    pub fn substring_hint(&self, token: &str) -> Option<(&str, &WeightedHint)> {
        const MIN_KEY_LEN: usize = 5;
        let mut best: Option<(&str, &WeightedHint)> = None;
        for (key, hint) in &self.token_hints {
            if key.len() < MIN_KEY_LEN || key.len() >= token.len() || !token.contains(key.as_str()) {
                continue;
            }
            best = match best {
                None => Some((key.as_str(), hint)),
                Some((best_key, best_hint)) => {
                    if hint.strength() > best_hint.strength()
                        || (hint.strength() == best_hint.strength() && key.as_str() < best_key)
                    {
                        Some((key.as_str(), hint))
                    } else {
                        Some((best_key, best_hint))
                    }
                }
            };
        }
        best
    }

    /// Number of entries in the free-text token table.
    #[must_use]
    pub fn token_hint_count(&self) -> usize {
        self.token_hints.len()
    }
}

/// Keys are lowercased with punctuation squashed, so "Next.js", "nextjs",
/// and "NEXT-JS" collide deliberately.
fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '#' || *c == '+')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn ensure_known(key: &'static str, language: &'static str) -> Result<(), KnowledgeError> {
    if find_profile(language).is_none() {
        return Err(KnowledgeError::UnknownLanguage { key, language });
    }
    Ok(())
}

fn insert_generated(
    token_hints: &mut HashMap<String, WeightedHint>,
    topic_hints: &mut HashMap<String, WeightedHint>,
    key: &str,
    tier: HintTier,
    language: &'static str,
) {
    let key = normalize_key(key);
    if key.is_empty() {
        return;
    }
    let hint = tier.hint(language);
    merge(token_hints, key.clone(), hint.clone());

    let mut topic = hint;
    topic.confidence = (topic.confidence + TOPIC_TRUST_BUMP).min(0.99);
    merge(topic_hints, key, topic);
}

/// Conflict resolution across generation tiers: keep the entry with the
/// higher score×confidence, ties broken on specificity.
fn merge(table: &mut HashMap<String, WeightedHint>, key: String, hint: WeightedHint) {
    match table.remove(&key) {
        Some(existing) => {
            table.insert(key, existing.stronger(hint));
        }
        None => {
            table.insert(key, hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_succeeds() {
        let kb = KnowledgeBase::build().expect("knowledge base builds");
        assert!(kb.token_hint_count() > 400);
    }

    #[test]
    fn test_canonical_name_outranks_tag() {
        let kb = KnowledgeBase::build().unwrap();
        // "rust" is Rust's canonical name; some profiles carry "rust" in
        // their ecosystem lists, but the canonical tier must win.
        let hint = kb.token_hint("rust").unwrap();
        assert_eq!(hint.language, "Rust");
    }

    #[test]
    fn test_override_replaces_generated_entry() {
        let kb = KnowledgeBase::build().unwrap();
        // "go" would be a Canonical-tier hint from generation; the
        // override demotes it because it is an everyday English word.
        let hint = kb.token_hint("go").unwrap();
        assert_eq!(hint.language, "Go");
        assert!(hint.confidence < 0.5);
    }

    #[test]
    fn test_topic_table_trusted_more_than_token_table() {
        let kb = KnowledgeBase::build().unwrap();
        let token = kb.token_hint("svelte").unwrap();
        let topic = kb.topic_hint("svelte").unwrap();
        assert!(topic.confidence >= token.confidence);
    }

    #[test]
    fn test_alias_resolution() {
        let kb = KnowledgeBase::build().unwrap();
        assert_eq!(kb.canonical_alias("k8s"), Some("Kubernetes"));
        assert_eq!(kb.canonical_alias("golang"), Some("Go"));
        assert_eq!(kb.canonical_alias("unknown-thing"), None);
    }

    #[test]
    fn test_noise_aliases_resolve() {
        let kb = KnowledgeBase::build().unwrap();
        assert!(kb.noise_profile("tests").is_some());
        assert!(kb.noise_profile("boilerplate").is_some());
        assert!(kb.noise_profile("rust").is_none());
    }

    #[test]
    fn test_regex_hint_matches_dotted_name() {
        let kb = KnowledgeBase::build().unwrap();
        let hit = kb
            .regex_hints()
            .iter()
            .find(|h| h.pattern.is_match("a next.js dashboard"))
            .unwrap();
        assert_eq!(hit.language, "Next.js");
    }
}
