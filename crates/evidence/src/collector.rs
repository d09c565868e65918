//! Per-repository evidence collection.
//!
//! Turns one repository's raw metadata into a ranked, capped list of
//! scored, attributed signals. Pure and deterministic: identical input
//! and policy always produce the identical signal list, and no input
//! shape can make collection fail.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use skillprint_knowledge::{knowledge_base, KnowledgeBase, NoiseSeverity};
use skillprint_taxonomy::{infer_category_cached, InferenceCache, MapCache, SkillCategory};

use crate::input::{RepositoryEvidenceInput, SanitizedInput};
use crate::policy::EvidencePolicy;
use crate::signal::{EvidenceSignal, SignalSource, FORKED_TAG, INACTIVE_TAG};

/// Primary-language confidence before the entropy discount.
const PRIMARY_BASE_CONFIDENCE: f64 = 0.97;
/// How much a perfectly even language mix erodes primary confidence.
const ENTROPY_DISCOUNT: f64 = 0.25;
/// Byte-volume score normalization: log10(bytes) of ~1 MB maps to 1.0.
const BYTE_SCORE_LOG_SPAN: f64 = 6.0;
/// Weak-signal constants for the "*js" suffix heuristic.
const JS_SUFFIX_SCORE: f64 = 0.3;
const JS_SUFFIX_CONFIDENCE: f64 = 0.3;
/// Discount applied to hints reached via a decomposed topic sub-token.
const SUBTOKEN_DISCOUNT: f64 = 0.8;
/// Discount applied to substring-heuristic matches.
const SUBSTRING_DISCOUNT: f64 = 0.6;

/// The per-repository evidence collector.
///
/// Holds the shared knowledge base and an inference cache; both are
/// read-only or internally synchronized, so one collector can serve
/// concurrent callers.
pub struct EvidenceCollector {
    kb: &'static KnowledgeBase,
    cache: Arc<dyn InferenceCache>,
}

impl Default for EvidenceCollector {
    fn default() -> Self {
        Self {
            kb: knowledge_base(),
            cache: Arc::new(MapCache::default()),
        }
    }
}

impl EvidenceCollector {
    /// Collector with an injected inference cache.
    #[must_use]
    pub fn with_cache(cache: Arc<dyn InferenceCache>) -> Self {
        Self { kb: knowledge_base(), cache }
    }

    /// Collect all evidence signals for one repository.
    #[must_use]
    pub fn collect(
        &self,
        input: &RepositoryEvidenceInput,
        policy: &EvidencePolicy,
    ) -> Vec<EvidenceSignal> {
        let clean = input.sanitized();
        let mut signals = Vec::new();

        signals.extend(self.primary_language_signals(&clean));
        signals.extend(self.language_byte_signals(&clean, policy));
        signals.extend(self.flag_signals(&clean));
        if policy.enable_topics {
            signals.extend(self.topic_signals(&clean, policy));
        }
        if policy.enable_text {
            signals.extend(self.text_signals(&clean, policy));
        }
        if policy.enable_license {
            signals.extend(self.license_signals(&clean, policy));
        }
        if policy.enable_metadata {
            signals.extend(self.metadata_signals(&clean, policy));
        }
        signals.extend(self.negative_context_signals(&clean));

        let ranked = finalize(signals, policy);
        if ranked.is_empty() {
            tracing::debug!(repo = %clean.name, "repository produced no surviving signals");
        }
        ranked
    }

    fn category_of(&self, language: &str) -> SkillCategory {
        infer_category_cached(language, self.cache.as_ref()).category
    }

    /// Source 1: the declared primary language. Score scales with the
    /// log of total bytes; confidence erodes as the byte mix gets more
    /// even, because "the" language means less then.
    fn primary_language_signals(&self, clean: &SanitizedInput) -> Vec<EvidenceSignal> {
        let Some(language) = clean.primary_language.clone() else {
            return Vec::new();
        };
        let score = if clean.total_bytes == 0 {
            0.3
        } else {
            (((clean.total_bytes as f64) + 1.0).log10() / BYTE_SCORE_LOG_SPAN).clamp(0.3, 1.0)
        };
        let confidence =
            PRIMARY_BASE_CONFIDENCE * (1.0 - ENTROPY_DISCOUNT * language_mix_entropy(clean));
        let category = self.category_of(&language);
        vec![EvidenceSignal {
            detail: format!("declared primary language of {}", clean.name),
            language,
            category,
            source: SignalSource::PrimaryLanguage,
            score,
            confidence,
            token: None,
        }]
    }

    /// Source 2: the byte breakdown. Emitted only for positive counts.
    fn language_byte_signals(
        &self,
        clean: &SanitizedInput,
        policy: &EvidencePolicy,
    ) -> Vec<EvidenceSignal> {
        if clean.total_bytes == 0 {
            return Vec::new();
        }
        let top_bytes = clean.language_bytes[0].1 as f64;
        clean
            .language_bytes
            .iter()
            .take(policy.max_signals_per_family)
            .map(|(language, bytes)| {
                let share = *bytes as f64 / clean.total_bytes as f64;
                let dominance = *bytes as f64 / top_bytes;
                EvidenceSignal {
                    language: language.clone(),
                    category: self.category_of(language),
                    source: SignalSource::LanguageBytes,
                    score: (0.1 + 0.45 * share + 0.45 * dominance).clamp(0.0, 1.0),
                    confidence: 0.55 + 0.35 * share,
                    token: None,
                    detail: format!(
                        "{:.0}% of code bytes in {}",
                        share * 100.0,
                        clean.name
                    ),
                }
            })
            .collect()
    }

    /// Source 3: fork/archived/disabled flags as context tags. These are
    /// never skills; the aggregator uses them only for penalties.
    fn flag_signals(&self, clean: &SanitizedInput) -> Vec<EvidenceSignal> {
        let mut signals = Vec::new();
        if clean.is_fork {
            signals.push(context_signal(
                FORKED_TAG,
                SignalSource::RepoFlags,
                0.3,
                format!("{} is a fork", clean.name),
            ));
        }
        if clean.is_archived || clean.is_disabled {
            signals.push(context_signal(
                INACTIVE_TAG,
                SignalSource::RepoFlags,
                0.35,
                format!("{} is archived or disabled", clean.name),
            ));
        }
        signals
    }

    /// Source 4: curated topics, matched directly and via hyphen
    /// decomposition. Trusted above free text.
    fn topic_signals(
        &self,
        clean: &SanitizedInput,
        policy: &EvidencePolicy,
    ) -> Vec<EvidenceSignal> {
        let mut signals = Vec::new();
        for topic in &clean.topics {
            if let Some(hint) = self.kb.topic_hint(topic) {
                signals.push(EvidenceSignal {
                    language: hint.language.to_string(),
                    category: self.category_of(hint.language),
                    source: SignalSource::Topics,
                    score: hint.score * policy.topic_weight,
                    confidence: hint.confidence,
                    token: Some(topic.clone()),
                    detail: format!("topic \"{topic}\" on {}", clean.name),
                });
                continue;
            }
            for part in topic.split('-') {
                if part.len() < policy.min_token_length {
                    continue;
                }
                if matches!(
                    self.kb.noise_profile(part).map(|n| n.severity),
                    Some(NoiseSeverity::Hard)
                ) {
                    continue;
                }
                if let Some(hint) = self.kb.topic_hint(part) {
                    signals.push(EvidenceSignal {
                        language: hint.language.to_string(),
                        category: self.category_of(hint.language),
                        source: SignalSource::Topics,
                        score: hint.score * SUBTOKEN_DISCOUNT * policy.topic_weight,
                        confidence: hint.confidence * SUBTOKEN_DISCOUNT,
                        token: Some(part.to_string()),
                        detail: format!("topic \"{topic}\" on {}", clean.name),
                    });
                }
            }
        }
        cap_family(signals, policy.max_signals_per_family)
    }

    /// Source 5: free text from the name and description.
    fn text_signals(&self, clean: &SanitizedInput, policy: &EvidencePolicy) -> Vec<EvidenceSignal> {
        let mut signals = Vec::new();
        let damp = policy.text_confidence_damp();

        for token in tokenize(&clean.text) {
            if token.len() < policy.min_token_length {
                continue;
            }
            // Hard noise never matches; soft/contextual noise discounts.
            let penalty = match self.kb.noise_profile(token) {
                Some(profile) if profile.severity == NoiseSeverity::Hard => continue,
                Some(profile) => profile.penalty,
                None => 1.0,
            };

            if let Some(hint) = self.kb.token_hint(token) {
                signals.push(EvidenceSignal {
                    language: hint.language.to_string(),
                    category: self.category_of(hint.language),
                    source: SignalSource::RepoText,
                    score: hint.score * penalty * policy.text_weight,
                    confidence: hint.confidence * penalty * damp,
                    token: Some(token.to_string()),
                    detail: format!("\"{token}\" in {} text", clean.name),
                });
                continue;
            }

            // Suffix heuristic: "gatsbyjs" resolves via its stem when the
            // stem is known, and otherwise weakly implies JavaScript.
            if let Some(stem) = token.strip_suffix("js").filter(|s| !s.is_empty()) {
                if let Some(hint) = self.kb.token_hint(stem) {
                    signals.push(EvidenceSignal {
                        language: hint.language.to_string(),
                        category: self.category_of(hint.language),
                        source: SignalSource::RepoText,
                        score: hint.score * 0.9 * penalty * policy.text_weight,
                        confidence: hint.confidence * 0.9 * penalty * damp,
                        token: Some(token.to_string()),
                        detail: format!("\"{token}\" in {} text", clean.name),
                    });
                } else {
                    signals.push(EvidenceSignal {
                        language: "JavaScript".to_string(),
                        category: self.category_of("JavaScript"),
                        source: SignalSource::RepoText,
                        score: JS_SUFFIX_SCORE * penalty * policy.text_weight,
                        confidence: JS_SUFFIX_CONFIDENCE * penalty * damp,
                        token: Some(token.to_string()),
                        detail: format!("\"{token}\" suffix in {} text", clean.name),
                    });
                }
                continue;
            }

            // Substring heuristic for long glued-together tokens.
            if token.len() >= 8 {
                if let Some((key, hint)) = self.kb.substring_hint(token) {
                    signals.push(EvidenceSignal {
                        language: hint.language.to_string(),
                        category: self.category_of(hint.language),
                        source: SignalSource::RepoText,
                        score: hint.score * SUBSTRING_DISCOUNT * penalty * policy.text_weight,
                        confidence: hint.confidence * SUBSTRING_DISCOUNT * penalty * damp,
                        token: Some(key.to_string()),
                        detail: format!("\"{key}\" inside \"{token}\" in {} text", clean.name),
                    });
                }
            }
        }

        // Regex hints see punctuation that tokenization destroys.
        for hint in self.kb.regex_hints() {
            if let Some(found) = hint.pattern.find(&clean.text) {
                signals.push(EvidenceSignal {
                    language: hint.language.to_string(),
                    category: self.category_of(hint.language),
                    source: SignalSource::RepoText,
                    score: hint.score * policy.text_weight,
                    confidence: hint.confidence * damp,
                    token: Some(found.as_str().to_string()),
                    detail: format!("\"{}\" in {} text", found.as_str(), clean.name),
                });
            }
        }

        cap_family(signals, policy.max_signals_per_family)
    }

    /// Source 6: license-name fragments, deliberately weak.
    fn license_signals(
        &self,
        clean: &SanitizedInput,
        policy: &EvidencePolicy,
    ) -> Vec<EvidenceSignal> {
        let haystack = clean.license.as_deref().unwrap_or(&clean.text);
        let mut signals = Vec::new();
        for hint in self.kb.license_hints() {
            if haystack.contains(hint.fragment) {
                signals.push(EvidenceSignal {
                    language: hint.language.to_string(),
                    category: self.category_of(hint.language),
                    source: SignalSource::License,
                    score: hint.score * policy.license_weight,
                    confidence: hint.confidence,
                    token: Some(hint.fragment.to_string()),
                    detail: format!("license mentions \"{}\"", hint.fragment),
                });
            }
        }
        signals
    }

    /// Source 7: minor metadata hints.
    fn metadata_signals(
        &self,
        clean: &SanitizedInput,
        policy: &EvidencePolicy,
    ) -> Vec<EvidenceSignal> {
        let mut signals = Vec::new();
        if clean.has_wiki {
            signals.push(EvidenceSignal {
                language: "Markdown".to_string(),
                category: self.category_of("Markdown"),
                source: SignalSource::RepoMetadata,
                score: 0.2 * policy.metadata_weight,
                confidence: 0.3,
                token: None,
                detail: format!("{} maintains a wiki", clean.name),
            });
        }
        if clean.has_pages {
            signals.push(EvidenceSignal {
                language: "HTML".to_string(),
                category: self.category_of("HTML"),
                source: SignalSource::RepoMetadata,
                score: 0.25 * policy.metadata_weight,
                confidence: 0.35,
                token: None,
                detail: format!("{} serves a pages site", clean.name),
            });
        }
        signals
    }

    /// Source 8: archetype detection, recorded as penalty-carrying
    /// context tags for the aggregator.
    fn negative_context_signals(&self, clean: &SanitizedInput) -> Vec<EvidenceSignal> {
        self.kb
            .negative_contexts()
            .iter()
            .filter(|profile| profile.matches(&clean.text))
            .map(|profile| {
                context_signal(
                    profile.tag,
                    SignalSource::NegativeContext,
                    profile.penalty,
                    format!("{}: {}", clean.name, profile.reason),
                )
            })
            .collect()
    }
}

/// Gather → dedupe → floor → blend → rank → truncate.
fn finalize(signals: Vec<EvidenceSignal>, policy: &EvidencePolicy) -> Vec<EvidenceSignal> {
    // Dedupe by (language, source, token), keeping the higher strength.
    let mut best: HashMap<(String, SignalSource, Option<String>), EvidenceSignal> = HashMap::new();
    for signal in signals.into_iter().map(EvidenceSignal::clamped) {
        match best.entry(signal.dedupe_key()) {
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                if signal.strength() > slot.get().strength() {
                    slot.insert(signal);
                }
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(signal);
            }
        }
    }

    let min_score = policy.effective_min_score();
    let mut survivors: Vec<EvidenceSignal> = best
        .into_values()
        .filter(|s| s.score >= min_score && s.confidence >= policy.min_signal_confidence)
        .map(|mut s| {
            // Blend stated confidence toward the source's reliability.
            s.confidence = (s.confidence + s.source.reliability()) / 2.0;
            s
        })
        .collect();

    survivors.sort_by(|a, b| {
        b.strength()
            .partial_cmp(&a.strength())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.language.cmp(&b.language))
            .then_with(|| a.source.label().cmp(b.source.label()))
            .then_with(|| a.token.cmp(&b.token))
    });
    // The per-repo cap applies to real evidence only; context tags
    // always survive it.
    let (mut ranked, context): (Vec<_>, Vec<_>) = survivors
        .into_iter()
        .partition(|s| !s.source.is_context_only());
    ranked.truncate(policy.max_signals_per_repo);
    ranked.extend(context);
    ranked
}

/// Strongest-first cap applied within one source family.
fn cap_family(mut signals: Vec<EvidenceSignal>, cap: usize) -> Vec<EvidenceSignal> {
    if signals.len() > cap {
        signals.sort_by(|a, b| {
            b.strength()
                .partial_cmp(&a.strength())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.language.cmp(&b.language))
        });
        signals.truncate(cap);
    }
    signals
}

fn context_signal(
    tag: &str,
    source: SignalSource,
    score: f64,
    detail: String,
) -> EvidenceSignal {
    EvidenceSignal {
        language: tag.to_string(),
        category: SkillCategory::default(),
        source,
        score,
        confidence: 0.9,
        token: None,
        detail,
    }
}

/// Split lowercased text into matchable tokens, deduplicated while
/// preserving first-seen order.
fn tokenize(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for token in text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '#' || c == '+')) {
        if !token.is_empty() && seen.insert(token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Shannon entropy of the byte-share distribution, normalized to [0, 1].
/// Zero for a single language; one for a perfectly even split.
fn language_mix_entropy(clean: &SanitizedInput) -> f64 {
    let n = clean.language_bytes.len();
    if n < 2 || clean.total_bytes == 0 {
        return 0.0;
    }
    let total = clean.total_bytes as f64;
    let entropy: f64 = clean
        .language_bytes
        .iter()
        .map(|(_, bytes)| {
            let p = *bytes as f64 / total;
            -p * p.ln()
        })
        .sum();
    (entropy / (n as f64).ln()).clamp(0.0, 1.0)
}
