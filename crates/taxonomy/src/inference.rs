//! Category inference for arbitrary technology names.
//!
//! Maps any input string to exactly one [`SkillCategory`] plus a
//! calibrated confidence. The algorithm is a pure function of the static
//! registry: normalize, seed scores from a matched profile, accumulate
//! generic keyword and regex evidence, pick the argmax with a fixed
//! tie-break, and calibrate confidence from dominance and margin.

use std::collections::HashMap;
use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::category::SkillCategory;
use crate::registry::find_profile;

/// Confidence formula coefficients.
const CONFIDENCE_BASE: f64 = 0.32;
const DOMINANCE_WEIGHT: f64 = 0.38;
const MARGIN_WEIGHT: f64 = 0.30;
/// Confidence bounds for any inference result.
const CONFIDENCE_FLOOR: f64 = 0.2;
const CONFIDENCE_CEILING: f64 = 0.99;
/// Damping applied when Backend wins only through the fallback path.
const DEFAULT_PATH_DAMP: f64 = 0.82;
/// Seed weight for the documented zero-evidence fallback.
const DEFAULT_BACKEND_WEIGHT: f64 = 0.3;
/// A winning score below this means the result came from the default path.
const DEFAULT_PATH_THRESHOLD: f64 = 0.5;

/// Result of inferring a category for one name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInference {
    /// The winning category.
    pub category: SkillCategory,
    /// Calibrated confidence in [0.2, 0.99].
    pub confidence: f64,
    /// The normalized form of the input the result was computed from.
    pub normalized_name: String,
    /// Per-category accumulated scores, for explainability.
    pub breakdown: Vec<(SkillCategory, f64)>,
}

/// Cache seam for memoizing inference results.
///
/// The inference function is pure over a fixed registry, so every cached
/// entry is permanently valid; strategies differ only in retention.
pub trait InferenceCache: Send + Sync {
    /// Look up a previously computed result by normalized name.
    fn get(&self, normalized: &str) -> Option<CategoryInference>;
    /// Store a computed result.
    fn put(&self, normalized: &str, inference: CategoryInference);
}

/// Unbounded map-backed cache, safe for concurrent readers.
#[derive(Debug, Default)]
pub struct MapCache {
    entries: RwLock<HashMap<String, CategoryInference>>,
}

impl InferenceCache for MapCache {
    fn get(&self, normalized: &str) -> Option<CategoryInference> {
        self.entries.read().get(normalized).cloned()
    }

    fn put(&self, normalized: &str, inference: CategoryInference) {
        self.entries.write().insert(normalized.to_string(), inference);
    }
}

/// Cache that never retains anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl InferenceCache for NoCache {
    fn get(&self, _normalized: &str) -> Option<CategoryInference> {
        None
    }

    fn put(&self, _normalized: &str, _inference: CategoryInference) {}
}

/// Generic domain keywords and the category weight each carries.
///
/// These fire on tokenized names independently of any registry profile,
/// so "my-frontend-dashboard" leans Frontend even though no technology
/// is named.
const KEYWORD_WEIGHTS: &[(&str, SkillCategory, f64)] = &[
    // Frontend vocabulary
    ("frontend", SkillCategory::Frontend, 0.6),
    ("front", SkillCategory::Frontend, 0.3),
    ("ui", SkillCategory::Frontend, 0.45),
    ("ux", SkillCategory::Frontend, 0.4),
    ("web", SkillCategory::Frontend, 0.3),
    ("website", SkillCategory::Frontend, 0.45),
    ("webapp", SkillCategory::Frontend, 0.45),
    ("browser", SkillCategory::Frontend, 0.4),
    ("component", SkillCategory::Frontend, 0.35),
    ("dashboard", SkillCategory::Frontend, 0.4),
    ("widget", SkillCategory::Frontend, 0.35),
    ("spa", SkillCategory::Frontend, 0.45),
    ("pwa", SkillCategory::Frontend, 0.45),
    ("responsive", SkillCategory::Frontend, 0.4),
    ("css", SkillCategory::Frontend, 0.45),
    ("style", SkillCategory::Frontend, 0.3),
    ("theme", SkillCategory::Frontend, 0.35),
    ("animation", SkillCategory::Frontend, 0.35),
    ("canvas", SkillCategory::Frontend, 0.35),
    ("mobile", SkillCategory::Frontend, 0.35),
    ("app", SkillCategory::Frontend, 0.2),
    ("design", SkillCategory::Frontend, 0.25),
    ("portfolio", SkillCategory::Frontend, 0.35),
    ("landing", SkillCategory::Frontend, 0.4),
    // Backend vocabulary
    ("backend", SkillCategory::Backend, 0.6),
    ("server", SkillCategory::Backend, 0.4),
    ("api", SkillCategory::Backend, 0.45),
    ("rest", SkillCategory::Backend, 0.4),
    ("graphql", SkillCategory::Backend, 0.35),
    ("service", SkillCategory::Backend, 0.3),
    ("microservice", SkillCategory::Backend, 0.5),
    ("endpoint", SkillCategory::Backend, 0.4),
    ("auth", SkillCategory::Backend, 0.35),
    ("authentication", SkillCategory::Backend, 0.4),
    ("middleware", SkillCategory::Backend, 0.4),
    ("webhook", SkillCategory::Backend, 0.4),
    ("worker", SkillCategory::Backend, 0.3),
    ("queue", SkillCategory::Backend, 0.3),
    ("scheduler", SkillCategory::Backend, 0.3),
    ("cli", SkillCategory::Backend, 0.3),
    ("parser", SkillCategory::Backend, 0.3),
    ("compiler", SkillCategory::Backend, 0.35),
    ("engine", SkillCategory::Backend, 0.25),
    ("bot", SkillCategory::Backend, 0.3),
    ("scraper", SkillCategory::Backend, 0.35),
    ("crawler", SkillCategory::Backend, 0.35),
    ("sdk", SkillCategory::Backend, 0.3),
    ("library", SkillCategory::Backend, 0.2),
    ("framework", SkillCategory::Backend, 0.2),
    // Infrastructure vocabulary
    ("infrastructure", SkillCategory::Infrastructure, 0.6),
    ("infra", SkillCategory::Infrastructure, 0.55),
    ("cloud", SkillCategory::Infrastructure, 0.45),
    ("kubernetes", SkillCategory::Infrastructure, 0.55),
    ("container", SkillCategory::Infrastructure, 0.45),
    ("docker", SkillCategory::Infrastructure, 0.5),
    ("cluster", SkillCategory::Infrastructure, 0.4),
    ("network", SkillCategory::Infrastructure, 0.4),
    ("networking", SkillCategory::Infrastructure, 0.45),
    ("proxy", SkillCategory::Infrastructure, 0.4),
    ("loadbalancer", SkillCategory::Infrastructure, 0.45),
    ("dns", SkillCategory::Infrastructure, 0.4),
    ("vpn", SkillCategory::Infrastructure, 0.4),
    ("serverless", SkillCategory::Infrastructure, 0.4),
    ("lambda", SkillCategory::Infrastructure, 0.35),
    ("terraform", SkillCategory::Infrastructure, 0.5),
    ("provisioning", SkillCategory::Infrastructure, 0.45),
    ("kernel", SkillCategory::Infrastructure, 0.45),
    ("embedded", SkillCategory::Infrastructure, 0.45),
    ("firmware", SkillCategory::Infrastructure, 0.45),
    ("systems", SkillCategory::Infrastructure, 0.3),
    ("os", SkillCategory::Infrastructure, 0.25),
    ("edge", SkillCategory::Infrastructure, 0.3),
    ("cdn", SkillCategory::Infrastructure, 0.4),
    ("hosting", SkillCategory::Infrastructure, 0.35),
    // Database vocabulary
    ("database", SkillCategory::Database, 0.6),
    ("db", SkillCategory::Database, 0.4),
    ("sql", SkillCategory::Database, 0.5),
    ("nosql", SkillCategory::Database, 0.5),
    ("query", SkillCategory::Database, 0.3),
    ("storage", SkillCategory::Database, 0.35),
    ("cache", SkillCategory::Database, 0.3),
    ("orm", SkillCategory::Database, 0.45),
    ("migration", SkillCategory::Database, 0.35),
    ("schema", SkillCategory::Database, 0.3),
    ("index", SkillCategory::Database, 0.2),
    ("warehouse", SkillCategory::Database, 0.45),
    ("etl", SkillCategory::Database, 0.4),
    ("datastore", SkillCategory::Database, 0.5),
    ("persistence", SkillCategory::Database, 0.4),
    // AI/ML vocabulary
    ("ai", SkillCategory::AiMl, 0.5),
    ("ml", SkillCategory::AiMl, 0.5),
    ("machine", SkillCategory::AiMl, 0.2),
    ("learning", SkillCategory::AiMl, 0.25),
    ("neural", SkillCategory::AiMl, 0.5),
    ("model", SkillCategory::AiMl, 0.25),
    ("training", SkillCategory::AiMl, 0.3),
    ("inference", SkillCategory::AiMl, 0.35),
    ("llm", SkillCategory::AiMl, 0.55),
    ("gpt", SkillCategory::AiMl, 0.45),
    ("agent", SkillCategory::AiMl, 0.3),
    ("embedding", SkillCategory::AiMl, 0.45),
    ("rag", SkillCategory::AiMl, 0.45),
    ("nlp", SkillCategory::AiMl, 0.5),
    ("vision", SkillCategory::AiMl, 0.35),
    ("classifier", SkillCategory::AiMl, 0.45),
    ("prediction", SkillCategory::AiMl, 0.4),
    ("dataset", SkillCategory::AiMl, 0.35),
    ("analytics", SkillCategory::AiMl, 0.3),
    ("statistics", SkillCategory::AiMl, 0.35),
    ("notebook", SkillCategory::AiMl, 0.3),
    ("tensor", SkillCategory::AiMl, 0.45),
    ("genai", SkillCategory::AiMl, 0.5),
    ("chatbot", SkillCategory::AiMl, 0.4),
    // DevOps vocabulary
    ("devops", SkillCategory::DevOps, 0.6),
    ("ci", SkillCategory::DevOps, 0.4),
    ("cd", SkillCategory::DevOps, 0.35),
    ("cicd", SkillCategory::DevOps, 0.55),
    ("pipeline", SkillCategory::DevOps, 0.4),
    ("deploy", SkillCategory::DevOps, 0.45),
    ("deployment", SkillCategory::DevOps, 0.45),
    ("release", SkillCategory::DevOps, 0.3),
    ("build", SkillCategory::DevOps, 0.25),
    ("automation", SkillCategory::DevOps, 0.35),
    ("monitoring", SkillCategory::DevOps, 0.45),
    ("observability", SkillCategory::DevOps, 0.5),
    ("logging", SkillCategory::DevOps, 0.35),
    ("metrics", SkillCategory::DevOps, 0.35),
    ("alerting", SkillCategory::DevOps, 0.45),
    ("gitops", SkillCategory::DevOps, 0.5),
    ("workflow", SkillCategory::DevOps, 0.3),
    ("tooling", SkillCategory::DevOps, 0.25),
    ("testing", SkillCategory::DevOps, 0.25),
    ("lint", SkillCategory::DevOps, 0.3),
];

/// A multi-word pattern rule contributing category weight.
struct RegexRule {
    pattern: &'static Regex,
    category: SkillCategory,
    weight: f64,
}

macro_rules! rule_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new($pattern).unwrap_or_else(|e| panic!("invalid rule pattern: {e}"))
        });
    };
}

rule_regex!(RE_MACHINE_LEARNING, r"machine[\s-]?learning|deep[\s-]?learning");
rule_regex!(RE_DATA_SCIENCE, r"data[\s-]?(science|analysis|mining)");
rule_regex!(RE_STATIC_SITE, r"static[\s-]?site|jam[\s-]?stack");
rule_regex!(RE_SINGLE_PAGE, r"single[\s-]?page[\s-]?app");
rule_regex!(RE_REST_API, r"rest(ful)?[\s-]?api|web[\s-]?service");
rule_regex!(RE_CI_CD, r"ci[\s/-]?cd|continuous[\s-]?(integration|deliver|deployment)");
rule_regex!(RE_IAC, r"infrastructure[\s-]?as[\s-]?code");
rule_regex!(RE_FULL_TEXT, r"full[\s-]?text[\s-]?search");
rule_regex!(RE_TIME_SERIES, r"time[\s-]?series");
rule_regex!(RE_COMPUTER_VISION, r"computer[\s-]?vision|image[\s-]?recognition");
rule_regex!(RE_DESIGN_SYSTEM, r"design[\s-]?system|component[\s-]?library");
rule_regex!(RE_MESSAGE_QUEUE, r"message[\s-]?(queue|broker)|event[\s-]?stream");

static REGEX_RULES: LazyLock<Vec<RegexRule>> = LazyLock::new(|| {
    vec![
        RegexRule { pattern: &RE_MACHINE_LEARNING, category: SkillCategory::AiMl, weight: 0.55 },
        RegexRule { pattern: &RE_DATA_SCIENCE, category: SkillCategory::AiMl, weight: 0.5 },
        RegexRule { pattern: &RE_COMPUTER_VISION, category: SkillCategory::AiMl, weight: 0.5 },
        RegexRule { pattern: &RE_STATIC_SITE, category: SkillCategory::Frontend, weight: 0.45 },
        RegexRule { pattern: &RE_SINGLE_PAGE, category: SkillCategory::Frontend, weight: 0.5 },
        RegexRule { pattern: &RE_DESIGN_SYSTEM, category: SkillCategory::Frontend, weight: 0.45 },
        RegexRule { pattern: &RE_REST_API, category: SkillCategory::Backend, weight: 0.5 },
        RegexRule { pattern: &RE_MESSAGE_QUEUE, category: SkillCategory::Backend, weight: 0.4 },
        RegexRule { pattern: &RE_CI_CD, category: SkillCategory::DevOps, weight: 0.55 },
        RegexRule { pattern: &RE_IAC, category: SkillCategory::Infrastructure, weight: 0.55 },
        RegexRule { pattern: &RE_FULL_TEXT, category: SkillCategory::Database, weight: 0.45 },
        RegexRule { pattern: &RE_TIME_SERIES, category: SkillCategory::Database, weight: 0.4 },
    ]
});

/// Normalize a raw name: case-fold, split camelCase, collapse separator
/// runs to single spaces.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 8);
    let chars: Vec<char> = raw.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && chars[i - 1].is_lowercase();
            let next_lower = i + 1 < chars.len() && chars[i + 1].is_lowercase();
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                spaced.push(' ');
            }
        }
        spaced.push(c);
    }

    let lowered = spaced.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut last_was_space = true;
    for c in lowered.chars() {
        if matches!(c, '-' | '_' | '.' | '/' | '+' | ' ' | '\t' | '\n' | '\r') {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out.trim().to_string()
}

/// Infer the skill category for an arbitrary technology name.
///
/// Total over all strings: empty, punctuation-only, and unknown inputs
/// fall through to the Backend default at low confidence. Never panics.
#[must_use]
pub fn infer_category(name: &str) -> CategoryInference {
    let normalized = normalize_name(name);
    let mut scores: HashMap<SkillCategory, f64> = HashMap::new();

    // Seed from an exact or alias profile match.
    let profile = find_profile(name).or_else(|| find_profile(&normalized));
    if let Some(profile) = profile {
        for (category, weight) in profile.weights {
            *scores.entry(*category).or_insert(0.0) += weight;
        }
    }

    // Tokenize the name together with the matched profile's vocabulary.
    let mut corpus = normalized.clone();
    if let Some(profile) = profile {
        for word in profile
            .aliases
            .iter()
            .chain(profile.ecosystem.iter())
            .chain(profile.tags.iter())
        {
            corpus.push(' ');
            corpus.push_str(&word.to_ascii_lowercase());
        }
    }

    let tokens: std::collections::HashSet<&str> = corpus.split_whitespace().collect();
    for (keyword, category, weight) in KEYWORD_WEIGHTS {
        if tokens.contains(keyword) {
            *scores.entry(*category).or_insert(0.0) += weight;
        }
    }
    for rule in REGEX_RULES.iter() {
        if rule.pattern.is_match(&corpus) {
            *scores.entry(rule.category).or_insert(0.0) += rule.weight;
        }
    }

    // Documented fallback: unknown names lean Backend at low weight.
    let defaulted = scores.values().all(|s| *s <= 0.0);
    if defaulted {
        tracing::debug!(name = %normalized, "no category evidence, defaulting to backend");
        scores.insert(SkillCategory::Backend, DEFAULT_BACKEND_WEIGHT);
    }

    let mut breakdown: Vec<(SkillCategory, f64)> = SkillCategory::PRIORITY
        .iter()
        .map(|c| (*c, scores.get(c).copied().unwrap_or(0.0)))
        .collect();
    breakdown.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.priority_rank().cmp(&b.0.priority_rank()))
    });

    let (category, winner) = breakdown[0];
    let runner_up = breakdown[1].1;
    let total: f64 = breakdown.iter().map(|(_, s)| s).sum();

    // The injected default is not evidence; it must not read as a
    // unanimous win.
    let dominance = if defaulted || total <= 0.0 { 0.0 } else { winner / total };
    let margin = if defaulted || winner <= 0.0 { 0.0 } else { (winner - runner_up) / winner };
    let mut confidence = CONFIDENCE_BASE
        + DOMINANCE_WEIGHT * dominance.clamp(0.0, 1.0)
        + MARGIN_WEIGHT * margin.clamp(0.0, 1.0);
    if category == SkillCategory::Backend && winner < DEFAULT_PATH_THRESHOLD {
        confidence *= DEFAULT_PATH_DAMP;
    }
    let confidence = confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    CategoryInference {
        category,
        confidence,
        normalized_name: normalized,
        breakdown,
    }
}

/// Memoizing wrapper around [`infer_category`].
pub fn infer_category_cached(name: &str, cache: &dyn InferenceCache) -> CategoryInference {
    let normalized = normalize_name(name);
    if let Some(hit) = cache.get(&normalized) {
        return hit;
    }
    let inference = infer_category(name);
    cache.put(&normalized, inference.clone());
    inference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_camel_case() {
        assert_eq!(normalize_name("NextJS"), "next js");
        assert_eq!(normalize_name("myCoolProject"), "my cool project");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_name("foo--bar__baz..qux"), "foo bar baz qux");
        assert_eq!(normalize_name("  React.js  "), "react js");
    }

    #[test]
    fn test_known_frontend_technology() {
        let inference = infer_category("React");
        assert_eq!(inference.category, SkillCategory::Frontend);
        assert!(inference.confidence > 0.5);
    }

    #[test]
    fn test_known_database_technology() {
        let inference = infer_category("PostgreSQL");
        assert_eq!(inference.category, SkillCategory::Database);
    }

    #[test]
    fn test_alias_matches_canonical() {
        let alias = infer_category("k8s");
        let canonical = infer_category("kubernetes");
        assert_eq!(alias.category, canonical.category);
        assert_eq!(alias.category, SkillCategory::Infrastructure);
    }

    #[test]
    fn test_unknown_name_defaults_to_backend_low_confidence() {
        let inference = infer_category("zzzxqwyt");
        assert_eq!(inference.category, SkillCategory::Backend);
        assert!(inference.confidence < 0.62, "default path must stay modest");
    }

    #[test]
    fn test_empty_and_punctuation_inputs_are_total() {
        for input in ["", "   ", "---", "!!!", "___...___"] {
            let inference = infer_category(input);
            assert!(inference.confidence >= CONFIDENCE_FLOOR);
            assert!(inference.confidence <= CONFIDENCE_CEILING);
        }
    }

    #[test]
    fn test_generic_keywords_steer_category() {
        let inference = infer_category("ml-training-pipeline-for-vision");
        assert_eq!(inference.category, SkillCategory::AiMl);
    }

    #[test]
    fn test_regex_rule_fires_on_multiword_pattern() {
        let inference = infer_category("machine-learning-sandbox");
        assert_eq!(inference.category, SkillCategory::AiMl);
    }

    #[test]
    fn test_confidence_stays_in_bounds() {
        for input in ["React", "unknown-thing", "devops", "a", "PostgreSQL MySQL Redis"] {
            let c = infer_category(input).confidence;
            assert!((CONFIDENCE_FLOOR..=CONFIDENCE_CEILING).contains(&c), "{input}: {c}");
        }
    }

    #[test]
    fn test_cached_result_matches_uncached() {
        let cache = MapCache::default();
        let first = infer_category_cached("Terraform", &cache);
        let second = infer_category_cached("terraform", &cache);
        assert_eq!(first.category, second.category);
        assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn test_no_cache_recomputes() {
        let a = infer_category_cached("Svelte", &NoCache);
        let b = infer_category_cached("Svelte", &NoCache);
        assert_eq!(a.category, b.category);
    }

    #[test]
    fn test_breakdown_covers_all_six_categories() {
        let inference = infer_category("anything");
        assert_eq!(inference.breakdown.len(), 6);
    }
}
