//! Cross-repository evidence aggregation and confidence scoring.
//!
//! Folds every repository's signal list into one aggregate per language,
//! then reduces each aggregate to a calibrated confidence, a bounded
//! negative-context penalty, and a capped set of display highlights.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use skillprint_taxonomy::{infer_category, SkillCategory};

use crate::explain;
use crate::signal::{EvidenceSignal, SignalSource};

/// Confidence formula weights.
const DENSITY_WEIGHT: f64 = 0.46;
const COVERAGE_WEIGHT: f64 = 0.24;
const SOURCE_DIVERSITY_WEIGHT: f64 = 0.18;
const TOKEN_DIVERSITY_WEIGHT: f64 = 0.12;
/// Per-repo smoothing added to the density denominator.
const DENSITY_SMOOTHING: f64 = 0.15;
/// Token-diversity log scale; ~10 distinct tokens saturate the term.
const TOKEN_DIVERSITY_SPAN: f64 = 3.5;
/// Hard cap on the accumulated negative-context penalty.
const PENALTY_CAP: f64 = 0.24;
/// Inference must be at least this confident to override a category
/// assigned from collected signals.
const CATEGORY_OVERRIDE_THRESHOLD: f64 = 0.62;
/// Highlights kept per skill record.
const HIGHLIGHT_CAP: usize = 6;

/// Per-occurrence penalty weight for a context tag. Unlisted tags get
/// the default; the cap keeps the total bounded either way.
fn context_tag_weight(tag: &str) -> f64 {
    match tag {
        "TemplateRepository" | "CuratedListRepository" | "TestPlaceholderRepository"
        | "MonorepoTemplateRepository" => 0.05,
        "ExampleRepository" | "ConfigRepository" | "GeneratedRepository"
        | "AssetOnlyRepository" => 0.04,
        "PersonalSiteRepository" | "StaticSiteRepository" | "MigratedRepository" => 0.02,
        _ => 0.03,
    }
}

/// Whether a context tag's penalty applies to skills of this category.
/// Tags without a knowledge-base profile (the repository flags) apply
/// to every category.
fn tag_affects(tag: &str, category: SkillCategory) -> bool {
    skillprint_knowledge::knowledge_base()
        .negative_contexts()
        .iter()
        .find(|profile| profile.tag == tag)
        .map_or(true, |profile| profile.affects(category))
}

/// Running evidence totals for one language across all scanned repos.
///
/// Lives for one profile computation, then is reduced and discarded.
#[derive(Debug, Clone)]
pub struct LanguageEvidenceAggregate {
    /// Canonical language name.
    pub language: String,
    /// Category carried from collected signals; may be overridden by a
    /// confident inference at reduce time.
    pub category: SkillCategory,
    /// Sum of signal scores.
    pub score_sum: f64,
    /// Sum of score × confidence.
    pub weighted_score_sum: f64,
    /// Signal counts per source kind.
    pub source_counts: HashMap<SignalSource, usize>,
    /// Distinct matched tokens.
    pub tokens: BTreeSet<String>,
    /// Deduplicated display highlights.
    pub highlights: BTreeSet<String>,
    /// Repositories counting toward coverage. A repository discounted
    /// by a context tag stays out of this set even when its evidence
    /// folds in.
    pub repos: BTreeSet<String>,
    /// Every repository that contributed evidence, context-tagged or
    /// not. Scales the density smoothing.
    pub evidence_repos: BTreeSet<String>,
    /// Context-tag occurrence counts from contributing repositories.
    pub context_counts: BTreeMap<String, usize>,
    /// Running maximum of the calibrated confidence across the fold.
    pub confidence_floor: f64,
}

impl LanguageEvidenceAggregate {
    fn new(language: String, category: SkillCategory) -> Self {
        Self {
            language,
            category,
            score_sum: 0.0,
            weighted_score_sum: 0.0,
            source_counts: HashMap::new(),
            tokens: BTreeSet::new(),
            highlights: BTreeSet::new(),
            repos: BTreeSet::new(),
            evidence_repos: BTreeSet::new(),
            context_counts: BTreeMap::new(),
            confidence_floor: 0.0,
        }
    }
}

/// One entry of the final skill profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Canonical language/technology name.
    pub name: String,
    /// Resolved category.
    pub category: SkillCategory,
    /// Raw calibrated confidence in [0, 1].
    pub confidence: f64,
    /// Confidence as a display percentage.
    pub confidence_pct: u8,
    /// Confidence after the negative-context penalty; what a UI should
    /// rank and show.
    pub display_score: f64,
    /// The applied penalty, kept separate so the gap is explainable.
    pub context_penalty: f64,
    /// Capped evidence highlights.
    pub highlights: Vec<String>,
    /// Number of contributing repositories.
    pub repo_count: usize,
    /// Number of distinct matched tokens.
    pub token_count: usize,
}

/// Folds per-repository signal lists into per-language aggregates.
///
/// One aggregator per profile computation; instances share no state, so
/// independent users can be scored concurrently without coordination.
#[derive(Debug)]
pub struct EvidenceAggregator {
    aggregates: HashMap<String, LanguageEvidenceAggregate>,
    total_repos_scanned: usize,
    eligible_sources: usize,
}

impl EvidenceAggregator {
    /// `total_repos_scanned` is the user's full scanned count (for the
    /// coverage term); `eligible_sources` the number of enabled
    /// non-context source families (for source diversity).
    #[must_use]
    pub fn new(total_repos_scanned: usize, eligible_sources: usize) -> Self {
        Self {
            aggregates: HashMap::new(),
            total_repos_scanned: total_repos_scanned.max(1),
            eligible_sources: eligible_sources.max(1),
        }
    }

    /// Fold one repository's collected signals into the aggregates.
    ///
    /// A context-tagged repository still contributes its evidence, but
    /// stays out of the coverage sets of the languages its tags
    /// discount; the tags become penalties on those languages instead.
    pub fn add_repository(&mut self, repo_name: &str, signals: &[EvidenceSignal]) {
        let context_tags: Vec<&EvidenceSignal> =
            signals.iter().filter(|s| s.source.is_context_only()).collect();

        let mut touched: BTreeSet<String> = BTreeSet::new();
        for signal in signals.iter().filter(|s| !s.source.is_context_only()) {
            let aggregate = self
                .aggregates
                .entry(signal.language.clone())
                .or_insert_with(|| {
                    LanguageEvidenceAggregate::new(signal.language.clone(), signal.category)
                });
            aggregate.score_sum += signal.score;
            aggregate.weighted_score_sum += signal.score * signal.confidence;
            *aggregate.source_counts.entry(signal.source).or_insert(0) += 1;
            if let Some(token) = &signal.token {
                aggregate.tokens.insert(token.clone());
            }
            if let Some(highlight) = explain::highlight(signal) {
                aggregate.highlights.insert(highlight);
            }
            aggregate.evidence_repos.insert(repo_name.to_string());
            let discounted = context_tags
                .iter()
                .any(|tag| tag_affects(&tag.language, aggregate.category));
            if !discounted {
                aggregate.repos.insert(repo_name.to_string());
            }
            touched.insert(signal.language.clone());
        }

        // A repository's context tags discount every language it
        // contributed evidence for, once per tag per repo, subject to
        // the tag's category scope.
        for language in &touched {
            if let Some(aggregate) = self.aggregates.get_mut(language) {
                for tag in &context_tags {
                    if !tag_affects(&tag.language, aggregate.category) {
                        continue;
                    }
                    *aggregate.context_counts.entry(tag.language.clone()).or_insert(0) += 1;
                }
                // Extra corroboration can only raise the calibrated
                // confidence, never lower it.
                let confidence = calibrated_confidence(
                    aggregate,
                    self.total_repos_scanned,
                    self.eligible_sources,
                );
                aggregate.confidence_floor = aggregate.confidence_floor.max(confidence);
            }
        }
    }

    /// Reduce every aggregate to an ordered skill list.
    ///
    /// Languages whose only contributions were context tags never get an
    /// aggregate in the first place, so nothing context-only can surface
    /// as a skill here.
    #[must_use]
    pub fn finish(self) -> Vec<SkillRecord> {
        let mut records: Vec<SkillRecord> = self
            .aggregates
            .into_values()
            .map(|aggregate| reduce(aggregate, self.total_repos_scanned, self.eligible_sources))
            .collect();
        records.sort_by(|a, b| {
            b.display_score
                .partial_cmp(&a.display_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        records
    }
}

fn reduce(
    aggregate: LanguageEvidenceAggregate,
    total_repos: usize,
    eligible_sources: usize,
) -> SkillRecord {
    let confidence = calibrated_confidence(&aggregate, total_repos, eligible_sources)
        .max(aggregate.confidence_floor);

    let penalty = context_penalty(&aggregate.context_counts);
    let display_score = (confidence * (1.0 - penalty)).clamp(0.0, 1.0);

    // A confident fresh inference may override the carried category;
    // marginal inference keeps the prior. Signals collected by this
    // crate already carry this same inference, so the threshold only
    // bites for externally assembled signal lists whose category priors
    // can disagree with it.
    let inference = infer_category(&aggregate.language);
    let category = if inference.confidence >= CATEGORY_OVERRIDE_THRESHOLD {
        inference.category
    } else {
        aggregate.category
    };

    SkillRecord {
        name: aggregate.language,
        category,
        confidence,
        confidence_pct: (confidence * 100.0).round() as u8,
        display_score,
        context_penalty: penalty,
        repo_count: aggregate.repos.len(),
        token_count: aggregate.tokens.len(),
        highlights: aggregate.highlights.into_iter().take(HIGHLIGHT_CAP).collect(),
    }
}

/// Weighted combination of the four confidence terms for one aggregate.
fn calibrated_confidence(
    aggregate: &LanguageEvidenceAggregate,
    total_repos: usize,
    eligible_sources: usize,
) -> f64 {
    let density = density(
        aggregate.weighted_score_sum,
        aggregate.score_sum,
        aggregate.evidence_repos.len(),
    );
    let coverage = coverage(aggregate.repos.len(), total_repos);
    let source_div = source_diversity(&aggregate.source_counts, eligible_sources);
    let token_div = token_diversity(aggregate.tokens.len());

    (DENSITY_WEIGHT * density
        + COVERAGE_WEIGHT * coverage
        + SOURCE_DIVERSITY_WEIGHT * source_div
        + TOKEN_DIVERSITY_WEIGHT * token_div)
        .clamp(0.0, 1.0)
}

/// How much of the accumulated evidence was itself high-confidence.
#[must_use]
pub fn density(weighted_score_sum: f64, score_sum: f64, repo_count: usize) -> f64 {
    let denominator = score_sum + repo_count as f64 * DENSITY_SMOOTHING;
    if denominator <= 0.0 {
        return 0.0;
    }
    (weighted_score_sum / denominator).clamp(0.0, 1.0)
}

/// Breadth across the user's body of work.
#[must_use]
pub fn coverage(repo_count: usize, total_repos: usize) -> f64 {
    if total_repos == 0 {
        return 0.0;
    }
    (repo_count as f64 / total_repos as f64).clamp(0.0, 1.0)
}

/// Independent corroboration across source kinds, ignoring context-only
/// sources.
#[must_use]
pub fn source_diversity(counts: &HashMap<SignalSource, usize>, eligible: usize) -> f64 {
    if eligible == 0 {
        return 0.0;
    }
    let distinct = counts
        .iter()
        .filter(|(source, count)| !source.is_context_only() && **count > 0)
        .count();
    (distinct as f64 / eligible as f64).clamp(0.0, 1.0)
}

/// Guard against one recurring token inflating confidence.
#[must_use]
pub fn token_diversity(distinct_tokens: usize) -> f64 {
    ((1.0 + distinct_tokens as f64).log2() / TOKEN_DIVERSITY_SPAN).clamp(0.0, 1.0)
}

/// Bounded penalty from accumulated context-tag occurrences.
#[must_use]
pub fn context_penalty(context_counts: &BTreeMap<String, usize>) -> f64 {
    let raw: f64 = context_counts
        .iter()
        .map(|(tag, count)| context_tag_weight(tag) * *count as f64)
        .sum();
    raw.min(PENALTY_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{FORKED_TAG, INACTIVE_TAG};

    fn signal(
        language: &str,
        source: SignalSource,
        score: f64,
        confidence: f64,
        token: Option<&str>,
    ) -> EvidenceSignal {
        EvidenceSignal {
            language: language.to_string(),
            category: SkillCategory::Backend,
            source,
            score,
            confidence,
            token: token.map(str::to_string),
            detail: format!("{language} evidence"),
        }
    }

    fn context(tag: &str) -> EvidenceSignal {
        signal(tag, SignalSource::NegativeContext, 0.4, 0.9, None)
    }

    #[test]
    fn test_density_is_bounded_and_smoothed() {
        assert_eq!(density(0.0, 0.0, 0), 0.0);
        let d = density(0.9, 1.0, 1);
        assert!(d > 0.0 && d < 1.0);
        // Smoothing: same evidence over more repos reads as less dense.
        assert!(density(0.9, 1.0, 5) < d);
    }

    #[test]
    fn test_coverage() {
        assert_eq!(coverage(3, 10), 0.3);
        assert_eq!(coverage(0, 10), 0.0);
        assert_eq!(coverage(12, 10), 1.0);
    }

    #[test]
    fn test_source_diversity_ignores_context_sources() {
        let mut counts = HashMap::new();
        counts.insert(SignalSource::PrimaryLanguage, 2);
        counts.insert(SignalSource::Topics, 1);
        counts.insert(SignalSource::NegativeContext, 9);
        assert_eq!(source_diversity(&counts, 6), 2.0 / 6.0);
    }

    #[test]
    fn test_token_diversity_saturates() {
        assert_eq!(token_diversity(0), (1.0f64).log2() / 3.5);
        assert!(token_diversity(3) < token_diversity(9));
        assert_eq!(token_diversity(1000), 1.0);
    }

    #[test]
    fn test_penalty_is_capped() {
        let mut counts = BTreeMap::new();
        counts.insert("TemplateRepository".to_string(), 50);
        assert_eq!(context_penalty(&counts), 0.24);
    }

    #[test]
    fn test_context_only_language_never_surfaces() {
        let mut aggregator = EvidenceAggregator::new(5, 6);
        aggregator.add_repository("v3", &[context(FORKED_TAG), context(INACTIVE_TAG)]);
        assert!(aggregator.finish().is_empty());
    }

    #[test]
    fn test_more_contributing_repos_raise_confidence() {
        let topic = |_: usize| signal("Go", SignalSource::Topics, 0.9, 0.87, Some("golang"));

        let confidence_with = |repos: usize| {
            let mut aggregator = EvidenceAggregator::new(10, 6);
            for i in 0..repos {
                aggregator.add_repository(&format!("repo-{i}"), &[topic(i)]);
            }
            aggregator.finish()[0].confidence
        };
        // Identical per-repo evidence keeps density flat while coverage
        // climbs, so confidence must not decrease.
        assert!(confidence_with(3) >= confidence_with(2));
        assert!(confidence_with(2) >= confidence_with(1));
    }

    #[test]
    fn test_penalty_reduces_display_score_not_confidence() {
        let go = || signal("Go", SignalSource::PrimaryLanguage, 0.9, 0.95, None);

        let mut aggregator = EvidenceAggregator::new(10, 6);
        aggregator.add_repository("a", &[go()]);
        aggregator.add_repository("b", &[go(), context("TemplateRepository")]);
        let record = aggregator.finish().remove(0);

        assert!(record.context_penalty > 0.0);
        // The penalty lives entirely in the display score; confidence is
        // computed from the evidence alone.
        let expected = record.confidence * (1.0 - record.context_penalty);
        assert!((record.display_score - expected).abs() < 1e-9);
        assert!(record.display_score < record.confidence);
    }

    #[test]
    fn test_tagged_repo_penalizes_without_joining_coverage() {
        let go = || signal("Go", SignalSource::PrimaryLanguage, 0.9, 0.95, None);

        let mut aggregator = EvidenceAggregator::new(10, 6);
        aggregator.add_repository("service", &[go()]);
        aggregator.add_repository("starter", &[go(), context("TemplateRepository")]);
        let record = aggregator.finish().remove(0);

        // The template repo's tag lands on Go, but only "service" counts
        // toward coverage.
        assert_eq!(record.repo_count, 1);
        assert!(record.context_penalty > 0.0);
    }

    #[test]
    fn test_category_scoped_tag_spares_other_categories() {
        // ConfigRepository discounts application-facing categories, not
        // Infrastructure.
        let mut kube = signal("Kubernetes", SignalSource::Topics, 0.9, 0.9, Some("k8s"));
        kube.category = SkillCategory::Infrastructure;

        let mut aggregator = EvidenceAggregator::new(5, 6);
        aggregator.add_repository("dotfiles", &[kube, context("ConfigRepository")]);
        let record = aggregator.finish().remove(0);

        assert_eq!(record.context_penalty, 0.0);
        assert_eq!(record.display_score, record.confidence);
        // An unaffected category keeps its coverage too.
        assert_eq!(record.repo_count, 1);
    }

    #[test]
    fn test_weak_corroborating_repo_cannot_lower_confidence() {
        let strong = || signal("Kubernetes", SignalSource::Topics, 0.95, 0.95, Some("kubernetes"));
        let weak = || signal("Kubernetes", SignalSource::Topics, 0.45, 0.48, Some("orchestration"));

        let mut alone = EvidenceAggregator::new(10, 6);
        alone.add_repository("cluster-ops", &[strong()]);
        let baseline = alone.finish().remove(0).confidence;

        let mut corroborated = EvidenceAggregator::new(10, 6);
        corroborated.add_repository("cluster-ops", &[strong()]);
        corroborated.add_repository("infra-notes", &[weak()]);
        let raised = corroborated.finish().remove(0).confidence;

        // The weak repo dilutes density more than its coverage gain is
        // worth; the running floor keeps the fold monotone anyway.
        assert!(raised >= baseline, "{raised} < {baseline}");
    }

    #[test]
    fn test_category_override_requires_confident_inference() {
        // "Kubernetes" infers Infrastructure with high confidence, so the
        // carried Backend placeholder gets overridden.
        let mut aggregator = EvidenceAggregator::new(2, 6);
        aggregator.add_repository(
            "infra",
            &[signal("Kubernetes", SignalSource::Topics, 0.9, 0.9, Some("k8s"))],
        );
        let record = aggregator.finish().remove(0);
        assert_eq!(record.category, SkillCategory::Infrastructure);
    }

    #[test]
    fn test_marginal_inference_keeps_carried_category() {
        // "Zine" is unknown to the taxonomy, so the fresh inference is
        // the low-confidence default and the carried category stands.
        let mut s = signal("Zine", SignalSource::Topics, 0.8, 0.8, Some("zine"));
        s.category = SkillCategory::Frontend;

        let mut aggregator = EvidenceAggregator::new(2, 6);
        aggregator.add_repository("zines", &[s]);
        let record = aggregator.finish().remove(0);
        assert_eq!(record.category, SkillCategory::Frontend);
    }

    #[test]
    fn test_records_are_ordered_by_display_score() {
        let mut aggregator = EvidenceAggregator::new(4, 6);
        aggregator.add_repository(
            "a",
            &[
                signal("Rust", SignalSource::PrimaryLanguage, 0.95, 0.95, None),
                signal("Lua", SignalSource::RepoText, 0.2, 0.3, Some("lua")),
            ],
        );
        aggregator.add_repository(
            "b",
            &[signal("Rust", SignalSource::Topics, 0.9, 0.9, Some("rust"))],
        );
        let records = aggregator.finish();
        assert_eq!(records[0].name, "Rust");
        assert!(records[0].display_score >= records[1].display_score);
    }

    #[test]
    fn test_highlights_are_capped_and_deduplicated() {
        let mut aggregator = EvidenceAggregator::new(20, 6);
        for i in 0..20 {
            let mut s = signal("Python", SignalSource::Topics, 0.8, 0.8, Some("python"));
            s.detail = format!("Python evidence {i}");
            aggregator.add_repository(&format!("r{i}"), &[s]);
        }
        let record = aggregator.finish().remove(0);
        assert!(record.highlights.len() <= 6);
        assert_eq!(record.repo_count, 20);
    }
}
