//! The profiling façade: repositories in, ordered skill records out.

use std::sync::Arc;

use skillprint_taxonomy::InferenceCache;

use crate::aggregate::{EvidenceAggregator, SkillRecord};
use crate::collector::EvidenceCollector;
use crate::input::RepositoryEvidenceInput;
use crate::policy::EvidencePolicy;

/// Computes a full skill profile from a user's repository listing.
///
/// Owns the evidence policy and the collector; construction is cheap and
/// instances are independent, so concurrent users need no coordination.
pub struct SkillProfiler {
    policy: EvidencePolicy,
    collector: EvidenceCollector,
}

impl Default for SkillProfiler {
    fn default() -> Self {
        Self {
            policy: EvidencePolicy::default(),
            collector: EvidenceCollector::default(),
        }
    }
}

impl SkillProfiler {
    /// Profiler with default policy and cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the evidence policy.
    #[must_use]
    pub fn with_policy(mut self, policy: EvidencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Inject a category-inference cache strategy.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn InferenceCache>) -> Self {
        self.collector = EvidenceCollector::with_cache(cache);
        self
    }

    /// The active policy.
    #[must_use]
    pub fn policy(&self) -> &EvidencePolicy {
        &self.policy
    }

    /// Compute the skill profile for one user.
    ///
    /// `total_repos_scanned` is the user's full repository count, which
    /// may exceed `repos.len()` when the caller pre-filtered the list.
    /// A sequential fold; never fails, an empty input yields an empty
    /// profile.
    #[must_use]
    pub fn profile(
        &self,
        repos: &[RepositoryEvidenceInput],
        total_repos_scanned: usize,
    ) -> Vec<SkillRecord> {
        let total = total_repos_scanned.max(repos.len());
        let mut aggregator =
            EvidenceAggregator::new(total, self.policy.eligible_source_kinds());
        for repo in repos {
            let signals = self.collector.collect(repo, &self.policy);
            aggregator.add_repository(&repo.name, &signals);
        }
        let records = aggregator.finish();
        tracing::debug!(
            repos = repos.len(),
            skills = records.len(),
            "skill profile computed"
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn repo(name: &str, language: Option<&str>, bytes: u64) -> RepositoryEvidenceInput {
        RepositoryEvidenceInput {
            owner: "octo".into(),
            full_name: format!("octo/{name}"),
            name: name.into(),
            primary_language: language.map(str::to_string),
            language_bytes: language
                .map(|l| HashMap::from([(l.to_string(), bytes)]))
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_listing_yields_empty_profile() {
        let records = SkillProfiler::new().profile(&[], 0);
        assert!(records.is_empty());
    }

    #[test]
    fn test_profile_orders_by_display_score() {
        let repos = vec![
            repo("a", Some("Rust"), 400_000),
            repo("b", Some("Rust"), 300_000),
            repo("c", Some("Lua"), 2_000),
        ];
        let records = SkillProfiler::new().profile(&repos, 3);
        assert_eq!(records[0].name, "Rust");
        assert!(records.iter().any(|r| r.name == "Lua"));
    }

    #[test]
    fn test_total_scanned_floor_is_repo_count() {
        let repos = vec![repo("a", Some("Go"), 100_000)];
        // A stated total below the listing length is corrected.
        let records = SkillProfiler::new().profile(&repos, 0);
        assert_eq!(records[0].repo_count, 1);
    }

    #[test]
    fn test_policy_is_respected() {
        let mut input = repo("tagged", None, 0);
        input.topics = vec!["rust".into()];

        let with_topics = SkillProfiler::new().profile(std::slice::from_ref(&input), 1);
        assert!(with_topics.iter().any(|r| r.name == "Rust"));

        let no_topics = SkillProfiler::new()
            .with_policy(EvidencePolicy { enable_topics: false, ..Default::default() })
            .profile(std::slice::from_ref(&input), 1);
        assert!(no_topics.is_empty());
    }
}
