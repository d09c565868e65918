//! Property tests for the full profiling pipeline: no input shape may
//! panic, break record bounds, or make the output non-deterministic.

use proptest::prelude::*;
use skillprint_evidence::{RepositoryEvidenceInput, SkillProfiler};

fn arb_repo() -> impl Strategy<Value = RepositoryEvidenceInput> {
    (
        "[a-zA-Z0-9 ._-]{0,32}",
        proptest::option::of("[a-zA-Z0-9 ._#+-]{0,64}"),
        proptest::option::of("[a-zA-Z#+]{0,16}"),
        proptest::collection::hash_map("[A-Za-z]{1,12}", 0u64..5_000_000, 0..4),
        proptest::collection::vec("[a-z0-9-]{0,16}", 0..4),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(name, description, primary, bytes, topics, fork, archived, disabled, wiki, pages)| {
                RepositoryEvidenceInput {
                    owner: "prop".to_string(),
                    full_name: format!("prop/{name}"),
                    name,
                    description,
                    primary_language: primary,
                    language_bytes: bytes,
                    topics,
                    license_name: None,
                    is_fork: fork,
                    is_archived: archived,
                    is_disabled: disabled,
                    has_wiki: wiki,
                    has_pages: pages,
                }
            },
        )
}

proptest! {
    /// Every record respects its bounds and the list is rank-ordered.
    #[test]
    fn profile_records_are_bounded_and_ordered(
        repos in proptest::collection::vec(arb_repo(), 0..6),
        extra in 0usize..20,
    ) {
        let total = repos.len() + extra;
        let records = SkillProfiler::new().profile(&repos, total);
        for record in &records {
            prop_assert!((0.0..=1.0).contains(&record.confidence));
            prop_assert!((0.0..=1.0).contains(&record.display_score));
            prop_assert!(record.display_score <= record.confidence);
            prop_assert!(record.context_penalty <= 0.24 + f64::EPSILON);
            prop_assert_eq!(
                record.confidence_pct,
                (record.confidence * 100.0).round() as u8
            );
            prop_assert!(record.repo_count <= total.max(1));
            prop_assert!(!record.name.is_empty());
        }
        for pair in records.windows(2) {
            prop_assert!(pair[0].display_score >= pair[1].display_score);
        }
    }

    /// Profiling is a pure function of the listing.
    #[test]
    fn profile_is_deterministic(repos in proptest::collection::vec(arb_repo(), 0..5)) {
        let profiler = SkillProfiler::new();
        let first = serde_json::to_string(&profiler.profile(&repos, repos.len()))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = serde_json::to_string(&profiler.profile(&repos, repos.len()))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(first, second);
    }
}
