//! End-to-end profiling scenarios over realistic repository listings.

use skillprint_evidence::{EvidencePolicy, SkillProfiler, SkillRecord};
use skillprint_taxonomy::SkillCategory;
use skillprint_test_utils::{mixed_repo, service_repo, RepoFixture};

fn find<'a>(records: &'a [SkillRecord], name: &str) -> Option<&'a SkillRecord> {
    records.iter().find(|r| r.name == name)
}

#[test]
fn test_typescript_dashboard_profile() {
    let repo = RepoFixture::new("admin-dashboard")
        .description("A Next.js dashboard for internal admin tooling")
        .primary_language("TypeScript")
        .bytes("TypeScript", 420_000)
        .bytes("CSS", 30_000)
        .topics(&["nextjs", "react"])
        .build();

    let records = SkillProfiler::new().profile(&[repo], 1);

    let ts = find(&records, "TypeScript").expect("TypeScript record");
    assert_eq!(ts.category, SkillCategory::Frontend);
    assert_eq!(ts.repo_count, 1);
    assert!(ts.confidence > 0.2, "corroborated primary language: {}", ts.confidence);
    assert_eq!(ts.context_penalty, 0.0);
    assert_eq!(ts.display_score, ts.confidence);

    // The curated topics surface framework skills alongside the language.
    assert!(find(&records, "Next.js").is_some());
    assert!(find(&records, "React").is_some());
}

#[test]
fn test_forked_archive_yields_no_skills() {
    let repo = RepoFixture::new("v3").fork().archived().build();
    let records = SkillProfiler::new().profile(&[repo], 1);
    assert!(
        records.is_empty(),
        "context tags alone must not surface as skills: {records:?}"
    );
}

#[test]
fn test_go_across_several_repos() {
    let mut repos = vec![
        service_repo("payments", "Go", 300_000),
        service_repo("ledger", "Go", 180_000),
        service_repo("gateway", "Go", 90_000),
    ];
    repos[0].topics = vec!["golang".into(), "grpc".into()];

    let records = SkillProfiler::new().profile(&repos, 10);
    let go = find(&records, "Go").expect("Go record");

    assert_eq!(go.repo_count, 3);
    assert!(go.token_count >= 1, "topic token should be counted");
    assert!(go.confidence > 0.3 && go.confidence < 0.9, "mid-range: {}", go.confidence);
    assert_eq!(go.context_penalty, 0.0);
}

#[test]
fn test_template_repo_drags_display_score_down() {
    let plain = vec![
        service_repo("payments", "Go", 300_000),
        service_repo("ledger", "Go", 180_000),
    ];

    let mut with_template = plain.clone();
    with_template.push(
        RepoFixture::new("go-service-template")
            .description("Starter template for new Go services")
            .primary_language("Go")
            .bytes("Go", 40_000)
            .build(),
    );

    let plain_go = SkillProfiler::new()
        .profile(&plain, 10)
        .into_iter()
        .find(|r| r.name == "Go")
        .expect("Go record");
    let templated_go = SkillProfiler::new()
        .profile(&with_template, 10)
        .into_iter()
        .find(|r| r.name == "Go")
        .expect("Go record");

    assert!(templated_go.context_penalty > 0.0);
    assert!(
        templated_go.display_score < templated_go.confidence,
        "penalty applies to the display score only"
    );
    assert_eq!(plain_go.context_penalty, 0.0);
}

#[test]
fn test_template_repo_penalizes_go_without_counting_toward_coverage() {
    // Three repositories back Go through different signal kinds; a
    // fourth names Go only from inside a starter template.
    let repos = vec![
        service_repo("payments", "Go", 300_000),
        RepoFixture::new("deploy-tools").topic("golang").build(),
        RepoFixture::new("billing")
            .description("Billing microservices in golang")
            .build(),
        RepoFixture::new("go-service-template")
            .description("Starter template for new Go services")
            .primary_language("Go")
            .bytes("Go", 40_000)
            .build(),
    ];

    let records = SkillProfiler::new().profile(&repos, 10);
    let go = find(&records, "Go").expect("Go record");

    assert_eq!(go.repo_count, 3, "the template repo must not join coverage");
    assert!(go.context_penalty > 0.0 && go.context_penalty <= 0.24);
    assert!(
        go.display_score < go.confidence,
        "the tag discounts the display score, not the confidence"
    );
}

#[test]
fn test_weak_topic_corroboration_cannot_lower_confidence() {
    let strong = RepoFixture::new("cluster-ops")
        .topics(&["kubernetes", "orchestration"])
        .build();
    let weak = RepoFixture::new("infra-notes").topic("orchestration").build();

    let kube_confidence = |repos: &[_]| {
        SkillProfiler::new()
            .profile(repos, 10)
            .into_iter()
            .find(|r| r.name == "Kubernetes")
            .map(|r| r.confidence)
            .unwrap_or(0.0)
    };

    let baseline = kube_confidence(std::slice::from_ref(&strong));
    let corroborated = kube_confidence(&[strong, weak]);
    assert!(
        corroborated >= baseline,
        "an extra topic-matching repo read as counter-evidence: {baseline} -> {corroborated}"
    );
}

#[test]
fn test_alias_topics_fold_into_one_skill() {
    let mut repos = vec![
        RepoFixture::new("cluster-config").topic("k8s").build(),
        RepoFixture::new("deploy-charts").topic("kubernetes").build(),
    ];
    repos[0].description = Some("Manifests for the staging cluster".into());

    let records = SkillProfiler::new().profile(&repos, 2);
    let kube = find(&records, "Kubernetes").expect("Kubernetes record");
    assert_eq!(kube.repo_count, 2, "aliases must land on one canonical skill");
    assert_eq!(kube.category, SkillCategory::Infrastructure);
    assert!(find(&records, "k8s").is_none());
}

#[test]
fn test_mixed_language_repo_reports_each_language() {
    let repo = mixed_repo(
        "fullstack-app",
        &[("TypeScript", 200_000), ("Go", 150_000), ("CSS", 20_000)],
    );
    let records = SkillProfiler::new().profile(&[repo], 1);
    assert!(find(&records, "TypeScript").is_some());
    assert!(find(&records, "Go").is_some());
}

#[test]
fn test_records_are_sorted_and_serializable() -> anyhow::Result<()> {
    let repos = vec![
        service_repo("big", "Rust", 800_000),
        service_repo("small", "Lua", 3_000),
    ];
    let records = SkillProfiler::new().profile(&repos, 2);

    for pair in records.windows(2) {
        assert!(pair[0].display_score >= pair[1].display_score);
    }

    let json = serde_json::to_string(&records)?;
    let back: Vec<SkillRecord> = serde_json::from_str(&json)?;
    assert_eq!(back.len(), records.len());
    assert_eq!(back[0].name, records[0].name);
    Ok(())
}

#[test]
fn test_disabled_text_family_suppresses_description_evidence() {
    let repo = RepoFixture::new("notes")
        .description("Playing with Elixir and Phoenix")
        .build();

    let default = SkillProfiler::new().profile(std::slice::from_ref(&repo), 1);
    assert!(find(&default, "Elixir").is_some());

    let muted = SkillProfiler::new()
        .with_policy(EvidencePolicy { enable_text: false, ..Default::default() })
        .profile(&[repo], 1);
    assert!(find(&muted, "Elixir").is_none());
}

#[test]
fn test_precision_policy_trims_weak_evidence() {
    let repo = RepoFixture::new("scratch")
        .description("misc utilities, some lua scripts")
        .build();

    let recall = SkillProfiler::new().profile(std::slice::from_ref(&repo), 1);
    let precision = SkillProfiler::new()
        .with_policy(EvidencePolicy { favor_precision: true, ..Default::default() })
        .profile(&[repo], 1);

    // Precision mode may only shrink the profile, never grow it.
    assert!(precision.len() <= recall.len());
}
