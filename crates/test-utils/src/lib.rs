//! Shared test fixtures for skillprint crates.
//!
//! Provides a builder for [`RepositoryEvidenceInput`] so integration tests
//! can describe repositories in a couple of lines instead of filling the
//! whole struct by hand.

use std::collections::HashMap;

use skillprint_evidence::RepositoryEvidenceInput;

/// Fluent builder for repository metadata fixtures.
///
/// Starts from a minimal named repository; every method layers one more
/// piece of metadata on top.
///
/// # Example
/// ```
/// use skillprint_test_utils::RepoFixture;
///
/// let repo = RepoFixture::new("payments-api")
///     .primary_language("Rust")
///     .bytes("Rust", 120_000)
///     .topic("grpc")
///     .build();
/// assert_eq!(repo.full_name, "fixture/payments-api");
/// ```
#[derive(Debug, Clone)]
pub struct RepoFixture {
    input: RepositoryEvidenceInput,
}

impl RepoFixture {
    /// Start a fixture owned by the synthetic `fixture` account.
    pub fn new(name: &str) -> Self {
        Self {
            input: RepositoryEvidenceInput {
                owner: "fixture".to_string(),
                full_name: format!("fixture/{name}"),
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.input.owner = owner.to_string();
        self.input.full_name = format!("{owner}/{}", self.input.name);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.input.description = Some(description.to_string());
        self
    }

    pub fn primary_language(mut self, language: &str) -> Self {
        self.input.primary_language = Some(language.to_string());
        self
    }

    /// Add one language byte-count entry. Call repeatedly for a mix.
    pub fn bytes(mut self, language: &str, bytes: u64) -> Self {
        self.input.language_bytes.insert(language.to_string(), bytes);
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.input.topics.push(topic.to_string());
        self
    }

    pub fn topics(mut self, topics: &[&str]) -> Self {
        self.input
            .topics
            .extend(topics.iter().map(|t| t.to_string()));
        self
    }

    pub fn license(mut self, license: &str) -> Self {
        self.input.license_name = Some(license.to_string());
        self
    }

    pub fn fork(mut self) -> Self {
        self.input.is_fork = true;
        self
    }

    pub fn archived(mut self) -> Self {
        self.input.is_archived = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.input.is_disabled = true;
        self
    }

    pub fn with_wiki(mut self) -> Self {
        self.input.has_wiki = true;
        self
    }

    pub fn with_pages(mut self) -> Self {
        self.input.has_pages = true;
        self
    }

    pub fn build(self) -> RepositoryEvidenceInput {
        self.input
    }
}

/// A typical single-language service repository.
pub fn service_repo(name: &str, language: &str, bytes: u64) -> RepositoryEvidenceInput {
    RepoFixture::new(name)
        .primary_language(language)
        .bytes(language, bytes)
        .build()
}

/// A repository with an explicit language mix, largest entry first wins
/// the primary-language slot.
pub fn mixed_repo(name: &str, mix: &[(&str, u64)]) -> RepositoryEvidenceInput {
    let mut fixture = RepoFixture::new(name);
    let primary = mix
        .iter()
        .max_by_key(|(_, bytes)| *bytes)
        .map(|(lang, _)| *lang);
    if let Some(lang) = primary {
        fixture = fixture.primary_language(lang);
    }
    for (lang, bytes) in mix {
        fixture = fixture.bytes(lang, *bytes);
    }
    fixture.build()
}

/// Parse a fixture from inline JSON, for tests exercising the serde surface.
pub fn repo_from_json(json: &str) -> RepositoryEvidenceInput {
    match serde_json::from_str(json) {
        Ok(input) => input,
        Err(err) => panic!("invalid repository fixture JSON: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_defaults_are_minimal() {
        let repo = RepoFixture::new("app").build();
        assert_eq!(repo.owner, "fixture");
        assert_eq!(repo.full_name, "fixture/app");
        assert!(repo.description.is_none());
        assert!(repo.language_bytes.is_empty());
        assert!(!repo.is_fork);
    }

    #[test]
    fn test_owner_updates_full_name() {
        let repo = RepoFixture::new("app").owner("octo").build();
        assert_eq!(repo.full_name, "octo/app");
    }

    #[test]
    fn test_service_repo_sets_language_both_ways() {
        let repo = service_repo("api", "Go", 5_000);
        assert_eq!(repo.primary_language.as_deref(), Some("Go"));
        assert_eq!(repo.language_bytes.get("Go"), Some(&5_000));
    }

    #[test]
    fn test_mixed_repo_picks_largest_primary() {
        let repo = mixed_repo("web", &[("TypeScript", 9_000), ("CSS", 1_000)]);
        assert_eq!(repo.primary_language.as_deref(), Some("TypeScript"));
        assert_eq!(repo.language_bytes.len(), 2);
    }

    #[test]
    fn test_repo_from_json_round_trips() {
        let repo = repo_from_json(
            r#"{"owner":"octo","full_name":"octo/app","name":"app","is_fork":true}"#,
        );
        assert_eq!(repo.name, "app");
        assert!(repo.is_fork);
    }
}
