//! Repository metadata input contract.
//!
//! One [`RepositoryEvidenceInput`] per repository per evaluation, handed
//! over by an external listing layer. Optional and malformed fields are
//! normalized once at the collector boundary; downstream code never
//! re-checks them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw per-repository metadata from the hosting API.
///
/// Every field degrades gracefully: a null description, empty byte map,
/// or empty topic list simply contributes no evidence from that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEvidenceInput {
    /// Account that owns the repository.
    pub owner: String,
    /// "owner/name" form.
    pub full_name: String,
    /// Bare repository name.
    pub name: String,
    /// Free-text description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// The hosting platform's single declared language, if any.
    #[serde(default)]
    pub primary_language: Option<String>,
    /// Language → byte count breakdown.
    #[serde(default)]
    pub language_bytes: HashMap<String, u64>,
    /// Curated topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
    /// SPDX-ish license name, if any.
    #[serde(default)]
    pub license_name: Option<String>,
    /// Repository is a fork.
    #[serde(default)]
    pub is_fork: bool,
    /// Repository is archived.
    #[serde(default)]
    pub is_archived: bool,
    /// Repository is disabled by the platform.
    #[serde(default)]
    pub is_disabled: bool,
    /// Repository has a wiki enabled.
    #[serde(default)]
    pub has_wiki: bool,
    /// Repository serves a pages site.
    #[serde(default)]
    pub has_pages: bool,
}

/// Input after one-time boundary normalization.
#[derive(Debug, Clone)]
pub struct SanitizedInput {
    /// Bare name, trimmed.
    pub name: String,
    /// Combined lowercased name + description text.
    pub text: String,
    /// Declared primary language, trimmed, only when non-empty.
    pub primary_language: Option<String>,
    /// Positive-byte-count entries only.
    pub language_bytes: Vec<(String, u64)>,
    /// Total bytes across retained entries.
    pub total_bytes: u64,
    /// Non-empty topics, lowercased and trimmed.
    pub topics: Vec<String>,
    /// Lowercased license name, when present and non-empty.
    pub license: Option<String>,
    pub is_fork: bool,
    pub is_archived: bool,
    pub is_disabled: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
}

impl RepositoryEvidenceInput {
    /// Normalize all optional fields once.
    #[must_use]
    pub fn sanitized(&self) -> SanitizedInput {
        let name = self.name.trim().to_string();
        let mut text = name.to_lowercase();
        if let Some(description) = self.description.as_deref() {
            let description = description.trim();
            if !description.is_empty() {
                text.push(' ');
                text.push_str(&description.to_lowercase());
            }
        }

        let mut language_bytes: Vec<(String, u64)> = self
            .language_bytes
            .iter()
            .filter(|(lang, bytes)| **bytes > 0 && !lang.trim().is_empty())
            .map(|(lang, bytes)| (lang.trim().to_string(), *bytes))
            .collect();
        // Deterministic order: largest first, name as tie-break.
        language_bytes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let total_bytes = language_bytes.iter().map(|(_, b)| b).sum();

        let topics = self
            .topics
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        SanitizedInput {
            name,
            text,
            primary_language: self
                .primary_language
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            language_bytes,
            total_bytes,
            topics,
            license: self
                .license_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            is_fork: self.is_fork,
            is_archived: self.is_archived,
            is_disabled: self.is_disabled,
            has_wiki: self.has_wiki,
            has_pages: self.has_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_drops_zero_byte_entries() {
        let input = RepositoryEvidenceInput {
            name: "svc".into(),
            language_bytes: HashMap::from([
                ("Rust".to_string(), 1000),
                ("HTML".to_string(), 0),
            ]),
            ..Default::default()
        };
        let clean = input.sanitized();
        assert_eq!(clean.language_bytes, vec![("Rust".to_string(), 1000)]);
        assert_eq!(clean.total_bytes, 1000);
    }

    #[test]
    fn test_sanitized_handles_absent_optionals() {
        let input = RepositoryEvidenceInput {
            name: " api ".into(),
            description: Some("   ".into()),
            primary_language: Some("".into()),
            ..Default::default()
        };
        let clean = input.sanitized();
        assert_eq!(clean.name, "api");
        assert_eq!(clean.text, "api");
        assert!(clean.primary_language.is_none());
    }

    #[test]
    fn test_sanitized_combines_name_and_description() {
        let input = RepositoryEvidenceInput {
            name: "my-app".into(),
            description: Some("A Next.js Dashboard".into()),
            ..Default::default()
        };
        assert_eq!(input.sanitized().text, "my-app a next.js dashboard");
    }

    #[test]
    fn test_topics_are_lowercased_and_filtered() {
        let input = RepositoryEvidenceInput {
            topics: vec!["ReactJS".into(), "  ".into(), "K8S".into()],
            ..Default::default()
        };
        assert_eq!(input.sanitized().topics, vec!["reactjs", "k8s"]);
    }

    #[test]
    fn test_byte_order_is_deterministic() {
        let input = RepositoryEvidenceInput {
            language_bytes: HashMap::from([
                ("Go".to_string(), 10),
                ("C".to_string(), 10),
                ("Rust".to_string(), 99),
            ]),
            ..Default::default()
        };
        let clean = input.sanitized();
        let names: Vec<&str> = clean.language_bytes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Rust", "C", "Go"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let input = RepositoryEvidenceInput {
            owner: "octo".into(),
            full_name: "octo/app".into(),
            name: "app".into(),
            is_fork: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: RepositoryEvidenceInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }
}
