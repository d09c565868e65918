//! The closed set of skill categories.

use serde::{Deserialize, Serialize};

/// Functional category of a language or technology.
///
/// The set is closed: every inference produces exactly one of these six
/// variants, never a null or "other" bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    /// Browser-facing UI work (frameworks, styling, client tooling).
    Frontend,
    /// Server-side application logic and APIs. Also the documented
    /// fallback when no category scores at all.
    #[default]
    Backend,
    /// Cloud platforms, container orchestration, networking, systems.
    Infrastructure,
    /// Storage engines, query languages, data modeling.
    Database,
    /// Machine learning, data science, and AI tooling.
    AiMl,
    /// CI/CD, build automation, observability, release engineering.
    #[serde(rename = "devops")]
    DevOps,
}

impl SkillCategory {
    /// All categories in tie-break priority order.
    ///
    /// When two categories accumulate an identical score, the one earlier
    /// in this list wins. Backend leads because it doubles as the
    /// zero-evidence default; the rest follow taxonomy base rates.
    pub const PRIORITY: [SkillCategory; 6] = [
        SkillCategory::Backend,
        SkillCategory::Frontend,
        SkillCategory::Infrastructure,
        SkillCategory::Database,
        SkillCategory::AiMl,
        SkillCategory::DevOps,
    ];

    /// Short stable label, matching the serde representation.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Infrastructure => "infrastructure",
            Self::Database => "database",
            Self::AiMl => "ai-ml",
            Self::DevOps => "devops",
        }
    }

    /// Position in the tie-break priority order (lower wins ties).
    #[must_use]
    pub fn priority_rank(&self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::PRIORITY.len())
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
