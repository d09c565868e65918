//! Negative-context archetypes.
//!
//! Regex-driven detectors for repository archetypes (template, demo,
//! dotfiles, abandoned experiment, ...) whose evidence deserves less
//! trust. Detection never deletes evidence; it attaches a penalty tag
//! the aggregator can weigh later.

use regex::Regex;
use serde::{Deserialize, Serialize};
use skillprint_taxonomy::SkillCategory;

/// How strongly an archetype discounts a repository's evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextSeverity {
    /// The repository says little about real skill (pure template, toy).
    High,
    /// Meaningful discount (demo, coursework).
    Medium,
    /// Mild discount (migrated, static site).
    Low,
}

/// Static, uncompiled archetype definition.
#[derive(Debug, Clone, Copy)]
pub struct NegativeContextSpec {
    /// Context tag recorded on matching repositories ("TemplateRepository").
    pub tag: &'static str,
    /// Patterns matched against lowercased "name description" text.
    pub patterns: &'static [&'static str],
    /// Penalty weight contributed per matching repository, in [0, 1].
    pub penalty: f64,
    /// Discount tier.
    pub severity: ContextSeverity,
    /// Human-readable reason shown in explanations.
    pub reason: &'static str,
    /// When set, the discount applies only to these categories.
    pub affected_categories: Option<&'static [SkillCategory]>,
}

/// Compiled archetype ready for matching.
#[derive(Debug, Clone)]
pub struct NegativeContextProfile {
    /// Compiled patterns.
    pub patterns: Vec<Regex>,
    /// Context tag recorded on matching repositories.
    pub tag: &'static str,
    /// Penalty weight in [0, 1].
    pub penalty: f64,
    /// Discount tier.
    pub severity: ContextSeverity,
    /// Human-readable reason.
    pub reason: &'static str,
    /// Optional category restriction.
    pub affected_categories: Option<&'static [SkillCategory]>,
}

impl NegativeContextProfile {
    /// Whether any pattern matches the given lowercased text.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Whether the discount applies to `category`.
    #[must_use]
    pub fn affects(&self, category: SkillCategory) -> bool {
        match self.affected_categories {
            Some(subset) => subset.contains(&category),
            None => true,
        }
    }
}

/// The archetype catalog. Patterns are matched case-insensitively against
/// the repository's combined name and description.
pub(crate) static NEGATIVE_CONTEXT_SPECS: &[NegativeContextSpec] = &[
    NegativeContextSpec {
        tag: "TemplateRepository",
        patterns: &[r"\btemplate\b", r"\bboilerplate\b", r"\bstarter([\s-]?(kit|pack|template))?\b", r"\bscaffold(ing)?\b", r"\bskeleton\b"],
        penalty: 0.5,
        severity: ContextSeverity::High,
        reason: "template or starter kit",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "ExampleRepository",
        patterns: &[r"\bexamples?\b", r"\bdemos?\b", r"\bsample( code| app)?s?\b", r"\bshowcase\b", r"\bproof[\s-]of[\s-]concept\b", r"\bpoc\b"],
        penalty: 0.4,
        severity: ContextSeverity::Medium,
        reason: "example or demo code",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "ExperimentalRepository",
        patterns: &[r"\bexperiments?(al)?\b", r"\bplayground\b", r"\bsandbox\b", r"\btinker(ing)?\b", r"\btrying[\s-]out\b"],
        penalty: 0.35,
        severity: ContextSeverity::Medium,
        reason: "experimental playground",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "PersonalSiteRepository",
        patterns: &[r"\bpersonal[\s-](web)?site\b", r"\bportfolio\b", r"\bmy[\s-]blog\b", r"\bresume\b", r"\bcv\b", r"\.github\.io\b"],
        penalty: 0.3,
        severity: ContextSeverity::Low,
        reason: "personal site or portfolio",
        affected_categories: Some(&[SkillCategory::Backend, SkillCategory::Infrastructure, SkillCategory::Database]),
    },
    NegativeContextSpec {
        tag: "ConfigRepository",
        patterns: &[r"\bdotfiles\b", r"\bconfigs?(uration)?s?[\s-]?(files|only)?\b", r"\bnvim[\s-]config\b", r"\bvimrc\b", r"\bsettings\b"],
        penalty: 0.45,
        severity: ContextSeverity::Medium,
        reason: "configuration files only",
        affected_categories: Some(&[SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Database, SkillCategory::AiMl]),
    },
    NegativeContextSpec {
        tag: "CuratedListRepository",
        patterns: &[r"\bawesome[\s-]", r"\bcurated[\s-]list\b", r"\bcollection[\s-]of[\s-](links|resources)\b", r"\bresources[\s-]list\b"],
        penalty: 0.55,
        severity: ContextSeverity::High,
        reason: "curated link list, not authored code",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "LegacyRepository",
        patterns: &[r"\bdeprecated\b", r"\bunmaintained\b", r"\bno[\s-]longer[\s-]maintained\b", r"\barchived\b", r"\bobsolete\b", r"\blegacy\b"],
        penalty: 0.3,
        severity: ContextSeverity::Low,
        reason: "deprecated or unmaintained",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "AcademicRepository",
        patterns: &[r"\bhomework\b", r"\bassignments?\b", r"\bcoursework\b", r"\buniversity\b", r"\bsemester\b", r"\bthesis\b", r"\bcs\d{2,4}\b"],
        penalty: 0.35,
        severity: ContextSeverity::Medium,
        reason: "academic coursework",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "PracticeRepository",
        patterns: &[r"\bkatas?\b", r"\bleetcode\b", r"\bhackerrank\b", r"\bcodewars\b", r"\bexercis(es|m)\b", r"\bpractice\b", r"\b100[\s-]days\b", r"\badvent[\s-]of[\s-]code\b"],
        penalty: 0.35,
        severity: ContextSeverity::Medium,
        reason: "practice exercises",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "ToyRepository",
        patterns: &[r"\btoy\b", r"\bjust[\s-]for[\s-]fun\b", r"\bweekend[\s-]project\b", r"\btiny\b", r"\bminimal[\s-]clone\b"],
        penalty: 0.3,
        severity: ContextSeverity::Medium,
        reason: "toy project",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "IncompleteRepository",
        patterns: &[r"\bwip\b", r"\bwork[\s-]in[\s-]progress\b", r"\bunfinished\b", r"\bincomplete\b", r"\bbroken\b", r"\bdo(es)?[\s-]?n.?t[\s-]work\b", r"\babandoned\b"],
        penalty: 0.4,
        severity: ContextSeverity::Medium,
        reason: "incomplete or broken",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "TestPlaceholderRepository",
        patterns: &[r"^test([\s-]?(repo|project|ing))?$", r"\bplaceholder\b", r"\bdummy\b", r"\btesting[\s-]stuff\b"],
        penalty: 0.6,
        severity: ContextSeverity::High,
        reason: "test placeholder",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "StaticSiteRepository",
        patterns: &[r"\bstatic[\s-]site\b", r"\bgh[\s-]pages\b", r"\bjekyll\b", r"\bhugo[\s-]site\b", r"\blanding[\s-]page\b"],
        penalty: 0.25,
        severity: ContextSeverity::Low,
        reason: "static site",
        affected_categories: Some(&[SkillCategory::Backend, SkillCategory::Infrastructure, SkillCategory::Database, SkillCategory::AiMl]),
    },
    NegativeContextSpec {
        tag: "DataOnlyRepository",
        patterns: &[r"\bdatasets?[\s-]?(only)?\b", r"\bdata[\s-]dump\b", r"\bcsv[\s-]files\b", r"\braw[\s-]data\b"],
        penalty: 0.4,
        severity: ContextSeverity::Medium,
        reason: "data files, not code",
        affected_categories: Some(&[SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Infrastructure, SkillCategory::DevOps]),
    },
    NegativeContextSpec {
        tag: "GeneratedRepository",
        patterns: &[r"\bauto[\s-]?generated\b", r"\bgenerated[\s-](by|from|with)\b", r"\bcodegen\b", r"\bscaffolded\b"],
        penalty: 0.45,
        severity: ContextSeverity::Medium,
        reason: "generated code",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "MonorepoTemplateRepository",
        patterns: &[r"\bmonorepo[\s-](template|starter|boilerplate)\b", r"\bturborepo[\s-]starter\b", r"\bworkspace[\s-]template\b"],
        penalty: 0.5,
        severity: ContextSeverity::High,
        reason: "monorepo template",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "AssetOnlyRepository",
        patterns: &[r"\bassets?[\s-]?(only)?\b", r"\bicons?[\s-]pack\b", r"\bwallpapers?\b", r"\bfonts?[\s-]collection\b", r"\bimages[\s-]repo\b"],
        penalty: 0.5,
        severity: ContextSeverity::High,
        reason: "asset files, not code",
        affected_categories: None,
    },
    NegativeContextSpec {
        tag: "MigratedRepository",
        patterns: &[r"\bmigrated[\s-](to|from)\b", r"\bmoved[\s-]to\b", r"\bsee[\s-]new[\s-]repo\b", r"\bnow[\s-]lives[\s-]at\b"],
        penalty: 0.35,
        severity: ContextSeverity::Low,
        reason: "migrated elsewhere",
        affected_categories: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_archetypes() {
        assert_eq!(NEGATIVE_CONTEXT_SPECS.len(), 18);
    }

    #[test]
    fn test_penalties_are_bounded() {
        for spec in NEGATIVE_CONTEXT_SPECS {
            assert!((0.0..=1.0).contains(&spec.penalty), "{}", spec.tag);
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        for spec in NEGATIVE_CONTEXT_SPECS {
            for pattern in spec.patterns {
                assert!(Regex::new(pattern).is_ok(), "{}: {pattern}", spec.tag);
            }
        }
    }

    #[test]
    fn test_tags_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in NEGATIVE_CONTEXT_SPECS {
            assert!(seen.insert(spec.tag), "duplicate tag {}", spec.tag);
        }
    }
}
