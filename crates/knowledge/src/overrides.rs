//! Hand-tuned overrides layered on top of the generated hint tables.
//!
//! Auto-generation from the taxonomy gets the bulk right but misfires on
//! ambiguous short tokens ("go", "r", "c") and under-weights a few
//! unmistakable ones ("tensorflow"). Overrides replace colliding
//! generated keys outright; they never sum with them.

use crate::hint::WeightedHint;

/// A hand-tuned hint keyed by exact token.
#[derive(Debug, Clone, Copy)]
pub struct HintOverride {
    /// Lowercased token or topic key.
    pub key: &'static str,
    /// Replacement hint.
    pub language: &'static str,
    pub score: f64,
    pub confidence: f64,
    pub specificity: f64,
}

impl HintOverride {
    pub(crate) fn hint(&self) -> WeightedHint {
        WeightedHint {
            language: self.language,
            score: self.score,
            confidence: self.confidence,
            specificity: self.specificity,
        }
        .clamped()
    }
}

/// Overrides for the free-text token table. Ambiguous English words get
/// drastically reduced confidence; unmistakable names get a boost.
pub(crate) static TOKEN_OVERRIDES: &[HintOverride] = &[
    // Too ambiguous as plain English to trust from free text.
    HintOverride { key: "go", language: "Go", score: 0.45, confidence: 0.3, specificity: 0.2 },
    HintOverride { key: "r", language: "R", score: 0.3, confidence: 0.2, specificity: 0.1 },
    HintOverride { key: "c", language: "C", score: 0.3, confidence: 0.2, specificity: 0.1 },
    HintOverride { key: "d", language: "D", score: 0.2, confidence: 0.15, specificity: 0.1 },
    HintOverride { key: "v", language: "V", score: 0.2, confidence: 0.15, specificity: 0.1 },
    HintOverride { key: "swift", language: "Swift", score: 0.6, confidence: 0.45, specificity: 0.4 },
    HintOverride { key: "rocket", language: "Rocket", score: 0.4, confidence: 0.3, specificity: 0.3 },
    HintOverride { key: "spark", language: "Spark", score: 0.5, confidence: 0.4, specificity: 0.4 },
    HintOverride { key: "ray", language: "Ray", score: 0.35, confidence: 0.25, specificity: 0.25 },
    HintOverride { key: "shell", language: "Shell", score: 0.55, confidence: 0.45, specificity: 0.4 },
    HintOverride { key: "make", language: "Make", score: 0.3, confidence: 0.2, specificity: 0.15 },
    HintOverride { key: "git", language: "Git", score: 0.4, confidence: 0.3, specificity: 0.3 },
    HintOverride { key: "express", language: "Express", score: 0.5, confidence: 0.4, specificity: 0.35 },
    HintOverride { key: "next", language: "Next.js", score: 0.5, confidence: 0.35, specificity: 0.3 },
    HintOverride { key: "remix", language: "Remix", score: 0.45, confidence: 0.35, specificity: 0.3 },
    HintOverride { key: "fiber", language: "Fiber", score: 0.35, confidence: 0.25, specificity: 0.25 },
    HintOverride { key: "gin", language: "Gin", score: 0.4, confidence: 0.3, specificity: 0.3 },
    HintOverride { key: "flask", language: "Flask", score: 0.7, confidence: 0.6, specificity: 0.6 },
    HintOverride { key: "rails", language: "Rails", score: 0.75, confidence: 0.65, specificity: 0.65 },
    // Unmistakable names deserve full trust even from free text.
    HintOverride { key: "tensorflow", language: "TensorFlow", score: 0.95, confidence: 0.93, specificity: 0.95 },
    HintOverride { key: "pytorch", language: "PyTorch", score: 0.95, confidence: 0.93, specificity: 0.95 },
    HintOverride { key: "kubernetes", language: "Kubernetes", score: 0.95, confidence: 0.93, specificity: 0.95 },
    HintOverride { key: "k8s", language: "Kubernetes", score: 0.92, confidence: 0.9, specificity: 0.92 },
    HintOverride { key: "terraform", language: "Terraform", score: 0.94, confidence: 0.92, specificity: 0.94 },
    HintOverride { key: "postgresql", language: "PostgreSQL", score: 0.94, confidence: 0.92, specificity: 0.94 },
    HintOverride { key: "postgres", language: "PostgreSQL", score: 0.92, confidence: 0.9, specificity: 0.92 },
    HintOverride { key: "typescript", language: "TypeScript", score: 0.94, confidence: 0.92, specificity: 0.94 },
    HintOverride { key: "javascript", language: "JavaScript", score: 0.92, confidence: 0.9, specificity: 0.92 },
    HintOverride { key: "rust", language: "Rust", score: 0.9, confidence: 0.85, specificity: 0.85 },
    HintOverride { key: "python", language: "Python", score: 0.92, confidence: 0.9, specificity: 0.9 },
    HintOverride { key: "django", language: "Django", score: 0.9, confidence: 0.88, specificity: 0.9 },
    HintOverride { key: "graphql", language: "GraphQL", score: 0.88, confidence: 0.85, specificity: 0.88 },
    HintOverride { key: "solidity", language: "Solidity", score: 0.92, confidence: 0.9, specificity: 0.92 },
];

/// Overrides for the curated topic table. Topics are chosen by the
/// repository owner, so even short names are trustworthy here.
pub(crate) static TOPIC_OVERRIDES: &[HintOverride] = &[
    HintOverride { key: "golang", language: "Go", score: 0.95, confidence: 0.94, specificity: 0.95 },
    HintOverride { key: "go", language: "Go", score: 0.85, confidence: 0.8, specificity: 0.7 },
    HintOverride { key: "rust", language: "Rust", score: 0.95, confidence: 0.94, specificity: 0.92 },
    HintOverride { key: "python", language: "Python", score: 0.95, confidence: 0.94, specificity: 0.92 },
    HintOverride { key: "javascript", language: "JavaScript", score: 0.94, confidence: 0.93, specificity: 0.9 },
    HintOverride { key: "typescript", language: "TypeScript", score: 0.94, confidence: 0.93, specificity: 0.9 },
    HintOverride { key: "react", language: "React", score: 0.94, confidence: 0.92, specificity: 0.9 },
    HintOverride { key: "reactjs", language: "React", score: 0.94, confidence: 0.92, specificity: 0.92 },
    HintOverride { key: "nextjs", language: "Next.js", score: 0.94, confidence: 0.92, specificity: 0.92 },
    HintOverride { key: "vuejs", language: "Vue", score: 0.93, confidence: 0.91, specificity: 0.92 },
    HintOverride { key: "nodejs", language: "Node.js", score: 0.92, confidence: 0.9, specificity: 0.88 },
    HintOverride { key: "machine-learning", language: "scikit-learn", score: 0.5, confidence: 0.4, specificity: 0.3 },
    HintOverride { key: "deep-learning", language: "PyTorch", score: 0.55, confidence: 0.45, specificity: 0.35 },
    HintOverride { key: "devops", language: "Docker", score: 0.4, confidence: 0.3, specificity: 0.2 },
    HintOverride { key: "kubernetes", language: "Kubernetes", score: 0.96, confidence: 0.95, specificity: 0.95 },
    HintOverride { key: "k8s", language: "Kubernetes", score: 0.94, confidence: 0.93, specificity: 0.93 },
    HintOverride { key: "docker", language: "Docker", score: 0.94, confidence: 0.93, specificity: 0.9 },
    HintOverride { key: "terraform", language: "Terraform", score: 0.95, confidence: 0.94, specificity: 0.94 },
    HintOverride { key: "aws", language: "AWS", score: 0.92, confidence: 0.9, specificity: 0.85 },
    HintOverride { key: "postgresql", language: "PostgreSQL", score: 0.95, confidence: 0.94, specificity: 0.94 },
    HintOverride { key: "mongodb", language: "MongoDB", score: 0.95, confidence: 0.94, specificity: 0.94 },
    HintOverride { key: "tailwindcss", language: "Tailwind CSS", score: 0.94, confidence: 0.92, specificity: 0.93 },
    HintOverride { key: "fastapi", language: "FastAPI", score: 0.94, confidence: 0.93, specificity: 0.94 },
    HintOverride { key: "llm", language: "LangChain", score: 0.42, confidence: 0.32, specificity: 0.25 },
    HintOverride { key: "ai", language: "OpenAI", score: 0.35, confidence: 0.25, specificity: 0.15 },
];

/// A regex hint definition, compiled during knowledge-base construction.
#[derive(Debug, Clone, Copy)]
pub struct RegexHintSpec {
    /// Pattern matched against lowercased repository text.
    pub pattern: &'static str,
    pub language: &'static str,
    pub score: f64,
    pub confidence: f64,
}

/// Multi-word and punctuated technology mentions that token matching
/// cannot see.
pub(crate) static REGEX_HINT_SPECS: &[RegexHintSpec] = &[
    RegexHintSpec { pattern: r"\bnext\.?js\b", language: "Next.js", score: 0.9, confidence: 0.88 },
    RegexHintSpec { pattern: r"\bnode\.?js\b", language: "Node.js", score: 0.88, confidence: 0.86 },
    RegexHintSpec { pattern: r"\bvue\.?js\b", language: "Vue", score: 0.88, confidence: 0.86 },
    RegexHintSpec { pattern: r"\breact\.?js\b", language: "React", score: 0.88, confidence: 0.86 },
    RegexHintSpec { pattern: r"\bruby\s+on\s+rails\b", language: "Rails", score: 0.92, confidence: 0.9 },
    RegexHintSpec { pattern: r"\basp\.net\b", language: "ASP.NET", score: 0.9, confidence: 0.88 },
    RegexHintSpec { pattern: r"c\+\+", language: "C++", score: 0.9, confidence: 0.88 },
    RegexHintSpec { pattern: r"\bc#", language: "C#", score: 0.88, confidence: 0.86 },
    RegexHintSpec { pattern: r"\.net\s+(core|framework)\b", language: "C#", score: 0.82, confidence: 0.8 },
    RegexHintSpec { pattern: r"\bobjective[\s-]c\b", language: "Objective-C", score: 0.88, confidence: 0.86 },
    RegexHintSpec { pattern: r"\breact\s+native\b", language: "React Native", score: 0.9, confidence: 0.88 },
    RegexHintSpec { pattern: r"\bgithub\s+actions\b", language: "GitHub Actions", score: 0.86, confidence: 0.84 },
    RegexHintSpec { pattern: r"\bgoogle\s+cloud\b", language: "Google Cloud", score: 0.82, confidence: 0.8 },
    RegexHintSpec { pattern: r"\bscikit[\s-]?learn\b", language: "scikit-learn", score: 0.9, confidence: 0.88 },
    RegexHintSpec { pattern: r"\bhugging\s?face\b", language: "Hugging Face", score: 0.88, confidence: 0.86 },
    RegexHintSpec { pattern: r"\bspring\s+boot\b", language: "Spring", score: 0.9, confidence: 0.88 },
    RegexHintSpec { pattern: r"\btailwind(\s?css)?\b", language: "Tailwind CSS", score: 0.86, confidence: 0.84 },
    RegexHintSpec { pattern: r"\bstable\s+diffusion\b", language: "Stable Diffusion", score: 0.86, confidence: 0.84 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use skillprint_taxonomy::find_profile;

    #[test]
    fn test_override_languages_exist_in_registry() {
        for table in [TOKEN_OVERRIDES, TOPIC_OVERRIDES] {
            for entry in table {
                assert!(
                    find_profile(entry.language).is_some(),
                    "override {} points at unknown language {}",
                    entry.key,
                    entry.language
                );
            }
        }
        for spec in REGEX_HINT_SPECS {
            assert!(find_profile(spec.language).is_some(), "{}", spec.language);
        }
    }

    #[test]
    fn test_regex_hint_patterns_compile() {
        for spec in REGEX_HINT_SPECS {
            assert!(regex::Regex::new(spec.pattern).is_ok(), "{}", spec.pattern);
        }
    }

    #[test]
    fn test_override_values_in_range() {
        for table in [TOKEN_OVERRIDES, TOPIC_OVERRIDES] {
            for entry in table {
                let hint = entry.hint();
                assert!(hint.score <= 1.0 && hint.confidence <= 1.0);
            }
        }
    }
}
