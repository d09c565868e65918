//! Noise tokens: common filler words that trigger false language matches.

use serde::{Deserialize, Serialize};

/// How aggressively a noise token is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseSeverity {
    /// Excluded from matching outright.
    Hard,
    /// Matches survive but their score and confidence are discounted.
    Soft,
    /// Mild discount; the token is only weak noise in most contexts.
    Contextual,
}

/// One noise token and its suppression profile.
#[derive(Debug, Clone)]
pub struct NoiseTokenProfile {
    /// The token, lowercased.
    pub token: &'static str,
    /// Suppression tier.
    pub severity: NoiseSeverity,
    /// Multiplicative penalty applied to matches (ignored for hard tokens).
    pub penalty: f64,
    /// Spellings treated the same as `token`.
    pub aliases: &'static [&'static str],
}

/// Filler vocabulary observed across repository names and descriptions.
pub(crate) static NOISE_TOKENS: &[NoiseTokenProfile] = &[
    // Hard: never evidence of anything.
    NoiseTokenProfile { token: "test", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["tests", "testing"] },
    NoiseTokenProfile { token: "repo", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["repository", "repos"] },
    NoiseTokenProfile { token: "project", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["projects", "proj"] },
    NoiseTokenProfile { token: "tmp", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["temp", "scratch"] },
    NoiseTokenProfile { token: "misc", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["stuff", "random"] },
    NoiseTokenProfile { token: "foo", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["bar", "baz", "qux"] },
    NoiseTokenProfile { token: "hello", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["world", "hello-world"] },
    NoiseTokenProfile { token: "untitled", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["unnamed", "noname"] },
    NoiseTokenProfile { token: "my", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["mine", "personal"] },
    NoiseTokenProfile { token: "new", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["old"] },
    NoiseTokenProfile { token: "main", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["master", "default"] },
    NoiseTokenProfile { token: "first", severity: NoiseSeverity::Hard, penalty: 0.0, aliases: &["second", "initial"] },
    // Soft: heavy discount.
    NoiseTokenProfile { token: "template", severity: NoiseSeverity::Soft, penalty: 0.5, aliases: &["templates", "boilerplate"] },
    NoiseTokenProfile { token: "starter", severity: NoiseSeverity::Soft, penalty: 0.5, aliases: &["skeleton", "scaffold"] },
    NoiseTokenProfile { token: "example", severity: NoiseSeverity::Soft, penalty: 0.55, aliases: &["examples", "sample", "samples"] },
    NoiseTokenProfile { token: "demo", severity: NoiseSeverity::Soft, penalty: 0.5, aliases: &["demos", "showcase"] },
    NoiseTokenProfile { token: "tutorial", severity: NoiseSeverity::Soft, penalty: 0.6, aliases: &["tutorials", "course", "class"] },
    NoiseTokenProfile { token: "practice", severity: NoiseSeverity::Soft, penalty: 0.6, aliases: &["exercise", "exercises", "kata"] },
    NoiseTokenProfile { token: "playground", severity: NoiseSeverity::Soft, penalty: 0.55, aliases: &["sandbox", "experiment", "experiments"] },
    NoiseTokenProfile { token: "learn", severity: NoiseSeverity::Soft, penalty: 0.65, aliases: &["learning", "study", "studies"] },
    NoiseTokenProfile { token: "toy", severity: NoiseSeverity::Soft, penalty: 0.5, aliases: &["tiny", "mini"] },
    NoiseTokenProfile { token: "clone", severity: NoiseSeverity::Soft, penalty: 0.6, aliases: &["copy", "mirror"] },
    // Contextual: mild discount.
    NoiseTokenProfile { token: "simple", severity: NoiseSeverity::Contextual, penalty: 0.75, aliases: &["basic", "minimal"] },
    NoiseTokenProfile { token: "app", severity: NoiseSeverity::Contextual, penalty: 0.85, aliases: &["apps", "application"] },
    NoiseTokenProfile { token: "site", severity: NoiseSeverity::Contextual, penalty: 0.85, aliases: &["page", "pages"] },
    NoiseTokenProfile { token: "tool", severity: NoiseSeverity::Contextual, penalty: 0.85, aliases: &["tools", "utils", "utility", "utilities"] },
    NoiseTokenProfile { token: "core", severity: NoiseSeverity::Contextual, penalty: 0.85, aliases: &["base", "common"] },
    NoiseTokenProfile { token: "dev", severity: NoiseSeverity::Contextual, penalty: 0.8, aliases: &["develop", "development"] },
    NoiseTokenProfile { token: "kit", severity: NoiseSeverity::Contextual, penalty: 0.85, aliases: &["pack", "bundle"] },
    NoiseTokenProfile { token: "lab", severity: NoiseSeverity::Contextual, penalty: 0.8, aliases: &["labs"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_tokens_carry_zero_penalty() {
        for profile in NOISE_TOKENS {
            if profile.severity == NoiseSeverity::Hard {
                assert_eq!(profile.penalty, 0.0, "{}", profile.token);
            } else {
                assert!(profile.penalty > 0.0 && profile.penalty < 1.0, "{}", profile.token);
            }
        }
    }

    #[test]
    fn test_tokens_are_lowercase() {
        for profile in NOISE_TOKENS {
            assert_eq!(profile.token, profile.token.to_lowercase());
        }
    }
}
