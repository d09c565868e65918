//! Human-readable evidence highlights.

use crate::aggregate::SkillRecord;
use crate::signal::{EvidenceSignal, SignalSource};

/// Display highlight for one signal, or `None` for context-only signals
/// (those explain penalties, not skills).
#[must_use]
pub fn highlight(signal: &EvidenceSignal) -> Option<String> {
    if signal.source.is_context_only() {
        return None;
    }
    let phrase = match signal.source {
        SignalSource::PrimaryLanguage => format!("Primary language: {}", signal.detail),
        SignalSource::LanguageBytes => format!("Code volume: {}", signal.detail),
        SignalSource::Topics => match &signal.token {
            Some(token) => format!("Tagged \"{token}\""),
            None => signal.detail.clone(),
        },
        SignalSource::RepoText => match &signal.token {
            Some(token) => format!("Mentioned as \"{token}\""),
            None => signal.detail.clone(),
        },
        SignalSource::License => format!("License hint: {}", signal.detail),
        SignalSource::RepoMetadata => signal.detail.clone(),
        SignalSource::RepoFlags | SignalSource::NegativeContext => return None,
    };
    Some(phrase)
}

/// One-line summary of a computed profile.
#[must_use]
pub fn summarize_profile(records: &[SkillRecord], total_repos: usize) -> String {
    if records.is_empty() {
        return format!("No skills detected across {total_repos} repositories");
    }
    let penalized = records.iter().filter(|r| r.context_penalty > 0.0).count();
    let mut summary = format!(
        "{} skills detected across {} repositories",
        records.len(),
        total_repos
    );
    if penalized > 0 {
        summary.push_str(&format!(", {penalized} discounted by repository context"));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillprint_taxonomy::SkillCategory;

    fn signal(source: SignalSource, token: Option<&str>) -> EvidenceSignal {
        EvidenceSignal {
            language: "Go".into(),
            category: SkillCategory::Backend,
            source,
            score: 0.8,
            confidence: 0.8,
            token: token.map(str::to_string),
            detail: "declared primary language of svc".into(),
        }
    }

    #[test]
    fn test_context_signals_have_no_highlight() {
        assert!(highlight(&signal(SignalSource::RepoFlags, None)).is_none());
        assert!(highlight(&signal(SignalSource::NegativeContext, None)).is_none());
    }

    #[test]
    fn test_topic_highlight_names_the_token() {
        let h = highlight(&signal(SignalSource::Topics, Some("golang"))).unwrap();
        assert_eq!(h, "Tagged \"golang\"");
    }

    #[test]
    fn test_primary_highlight_uses_detail() {
        let h = highlight(&signal(SignalSource::PrimaryLanguage, None)).unwrap();
        assert!(h.contains("Primary language"));
    }

    #[test]
    fn test_empty_profile_summary() {
        assert_eq!(
            summarize_profile(&[], 7),
            "No skills detected across 7 repositories"
        );
    }
}
