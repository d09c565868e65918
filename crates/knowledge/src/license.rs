//! License-based language hints.
//!
//! A tertiary, low-confidence table: some license names leak the stack
//! ("Python-2.0" almost always sits on Python code). Kept deliberately
//! weak so a license can nudge but never decide a skill.

/// A license-name fragment and the weak language guess it implies.
#[derive(Debug, Clone, Copy)]
pub struct LicenseHint {
    /// Lowercased fragment searched for in license names/keywords.
    pub fragment: &'static str,
    /// Canonical language the fragment suggests.
    pub language: &'static str,
    /// Association strength, intentionally low.
    pub score: f64,
    /// Reliability, intentionally low.
    pub confidence: f64,
}

pub(crate) static LICENSE_HINTS: &[LicenseHint] = &[
    LicenseHint { fragment: "python-2.0", language: "Python", score: 0.3, confidence: 0.4 },
    LicenseHint { fragment: "psf", language: "Python", score: 0.25, confidence: 0.35 },
    LicenseHint { fragment: "php-3.0", language: "PHP", score: 0.3, confidence: 0.4 },
    LicenseHint { fragment: "ruby", language: "Ruby", score: 0.25, confidence: 0.35 },
    LicenseHint { fragment: "artistic", language: "Perl", score: 0.2, confidence: 0.3 },
    LicenseHint { fragment: "eclipse", language: "Java", score: 0.15, confidence: 0.25 },
    LicenseHint { fragment: "ms-pl", language: "C#", score: 0.15, confidence: 0.25 },
    LicenseHint { fragment: "ofl", language: "CSS", score: 0.12, confidence: 0.2 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_hints_stay_weak() {
        for hint in LICENSE_HINTS {
            assert!(hint.score <= 0.35, "{} too strong", hint.fragment);
            assert!(hint.confidence <= 0.45, "{} too confident", hint.fragment);
        }
    }

    #[test]
    fn test_fragments_are_lowercase() {
        for hint in LICENSE_HINTS {
            assert_eq!(hint.fragment, hint.fragment.to_lowercase());
        }
    }
}
