//! Property tests for the inference engine's totality guarantees.

use proptest::prelude::*;
use skillprint_taxonomy::{infer_category, normalize_name, SkillCategory};

proptest! {
    /// Any string at all yields a category from the closed set and a
    /// confidence inside [0.2, 0.99].
    #[test]
    fn inference_is_total(input in ".{0,256}") {
        let inference = infer_category(&input);
        prop_assert!(inference.confidence >= 0.2);
        prop_assert!(inference.confidence <= 0.99);
        prop_assert!(SkillCategory::PRIORITY.contains(&inference.category));
    }

    /// Normalization is idempotent.
    #[test]
    fn normalization_is_idempotent(input in ".{0,256}") {
        let once = normalize_name(&input);
        let twice = normalize_name(&once);
        prop_assert_eq!(once, twice);
    }

    /// Inference is a pure function of its input.
    #[test]
    fn inference_is_deterministic(input in "[a-zA-Z0-9 ._-]{0,64}") {
        let a = infer_category(&input);
        let b = infer_category(&input);
        prop_assert_eq!(a.category, b.category);
        prop_assert_eq!(a.confidence, b.confidence);
    }
}

#[test]
fn long_input_does_not_panic() {
    let long = "x".repeat(100_000);
    let inference = infer_category(&long);
    assert!(inference.confidence >= 0.2);
}
