//! Technology taxonomy and skill-category inference.
//!
//! This crate provides:
//! - A static registry of ~190 language/technology profiles with
//!   category weights, aliases, ecosystem keywords, and tags
//! - A closed six-value skill category enum
//! - A total, memoizable inference function mapping any name string to
//!   one category plus a calibrated confidence
//!
//! The registry is immutable after process start and safe for
//! unsynchronized concurrent reads.

pub mod category;
pub mod inference;
pub mod profile;
pub mod registry;

pub use category::SkillCategory;
pub use inference::{
    infer_category, infer_category_cached, normalize_name, CategoryInference, InferenceCache,
    MapCache, NoCache,
};
pub use profile::LanguageProfile;
pub use registry::{find_profile, profiles};
