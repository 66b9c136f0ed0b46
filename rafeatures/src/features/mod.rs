//! Feature Detection
//!
//! Maps sketch source text to the ordered list of defines written into
//! `ReefAngel_Features.h`. Detection is plain substring matching: the rule
//! table first, then two structural checks (relay expansion boxes and menu
//! style).

pub mod detector;

pub use detector::{
    detect, DetectedFeature, DetectedFeatureSet, FeatureOrigin, MAX_MENU_ENTRIES,
    MAX_RELAY_EXPANSIONS, STANDARD_MENU_MARKER,
};
