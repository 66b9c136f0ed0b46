//! RAFeatures - Reef Angel sketch feature detection and label generation
//!
//! This library scans a Reef Angel controller sketch, works out which
//! optional features it uses, and generates the two headers the sketch is
//! compiled against: `ReefAngel_Features.h` and `RA_CustomLabels.h`.
//!
//! # Quick Start
//!
//! ```no_run
//! use rafeatures::{process_source, rules::parse_rules};
//!
//! let rules = parse_rules("PHEXPANSION,PHExp,pH Expansion\n");
//! let sketch = std::fs::read_to_string("Reef.ino").unwrap();
//! let output = process_source(&sketch, "Reef.ino", &rules);
//!
//! for define in output.features.symbols() {
//!     println!("#define {}", define);
//! }
//! ```
//!
//! # Features
//!
//! - **Feature detection**: rule table keywords, relay expansion boxes, menu style
//! - **Custom labels**: `// RA_LABEL KEY=VALUE` annotations over the default labels
//! - **Header generation**: include-guarded headers with a generated banner
//! - **Rule table download**: one-shot fetch when the cached table is missing

pub mod core;
pub mod features;
pub mod generator;
pub mod labels;
pub mod rules;
pub mod version;

// Re-export main types
pub use crate::core::{
    process_source, process_source_with_banner, ProcessOptions, ProcessOutput, ProcessReport,
    RaFeaturesCore, RaFeaturesError, SketchbookLayout,
};
pub use features::{detect, DetectedFeature, DetectedFeatureSet, FeatureOrigin};
pub use generator::{render_features, render_labels, Banner};
pub use labels::{build_defaults, LabelDictionary, LabelEvent};
pub use rules::{load_rules, FeatureRule, HttpRulesFetcher, RulesFetcher};
pub use version::{LibraryVersion, Version};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FeatureRule, HttpRulesFetcher, LabelEvent, ProcessOptions, ProcessReport, RaFeaturesCore,
        RaFeaturesError, RulesFetcher,
    };
}
