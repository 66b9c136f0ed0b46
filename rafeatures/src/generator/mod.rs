//! Header Generation
//!
//! Renders the two headers the sketch is compiled against:
//!
//! ```text
//! libraries/ReefAngel_Features/ReefAngel_Features.h   one #define per feature
//! libraries/RA_CustomLabels/RA_CustomLabels.h         one PROGMEM string per label
//! ```
//!
//! Both start with the same preamble (banner + license block) and are pure
//! string assembly. The files are compiled as-is, so line layout matters.

pub mod banner;
pub mod features;
pub mod labels;

pub use banner::{render_preamble, Banner, LICENSE_HEADER, TIMESTAMP_FORMAT};
pub use features::{
    parse_feature_defines, render_features, render_features_with_banner, FEATURES_GUARD,
};
pub use labels::{render_labels, render_labels_with_banner, LABELS_FOOTER, LABELS_GUARD};
