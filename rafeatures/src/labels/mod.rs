//! Custom Labels
//!
//! Display strings used by the controller UI. Every label has a default;
//! sketches can rename labels with `// RA_LABEL KEY=VALUE` annotations.

pub mod defaults;
pub mod dictionary;
pub mod scanner;

pub use defaults::{build_defaults, DEFAULT_LABELS};
pub use dictionary::{LabelDictionary, LabelEvent};
pub use scanner::{parse_label_line, scan, LABEL_LINE_START};
