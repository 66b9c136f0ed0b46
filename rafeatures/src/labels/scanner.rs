//! Label override annotations.
//!
//! A sketch renames a label with a line of the form
//!
//! ```text
//! // RA_LABEL LABEL_PORT1=Return Pump
//! ```

use super::dictionary::{LabelDictionary, LabelEvent};

pub const LABEL_LINE_START: &str = "// RA_LABEL ";

/// Split an annotation line into key and value. `None` when the line is not
/// an annotation or has no `=`.
pub fn parse_label_line(line: &str) -> Option<(&str, &str)> {
    line.strip_prefix(LABEL_LINE_START)?.split_once('=')
}

/// Apply every annotation in `source` to `dict`, in file order.
pub fn scan(source: &str, dict: &mut LabelDictionary) -> Vec<LabelEvent> {
    source
        .lines()
        .filter_map(parse_label_line)
        .map(|(key, value)| dict.apply_override(key, value))
        .collect()
}
