//! Rule table loading.
//!
//! Loading never fails: a missing file yields an empty table and a
//! malformed line yields a partial rule.

use std::path::Path;

use super::FeatureRule;

/// Load the rule table from `path`, in file order.
pub fn load_rules(path: &Path) -> Vec<FeatureRule> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let rules = parse_rules(&content);
            tracing::info!("Loaded {} feature rules from {}", rules.len(), path.display());
            rules
        }
        Err(e) => {
            tracing::warn!("Failed to read feature rules {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Parse rule table text. Blank lines are skipped.
pub fn parse_rules(content: &str) -> Vec<FeatureRule> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_rule_line)
        .collect()
}

/// Split a single line into at most three fields; missing fields are empty.
pub fn parse_rule_line(line: &str) -> FeatureRule {
    let mut fields = line.splitn(3, ',');
    let symbol = fields.next().unwrap_or_default();
    let keyword = fields.next().unwrap_or_default();
    let description = fields.next().unwrap_or_default();
    FeatureRule::new(symbol, keyword, description)
}
