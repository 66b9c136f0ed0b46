//! Feature Rule Table
//!
//! A rule maps a keyword found in sketch source to a compile-time define.
//! The table is an external, comma separated file (`feature.txt`) that is
//! cached in the sketchbook `update/` folder and can be refreshed from the
//! network once per run.
//!
//! ```text
//! symbol,keyword,description
//! DisplayLEDPWM,ReefAngel.PWM.,Dimming Expansion PWM signals
//! ```

pub mod fetch;
pub mod loader;

use serde::Serialize;

pub use fetch::{FetchError, HttpRulesFetcher, RulesFetcher, DEFAULT_RULES_URL};
pub use loader::{load_rules, parse_rule_line, parse_rules};

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRule {
    /// Define emitted into the features header
    pub symbol: String,
    /// Substring searched for in the sketch
    pub keyword: String,
    /// Human readable description, shown when the feature is detected
    pub description: String,
}

impl FeatureRule {
    pub fn new(
        symbol: impl Into<String>,
        keyword: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            keyword: keyword.into(),
            description: description.into(),
        }
    }

    /// A rule without a symbol has nothing to emit. An empty keyword is
    /// contained in every sketch, so such a rule always fires.
    pub fn is_usable(&self) -> bool {
        !self.symbol.is_empty()
    }
}
