//! Feature detection over raw sketch text.

use serde::Serialize;

use crate::rules::FeatureRule;

pub const MAX_RELAY_EXPANSIONS: usize = 8;
pub const MAX_MENU_ENTRIES: usize = 9;
pub const STANDARD_MENU_MARKER: &str = "ReefAngel.AddStandardMenu";

/// Why a feature ended up in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureOrigin {
    /// Always enabled
    Baseline,
    /// Keyword from the rule table
    Rule,
    /// Relay expansion or menu checks
    Structural,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedFeature {
    pub symbol: String,
    pub description: String,
    pub origin: FeatureOrigin,
}

/// Insertion-ordered set of feature defines, unique by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectedFeatureSet {
    features: Vec<DetectedFeature>,
}

impl DetectedFeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feature unless its symbol is already present. Returns whether
    /// it was added.
    pub fn add(&mut self, symbol: &str, description: &str, origin: FeatureOrigin) -> bool {
        if self.contains(symbol) {
            return false;
        }
        tracing::info!("{}", description);
        self.features.push(DetectedFeature {
            symbol: symbol.to_string(),
            description: description.to_string(),
            origin,
        });
        true
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.features.iter().any(|f| f.symbol == symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.symbol.as_str())
    }

    pub fn features(&self) -> &[DetectedFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Run every check against `source`.
pub fn detect(source: &str, rules: &[FeatureRule]) -> DetectedFeatureSet {
    let mut set = DetectedFeatureSet::new();

    tracing::info!("The following features were automatically added:");
    set.add("WDT", "Watchdog Timer", FeatureOrigin::Baseline);
    set.add("VersionMenu", "Version Menu", FeatureOrigin::Baseline);

    tracing::info!("The following features were detected:");
    for rule in rules {
        if !rule.is_usable() {
            tracing::debug!("Skipping rule without a symbol {:?}", rule);
            continue;
        }
        if source.contains(&rule.keyword) {
            set.add(&rule.symbol, &rule.description, FeatureOrigin::Rule);
        }
    }

    check_relay_expansions(source, &mut set);
    check_custom_menu(source, &mut set);

    set
}

/// Highest `i` in `1..=max` for which `pattern(i)` occurs in `source`.
/// Gaps are not checked: `Box1_` and `Box5_` report 5.
fn highest_index(source: &str, max: usize, pattern: impl Fn(usize) -> String) -> Option<usize> {
    (1..=max).filter(|i| source.contains(&pattern(*i))).last()
}

fn check_relay_expansions(source: &str, set: &mut DetectedFeatureSet) {
    if let Some(count) = highest_index(source, MAX_RELAY_EXPANSIONS, |i| format!("Box{}_", i)) {
        set.add(
            &format!("InstalledRelayExpansionModules {}", count),
            &format!("Number of Relay Expansion Modules: {}", count),
            FeatureOrigin::Structural,
        );
    }
}

fn check_custom_menu(source: &str, set: &mut DetectedFeatureSet) {
    if let Some(entries) = highest_index(source, MAX_MENU_ENTRIES, |i| format!("MenuEntry{}", i)) {
        set.add(
            &format!("CUSTOM_MENU_ENTRIES {}", entries),
            &format!("Number of Menu Options: {}", entries),
            FeatureOrigin::Structural,
        );
    } else if source.contains(STANDARD_MENU_MARKER) {
        tracing::info!("Standard Menu");
        for (symbol, description) in [
            ("WavemakerSetup", "Wavemaker Menu"),
            ("ATOSetup", "ATO Menu"),
            ("OverheatSetup", "Overheat Menu"),
            ("StandardLightSetup", "Standard Light Menu"),
        ] {
            set.add(symbol, description, FeatureOrigin::Structural);
        }
    } else {
        set.add("SIMPLE_MENU", "Simple Menu", FeatureOrigin::Structural);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn symbols(set: &DetectedFeatureSet) -> Vec<&str> {
        set.symbols().collect()
    }

    #[test]
    fn test_empty_source_baseline() {
        let set = detect("", &[]);
        assert_eq!(symbols(&set), vec!["WDT", "VersionMenu", "SIMPLE_MENU"]);
    }

    #[test]
    fn test_rules_in_table_order() {
        let rules = vec![
            FeatureRule::new("SALINITYEXPANSION", "Params.Salinity", "Salinity Expansion"),
            FeatureRule::new("ORPEXPANSION", "Params.ORP", "ORP Expansion"),
            FeatureRule::new("PHEXPANSION", "PHExp", "pH Expansion"),
        ];
        let source = "x = ReefAngel.Params.ORP; y = ReefAngel.Params.Salinity;";
        let set = detect(source, &rules);
        assert_eq!(
            symbols(&set),
            vec!["WDT", "VersionMenu", "SALINITYEXPANSION", "ORPEXPANSION", "SIMPLE_MENU"]
        );
    }

    #[test]
    fn test_duplicate_symbols_suppressed() {
        let rules = vec![
            FeatureRule::new("DisplayLEDPWM", "PWM.SetDaylight", "Daylight PWM"),
            FeatureRule::new("DisplayLEDPWM", "PWM.SetActinic", "Actinic PWM"),
            FeatureRule::new("WDT", "wdt", "Watchdog again"),
        ];
        let source = "PWM.SetDaylight(1); PWM.SetActinic(2); wdt";
        let set = detect(source, &rules);
        let all: Vec<_> = symbols(&set);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(set.features()[2].description, "Daylight PWM");
    }

    #[test]
    fn test_partial_rules() {
        let rules = vec![
            FeatureRule::new("NOKEYWORD", "", ""),
            FeatureRule::new("", "loop", "no symbol"),
        ];
        let set = detect("void loop() {}", &rules);
        assert!(set.contains("NOKEYWORD"));
        assert!(!set.contains(""));
        assert_eq!(
            symbols(&set),
            vec!["WDT", "VersionMenu", "NOKEYWORD", "SIMPLE_MENU"]
        );
    }

    #[test]
    fn test_symbol_only_line_always_fires() {
        let rules = crate::rules::parse_rules("ALWAYSON\n");
        let set = detect("void loop() {}", &rules);
        assert!(set.contains("ALWAYSON"));
    }

    #[test]
    fn test_relay_highest_index_wins() {
        let set = detect("Box1_Port1 Box3_Port2", &[]);
        assert!(set.contains("InstalledRelayExpansionModules 3"));
        assert!(!set.contains("InstalledRelayExpansionModules 1"));
    }

    #[test]
    fn test_relay_gap_not_validated() {
        let set = detect("Box1_Port1 Box5_Port8", &[]);
        assert!(set.contains("InstalledRelayExpansionModules 5"));
    }

    #[test]
    fn test_relay_out_of_range_ignored() {
        let set = detect("Box9_Port1 Box0_Port1", &[]);
        assert!(!set.symbols().any(|s| s.starts_with("InstalledRelayExpansionModules")));
    }

    #[test]
    fn test_custom_menu_excludes_fallbacks() {
        let source = "MenuEntry2() {} MenuEntry5() {} ReefAngel.AddStandardMenu();";
        let set = detect(source, &[]);
        assert!(set.contains("CUSTOM_MENU_ENTRIES 5"));
        assert!(!set.contains("SIMPLE_MENU"));
        assert!(!set.contains("WavemakerSetup"));
    }

    #[test]
    fn test_standard_menu() {
        let set = detect("ReefAngel.AddStandardMenu();", &[]);
        assert_eq!(
            symbols(&set),
            vec![
                "WDT",
                "VersionMenu",
                "WavemakerSetup",
                "ATOSetup",
                "OverheatSetup",
                "StandardLightSetup"
            ]
        );
    }

    #[test]
    fn test_simple_menu_only() {
        let set = detect("void setup() {}", &[]);
        assert!(set.contains("SIMPLE_MENU"));
        assert!(!set.contains("WavemakerSetup"));
        assert!(!set.contains("ATOSetup"));
    }

    #[test]
    fn test_add_reports_duplicates() {
        let mut set = DetectedFeatureSet::new();
        assert!(set.add("A", "a", FeatureOrigin::Rule));
        assert!(!set.add("A", "again", FeatureOrigin::Structural));
        assert_eq!(set.len(), 1);
    }
}
