//! `RA_CustomLabels.h` rendering.

use super::banner::{render_preamble, Banner};
use crate::labels::LabelDictionary;

pub const LABELS_GUARD: &str = "__RA_CUSTOMLABELS_H__";

/// Buttons and the pointer arrays the libraries index into. Static, not
/// derived from the sketch.
pub const LABELS_FOOTER: &str = "\
// Buttons
const char CUSTOMLABELOKBUTTON[] PROGMEM = \"Ok\";
const char CUSTOMLABELCANCELBUTTON[] PROGMEM = \"Cancel\";

// Arrays
static PROGMEM const char * const LABEL_PWME[] = {LABEL_PWME0,LABEL_PWME1,LABEL_PWME2,LABEL_PWME3,LABEL_PWME4,LABEL_PWME5};
static PROGMEM const char * const LABEL_WL[] = {LABEL_WL0,LABEL_WL1,LABEL_WL2,LABEL_WL3,LABEL_WL4};
static PROGMEM const char * const LABEL_IO[] = {LABEL_IO0,LABEL_IO1,LABEL_IO2,LABEL_IO3,LABEL_IO4,LABEL_IO5};
static PROGMEM const char * const LABEL_C[] = {LABEL_C0,LABEL_C1,LABEL_C2,LABEL_C3,LABEL_C4,LABEL_C5,LABEL_C6,LABEL_C7};
static PROGMEM const char * const LABEL_AI[] = {LABEL_AI_WHITE, LABEL_AI_BLUE, LABEL_AI_ROYAL_BLUE};
static PROGMEM const char * const LABEL_RF[] = {LABEL_RF_WHITE, LABEL_RF_ROYAL_BLUE, LABEL_RF_RED, LABEL_RF_BLUE, LABEL_RF_GREEN, LABEL_RF_INTENSITY};
static PROGMEM const char * const LABEL_RELAY[] = {RELAY_BOX_LABEL, EXP_RELAY_1_LABEL, EXP_RELAY_2_LABEL, EXP_RELAY_3_LABEL, EXP_RELAY_4_LABEL, EXP_RELAY_5_LABEL, EXP_RELAY_6_LABEL, EXP_RELAY_7_LABEL, EXP_RELAY_8_LABEL, PWM_EXPANSION_LABEL, RF_EXPANSION_LABEL, RF_EXPANSION_LABEL1, AI_LABEL, IO_EXPANSION_LABEL, DCPUMP_LABEL, CVAR_LABEL, STATUS_LABEL, ALERT_LABEL};
static PROGMEM const char * const LABEL_PORT[] = {LABEL_PORT1,LABEL_PORT2,LABEL_PORT3,LABEL_PORT4,LABEL_PORT5,LABEL_PORT6,LABEL_PORT7,LABEL_PORT8,LABEL_PORT11,LABEL_PORT12,LABEL_PORT13,LABEL_PORT14,LABEL_PORT15,LABEL_PORT16,LABEL_PORT17,LABEL_PORT18,LABEL_PORT21,LABEL_PORT22,LABEL_PORT23,LABEL_PORT24,LABEL_PORT25,LABEL_PORT26,LABEL_PORT27,LABEL_PORT28,LABEL_PORT31,LABEL_PORT32,LABEL_PORT33,LABEL_PORT34,LABEL_PORT35,LABEL_PORT36,LABEL_PORT37,LABEL_PORT38,LABEL_PORT41,LABEL_PORT42,LABEL_PORT43,LABEL_PORT44,LABEL_PORT45,LABEL_PORT46,LABEL_PORT47,LABEL_PORT48,LABEL_PORT51,LABEL_PORT52,LABEL_PORT53,LABEL_PORT54,LABEL_PORT55,LABEL_PORT56,LABEL_PORT57,LABEL_PORT58,LABEL_PORT61,LABEL_PORT62,LABEL_PORT63,LABEL_PORT64,LABEL_PORT65,LABEL_PORT66,LABEL_PORT67,LABEL_PORT68,LABEL_PORT71,LABEL_PORT72,LABEL_PORT73,LABEL_PORT74,LABEL_PORT75,LABEL_PORT76,LABEL_PORT77,LABEL_PORT78,LABEL_PORT81,LABEL_PORT82,LABEL_PORT83,LABEL_PORT84,LABEL_PORT85,LABEL_PORT86,LABEL_PORT87,LABEL_PORT88};
static PROGMEM const char * const LABEL_ALERT[] = {ALERT_ATO_TIMEOUT_LABEL,ALERT_OVERHEAT_LABEL,ALERT_BUSLOCK_LABEL,ALERT_LEAK_LABEL};
static PROGMEM const char * const LABEL_CUSTOM_EXP[] = {LABEL_CUSTOM_EXP0,LABEL_CUSTOM_EXP1,LABEL_CUSTOM_EXP2,LABEL_CUSTOM_EXP3,LABEL_CUSTOM_EXP4,LABEL_CUSTOM_EXP5,LABEL_CUSTOM_EXP6,LABEL_CUSTOM_EXP7};
";

/// Render with a banner stamped now.
pub fn render_labels(dict: &LabelDictionary, source_filename: &str) -> String {
    render_labels_with_banner(dict, &Banner::now(source_filename))
}

pub fn render_labels_with_banner(dict: &LabelDictionary, banner: &Banner) -> String {
    let mut out = render_preamble(banner);
    out.push_str(&format!("#ifndef {0}\n#define {0}\n\n", LABELS_GUARD));
    for (name, value) in dict.iter() {
        out.push_str(&label_item(name, value));
    }
    out.push('\n');
    out.push_str(LABELS_FOOTER);
    out.push_str(&format!("\n#endif  // {}\n", LABELS_GUARD));
    out
}

fn label_item(name: &str, value: &str) -> String {
    format!("const char {}[] PROGMEM = \"{}\";\n", name, value)
}
