//! Default label table.
//!
//! Declaration order is output order in `RA_CustomLabels.h`.

use super::dictionary::LabelDictionary;

pub const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("RELAY_BOX_LABEL", "Relay Box"),
    ("EXP_RELAY_1_LABEL", "Exp. Relay Box 1"),
    ("EXP_RELAY_2_LABEL", "Exp. Relay Box 2"),
    ("EXP_RELAY_3_LABEL", "Exp. Relay Box 3"),
    ("EXP_RELAY_4_LABEL", "Exp. Relay Box 4"),
    ("EXP_RELAY_5_LABEL", "Exp. Relay Box 5"),
    ("EXP_RELAY_6_LABEL", "Exp. Relay Box 6"),
    ("EXP_RELAY_7_LABEL", "Exp. Relay Box 7"),
    ("EXP_RELAY_8_LABEL", "Exp. Relay Box 8"),
    ("PWM_EXPANSION_LABEL", "PWM Expansion"),
    ("SIXTEENCH_PWM_EXPANSION_LABEL", "16 Ch PWM Expansion"),
    ("RF_EXPANSION_LABEL", "RF Expansion"),
    ("RF_EXPANSION_LABEL1", "RF Expansion"),
    ("AI_LABEL", "Aqua Illumination"),
    ("IO_EXPANSION_LABEL", "IO Expansion"),
    ("DCPUMP_LABEL", "DC Pump"),
    ("DIMMING_LABEL", "Dimming"),
    ("INPUT_LABEL", "Input"),
    ("CVAR_LABEL", "Custom Variables"),
    ("STATUS_LABEL", "Status"),
    ("ALERT_LABEL", "Alert"),
    ("ALERT_LIGHTS_ON_LABEL", "Lights On"),
    ("ALERT_ATO_TIMEOUT_LABEL", "ATO Timeout"),
    ("ALERT_OVERHEAT_LABEL", "Overheat"),
    ("ALERT_BUSLOCK_LABEL", "Bus Lock"),
    ("ALERT_LEAK_LABEL", "Water Leak"),
    ("LABEL_TEMP1", "Temp 1"),
    ("LABEL_TEMP1_SHORT", "T1"),
    ("LABEL_TEMP2", "Temp 2"),
    ("LABEL_TEMP2_SHORT", "T2"),
    ("LABEL_TEMP3", "Temp 3"),
    ("LABEL_TEMP3_SHORT", "T3"),
    ("LABEL_TEMP4", "Temp 4"),
    ("LABEL_TEMP4_SHORT", "T4"),
    ("LABEL_TEMP5", "Temp 5"),
    ("LABEL_TEMP5_SHORT", "T5"),
    ("LABEL_TEMP6", "Temp 6"),
    ("LABEL_TEMP6_SHORT", "T6"),
    ("LABEL_PH", "pH"),
    ("LABEL_ATOLOW", "Low ATO"),
    ("LABEL_ATOHIGH", "High ATO"),
    ("LABEL_ALARM", "Alarm"),
    ("LABEL_LEAK", "Leak"),
    ("LABEL_DAYLIGHT", "Daylight"),
    ("LABEL_DAYLIGHT2", "Daylight 2"),
    ("LABEL_ACTINIC", "Actinic"),
    ("LABEL_ACTINIC2", "Actinic 2"),
    ("LABEL_SALINITY", "Salinity"),
    ("LABEL_SALINITY_SHORT", "Sal"),
    ("LABEL_ORP", "ORP"),
    ("LABEL_PHEXP", "pH Exp"),
    ("LABEL_PHEXP_SHORT", "pHE"),
    ("LABEL_HUMIDITY", "Humidity"),
    ("LABEL_HUMIDITY_SHORT", "Hum"),
    ("LABEL_PAR", "PAR"),
    ("LABEL_CUSTOM_EXP0", "Exp 0"),
    ("LABEL_CUSTOM_EXP1", "Exp 1"),
    ("LABEL_CUSTOM_EXP2", "Exp 2"),
    ("LABEL_CUSTOM_EXP3", "Exp 3"),
    ("LABEL_CUSTOM_EXP4", "Exp 4"),
    ("LABEL_CUSTOM_EXP5", "Exp 5"),
    ("LABEL_CUSTOM_EXP6", "Exp 6"),
    ("LABEL_CUSTOM_EXP7", "Exp 7"),
    ("LABEL_WL_CHANNEL", "WL Ch"),
    ("LABEL_WL0", "Water"),
    ("LABEL_WL1", "WL 1"),
    ("LABEL_WL2", "WL 2"),
    ("LABEL_WL3", "WL 3"),
    ("LABEL_WL4", "WL 4"),
    ("LABEL_PWME_CHANNEL", "Dimming Ch"),
    ("LABEL_PWME0", "Channel 0"),
    ("LABEL_PWME1", "Channel 1"),
    ("LABEL_PWME2", "Channel 2"),
    ("LABEL_PWME3", "Channel 3"),
    ("LABEL_PWME4", "Channel 4"),
    ("LABEL_PWME5", "Channel 5"),
    ("LABEL_IO_CHANNEL", "I/O Ch"),
    ("LABEL_IO0", "I/O Channel 0"),
    ("LABEL_IO1", "I/O Channel 1"),
    ("LABEL_IO2", "I/O Channel 2"),
    ("LABEL_IO3", "I/O Channel 3"),
    ("LABEL_IO4", "I/O Channel 4"),
    ("LABEL_IO5", "I/O Channel 5"),
    ("LABEL_C0", "Custom Var 0"),
    ("LABEL_C1", "Custom Var 1"),
    ("LABEL_C2", "Custom Var 2"),
    ("LABEL_C3", "Custom Var 3"),
    ("LABEL_C4", "Custom Var 4"),
    ("LABEL_C5", "Custom Var 5"),
    ("LABEL_C6", "Custom Var 6"),
    ("LABEL_C7", "Custom Var 7"),
    ("LABEL_PORT1", "Port 1"),
    ("LABEL_PORT2", "Port 2"),
    ("LABEL_PORT3", "Port 3"),
    ("LABEL_PORT4", "Port 4"),
    ("LABEL_PORT5", "Port 5"),
    ("LABEL_PORT6", "Port 6"),
    ("LABEL_PORT7", "Port 7"),
    ("LABEL_PORT8", "Port 8"),
    ("LABEL_PORT11", "Port 11"),
    ("LABEL_PORT12", "Port 12"),
    ("LABEL_PORT13", "Port 13"),
    ("LABEL_PORT14", "Port 14"),
    ("LABEL_PORT15", "Port 15"),
    ("LABEL_PORT16", "Port 16"),
    ("LABEL_PORT17", "Port 17"),
    ("LABEL_PORT18", "Port 18"),
    ("LABEL_PORT21", "Port 21"),
    ("LABEL_PORT22", "Port 22"),
    ("LABEL_PORT23", "Port 23"),
    ("LABEL_PORT24", "Port 24"),
    ("LABEL_PORT25", "Port 25"),
    ("LABEL_PORT26", "Port 26"),
    ("LABEL_PORT27", "Port 27"),
    ("LABEL_PORT28", "Port 28"),
    ("LABEL_PORT31", "Port 31"),
    ("LABEL_PORT32", "Port 32"),
    ("LABEL_PORT33", "Port 33"),
    ("LABEL_PORT34", "Port 34"),
    ("LABEL_PORT35", "Port 35"),
    ("LABEL_PORT36", "Port 36"),
    ("LABEL_PORT37", "Port 37"),
    ("LABEL_PORT38", "Port 38"),
    ("LABEL_PORT41", "Port 41"),
    ("LABEL_PORT42", "Port 42"),
    ("LABEL_PORT43", "Port 43"),
    ("LABEL_PORT44", "Port 44"),
    ("LABEL_PORT45", "Port 45"),
    ("LABEL_PORT46", "Port 46"),
    ("LABEL_PORT47", "Port 47"),
    ("LABEL_PORT48", "Port 48"),
    ("LABEL_PORT51", "Port 51"),
    ("LABEL_PORT52", "Port 52"),
    ("LABEL_PORT53", "Port 53"),
    ("LABEL_PORT54", "Port 54"),
    ("LABEL_PORT55", "Port 55"),
    ("LABEL_PORT56", "Port 56"),
    ("LABEL_PORT57", "Port 57"),
    ("LABEL_PORT58", "Port 58"),
    ("LABEL_PORT61", "Port 61"),
    ("LABEL_PORT62", "Port 62"),
    ("LABEL_PORT63", "Port 63"),
    ("LABEL_PORT64", "Port 64"),
    ("LABEL_PORT65", "Port 65"),
    ("LABEL_PORT66", "Port 66"),
    ("LABEL_PORT67", "Port 67"),
    ("LABEL_PORT68", "Port 68"),
    ("LABEL_PORT71", "Port 71"),
    ("LABEL_PORT72", "Port 72"),
    ("LABEL_PORT73", "Port 73"),
    ("LABEL_PORT74", "Port 74"),
    ("LABEL_PORT75", "Port 75"),
    ("LABEL_PORT76", "Port 76"),
    ("LABEL_PORT77", "Port 77"),
    ("LABEL_PORT78", "Port 78"),
    ("LABEL_PORT81", "Port 81"),
    ("LABEL_PORT82", "Port 82"),
    ("LABEL_PORT83", "Port 83"),
    ("LABEL_PORT84", "Port 84"),
    ("LABEL_PORT85", "Port 85"),
    ("LABEL_PORT86", "Port 86"),
    ("LABEL_PORT87", "Port 87"),
    ("LABEL_PORT88", "Port 88"),
    ("LABEL_AI_WHITE", "White"),
    ("LABEL_AI_BLUE", "Blue"),
    ("LABEL_AI_ROYAL_BLUE", "R. Blue"),
    ("LABEL_RF_WHITE", "White"),
    ("LABEL_RF_ROYAL_BLUE", "R. Blue"),
    ("LABEL_RF_RED", "Red"),
    ("LABEL_RF_GREEN", "Green"),
    ("LABEL_RF_BLUE", "Blue"),
    ("LABEL_RF_INTENSITY", "Intensity"),
];

/// Fresh dictionary seeded with every default label.
pub fn build_defaults() -> LabelDictionary {
    LabelDictionary::from_pairs(DEFAULT_LABELS.iter().copied())
}
