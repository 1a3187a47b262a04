//! Footprint name → placement category mapping

use regex::Regex;
use std::sync::LazyLock;

/// Footprint categories tracked by the case model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FootprintKind {
    /// Cherry MX key switch
    Switch,
    /// Plate mounting hole
    Mount,
    /// TRRS audio jack
    AudioJack,
    /// USB-C receptacle
    UsbReceptacle,
}

/// Footprint library patterns, checked in declaration order
static FOOTPRINT_PATTERNS: LazyLock<Vec<(Regex, FootprintKind)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"Cherry").unwrap(), FootprintKind::Switch),
        (Regex::new(r"MountingHole").unwrap(), FootprintKind::Mount),
        (Regex::new(r"TRRS").unwrap(), FootprintKind::AudioJack),
        (
            Regex::new(r"USB_C_Receptacle").unwrap(),
            FootprintKind::UsbReceptacle,
        ),
    ]
});

/// Classify a footprint declaration line
///
/// Examples:
/// - `footprint Switch_Keyboard_Cherry_MX:SW_Cherry_MX_PCB` → `Some(Switch)`
/// - `footprint MountingHole:MountingHole_2.2mm_M2` → `Some(Mount)`
/// - `footprint Connector_Audio:Jack_TRRS_PJ320A` → `Some(AudioJack)`
/// - `footprint Connector_USB:USB_C_Receptacle_HRO` → `Some(UsbReceptacle)`
/// - `footprint Resistor_SMD:R_0402_1005Metric` → `None`
pub fn classify_footprint(line: &str) -> Option<FootprintKind> {
    FOOTPRINT_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(line))
        .map(|(_, kind)| *kind)
}
