//! Library and sketch version readout.

use serde::Serialize;
use std::fmt;
use std::path::Path;

const LIBRARY_VERSION_LABEL: &str = "ReefAngel_Version ";
const CODE_VERSION_START: &str = "ReefAngel.SetCodeVersion(\"";
const CODE_VERSION_END: &str = "\");";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid version component '{component}' in '{input}'")]
pub struct ParseVersionError {
    pub input: String,
    pub component: String,
}

/// `major.minor.build`, also accepting `-` as separator. Ordered by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, build: u32) -> Self {
        Self { major, minor, build }
    }

    /// Fewer than three components parse as `0.0.0`; extra components are
    /// ignored.
    pub fn parse(input: &str) -> Result<Self, ParseVersionError> {
        let parts: Vec<&str> = input.split(['.', '-']).collect();
        if parts.len() < 3 {
            return Ok(Self::default());
        }
        let component = |s: &str| {
            s.trim().parse::<u32>().map_err(|_| ParseVersionError {
                input: input.to_string(),
                component: s.to_string(),
            })
        };
        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            build: component(parts[2])?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Version string declared in the installed `ReefAngel.h`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryVersion {
    pub raw: String,
    pub parsed: Option<Version>,
}

/// Scan library header text for `ReefAngel_Version "x.y.z"`. The label must
/// not start the line (it follows `#define`).
pub fn parse_library_version(header: &str) -> Option<String> {
    header.lines().find_map(|line| match line.find(LIBRARY_VERSION_LABEL) {
        Some(index) if index > 0 => {
            let version = line[index + LIBRARY_VERSION_LABEL.len()..].replace('"', "");
            Some(version.trim().to_string())
        }
        _ => None,
    })
}

/// Read the library version from `ReefAngel.h`. `None` when the library is
/// not installed or declares no version.
pub fn read_library_version(header_path: &Path) -> Option<LibraryVersion> {
    let content = match std::fs::read_to_string(header_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Reef Angel Libraries not found at {}: {}", header_path.display(), e);
            return None;
        }
    };

    match parse_library_version(&content).filter(|v| !v.is_empty()) {
        Some(raw) => {
            tracing::info!("Reef Angel Libraries Version: {}", raw);
            let parsed = Version::parse(&raw).ok();
            Some(LibraryVersion { raw, parsed })
        }
        None => {
            tracing::info!("Reef Angel Libraries Version: NONE");
            None
        }
    }
}

/// Version passed to `ReefAngel.SetCodeVersion("...")` in the sketch.
pub fn code_version(source: &str) -> Option<String> {
    let start = source.find(CODE_VERSION_START).filter(|i| *i > 0)?;
    let value_start = start + CODE_VERSION_START.len();
    let end = source[value_start..].find(CODE_VERSION_END)?;
    let version = &source[value_start..value_start + end];
    (!version.is_empty()).then(|| version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(Version::parse("1.1.4"), Ok(Version::new(1, 1, 4)));
        assert_eq!(Version::parse("2-0-13"), Ok(Version::new(2, 0, 13)));
        assert_eq!(Version::parse("1.2"), Ok(Version::default()));
        assert!(Version::parse("1.x.3").is_err());
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(1, 2, 0) > Version::new(1, 1, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert_eq!(Version::new(1, 0, 1).to_string(), "1.0.1");
    }

    #[test]
    fn test_parse_library_version() {
        let header = "#ifndef __REEFANGEL_H__\n#define ReefAngel_Version \"1.1.4\"\n";
        assert_eq!(parse_library_version(header), Some("1.1.4".to_string()));
        assert_eq!(parse_library_version("ReefAngel_Version \"1.0\"\n"), None);
    }

    #[test]
    fn test_code_version() {
        let source = "void setup() {\n  ReefAngel.SetCodeVersion(\"2.3\");\n}";
        assert_eq!(code_version(source), Some("2.3".to_string()));
        assert_eq!(code_version("void setup() {}"), None);
        assert_eq!(code_version("x ReefAngel.SetCodeVersion(\"open"), None);
    }

    #[test]
    fn test_read_library_version_missing() {
        assert!(read_library_version(Path::new("no/such/ReefAngel.h")).is_none());
    }
}
