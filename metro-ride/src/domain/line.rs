//! Rail line type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {code:?}")]
pub struct InvalidLine {
    code: String,
}

/// One of the rail lines in the network.
///
/// The set of lines is closed. Ordering follows the catalog order
/// (LRT1, LRT2, MRT3), which is also the order the nearest-station
/// search walks the network in.
///
/// # Examples
///
/// ```
/// use metro_ride::domain::Line;
///
/// assert_eq!(Line::parse("LRT2").unwrap(), Line::Lrt2);
/// assert_eq!(Line::parse("mrt-3").unwrap(), Line::Mrt3);
/// assert_eq!(Line::Lrt1.as_str(), "LRT1");
///
/// assert!(Line::parse("LRT4").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    #[serde(rename = "LRT1")]
    Lrt1,
    #[serde(rename = "LRT2")]
    Lrt2,
    #[serde(rename = "MRT3")]
    Mrt3,
}

impl Line {
    /// All lines, in catalog order.
    pub const ALL: [Line; 3] = [Line::Lrt1, Line::Lrt2, Line::Mrt3];

    /// Parse a line code.
    ///
    /// Accepts the canonical code in any case, optionally with a space or
    /// hyphen between the system and the number ("LRT 1", "lrt-1").
    pub fn parse(s: &str) -> Result<Self, InvalidLine> {
        let compact: String = s
            .trim()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match compact.as_str() {
            "LRT1" => Ok(Line::Lrt1),
            "LRT2" => Ok(Line::Lrt2),
            "MRT3" => Ok(Line::Mrt3),
            _ => Err(InvalidLine {
                code: s.to_string(),
            }),
        }
    }

    /// Returns the canonical line code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Line::Lrt1 => "LRT1",
            Line::Lrt2 => "LRT2",
            Line::Mrt3 => "MRT3",
        }
    }

    /// Returns the long name shown to riders.
    pub fn display_name(&self) -> &'static str {
        match self {
            Line::Lrt1 => "LRT Line 1",
            Line::Lrt2 => "LRT Line 2",
            Line::Mrt3 => "MRT Line 3",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_codes() {
        assert_eq!(Line::parse("LRT1").unwrap(), Line::Lrt1);
        assert_eq!(Line::parse("LRT2").unwrap(), Line::Lrt2);
        assert_eq!(Line::parse("MRT3").unwrap(), Line::Mrt3);
    }

    #[test]
    fn parse_loose_spellings() {
        assert_eq!(Line::parse("lrt1").unwrap(), Line::Lrt1);
        assert_eq!(Line::parse("LRT 2").unwrap(), Line::Lrt2);
        assert_eq!(Line::parse("mrt-3").unwrap(), Line::Mrt3);
        assert_eq!(Line::parse("  MRT3 ").unwrap(), Line::Mrt3);
    }

    #[test]
    fn reject_unknown() {
        assert!(Line::parse("").is_err());
        assert!(Line::parse("LRT").is_err());
        assert!(Line::parse("LRT3").is_err());
        assert!(Line::parse("MRT7").is_err());
        assert!(Line::parse("PNR").is_err());
    }

    #[test]
    fn error_keeps_input() {
        let err = Line::parse("PNR").unwrap_err();
        assert_eq!(err.to_string(), "invalid line code: \"PNR\"");
    }

    #[test]
    fn as_str_roundtrip() {
        for line in Line::ALL {
            assert_eq!(Line::parse(line.as_str()).unwrap(), line);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Line::Lrt2), "LRT2");
        assert_eq!(Line::Mrt3.display_name(), "MRT Line 3");
    }

    #[test]
    fn catalog_order() {
        assert!(Line::Lrt1 < Line::Lrt2);
        assert!(Line::Lrt2 < Line::Mrt3);
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Line::Lrt1).unwrap();
        assert_eq!(json, "\"LRT1\"");
        let line: Line = serde_json::from_str("\"MRT3\"").unwrap();
        assert_eq!(line, Line::Mrt3);
    }
}
