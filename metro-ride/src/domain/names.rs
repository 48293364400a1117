//! Station name normalization.
//!
//! Catalog names carry a "Station" suffix ("Recto Station") while the fare
//! matrices are keyed by the bare name ("Recto"). Every lookup goes through
//! [`normalize_station_name`] so the two can never drift apart.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

const SUFFIX: &str = " station";

/// Strip a trailing "Station" word (any case) and surrounding whitespace.
///
/// ```
/// use metro_ride::domain::normalize_station_name;
///
/// assert_eq!(normalize_station_name("Recto Station"), "Recto");
/// assert_eq!(normalize_station_name("  EDSA station "), "EDSA");
/// assert_eq!(normalize_station_name("Legarda"), "Legarda");
/// ```
pub fn normalize_station_name(name: &str) -> &str {
    let trimmed = name.trim();
    let split = trimmed.len().saturating_sub(SUFFIX.len());

    if trimmed.len() > SUFFIX.len()
        && trimmed.is_char_boundary(split)
        && trimmed[split..].eq_ignore_ascii_case(SUFFIX)
    {
        trimmed[..split].trim_end()
    } else {
        trimmed
    }
}

/// A normalized station name, used as a fare-matrix key.
///
/// Two `StationKey`s are equal exactly when their source names normalize
/// to the same string, so "EDSA Station" and "EDSA" produce equal keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    /// Build a key from a display name or an already-normalized name.
    pub fn from_name(name: &str) -> Self {
        StationKey(normalize_station_name(name).to_string())
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix() {
        assert_eq!(normalize_station_name("Recto Station"), "Recto");
        assert_eq!(normalize_station_name("Fernando Poe Jr. Station"), "Fernando Poe Jr.");
        assert_eq!(
            normalize_station_name("Araneta Center-Cubao Station"),
            "Araneta Center-Cubao"
        );
    }

    #[test]
    fn suffix_is_case_insensitive() {
        assert_eq!(normalize_station_name("EDSA STATION"), "EDSA");
        assert_eq!(normalize_station_name("EDSA station"), "EDSA");
        assert_eq!(normalize_station_name("EDSA StAtIoN"), "EDSA");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize_station_name("  Legarda  "), "Legarda");
        assert_eq!(normalize_station_name(" Legarda Station "), "Legarda");
        assert_eq!(normalize_station_name("Legarda   Station"), "Legarda");
    }

    #[test]
    fn leaves_bare_names_alone() {
        assert_eq!(normalize_station_name("Legarda"), "Legarda");
        assert_eq!(normalize_station_name("PITX"), "PITX");
        assert_eq!(normalize_station_name(""), "");
    }

    #[test]
    fn suffix_must_be_a_separate_word() {
        // Only the trailing word is removed, never part of a name
        assert_eq!(normalize_station_name("Station"), "Station");
        assert_eq!(normalize_station_name("Gasstation"), "Gasstation");
        assert_eq!(normalize_station_name("Station Road"), "Station Road");
    }

    #[test]
    fn only_one_suffix_removed() {
        assert_eq!(normalize_station_name("Union Station Station"), "Union Station");
    }

    #[test]
    fn non_ascii_names() {
        assert_eq!(normalize_station_name("Parañaque Station"), "Parañaque");
        assert_eq!(normalize_station_name("Muñoz"), "Muñoz");
        assert_eq!(normalize_station_name("ñ"), "ñ");
    }

    #[test]
    fn keys_compare_after_normalization() {
        assert_eq!(StationKey::from_name("EDSA Station"), StationKey::from_name("EDSA"));
        assert_ne!(StationKey::from_name("EDSA"), StationKey::from_name("Taft Avenue"));
    }

    #[test]
    fn key_display_and_debug() {
        let key = StationKey::from_name("Recto Station");
        assert_eq!(key.as_str(), "Recto");
        assert_eq!(format!("{}", key), "Recto");
        assert_eq!(format!("{:?}", key), "StationKey(Recto)");
    }

    #[test]
    fn key_borrows_as_str() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(StationKey::from_name("Legarda Station"), 15);
        assert_eq!(map.get("Legarda"), Some(&15));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalized names never carry surrounding whitespace
        #[test]
        fn output_is_trimmed(s in "[A-Za-z .-]{0,30}") {
            let normalized = normalize_station_name(&s);
            prop_assert_eq!(normalized, normalized.trim());
        }

        /// Appending the suffix to a bare name normalizes back to that name
        #[test]
        fn suffix_roundtrip(s in "[A-Za-z][A-Za-z .-]{0,20}[A-Za-z.]") {
            prop_assume!(!s.to_ascii_lowercase().ends_with(" station"));
            let base = normalize_station_name(&s).to_string();
            let with_suffix = format!("{base} Station");
            prop_assert_eq!(normalize_station_name(&with_suffix), base.as_str());
        }
    }
}
