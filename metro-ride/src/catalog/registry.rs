//! The station catalog.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{Line, Station, StationKey};

use super::error::CatalogError;

/// Read-only registry of stations, grouped by line.
///
/// Lines iterate in catalog order (LRT1, LRT2, MRT3) and stations in the
/// order they run along the line. Every station is stored under its own
/// line, so `stations_for_line(l)` only ever yields stations whose
/// `line()` is `l`.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    lines: BTreeMap<Line, Vec<Station>>,
}

impl StationCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from stations in line order.
    ///
    /// Stations are grouped by their own line, keeping their relative order.
    /// Fails if a name is empty or two stations on one line normalize to
    /// the same name.
    pub fn from_stations(
        stations: impl IntoIterator<Item = Station>,
    ) -> Result<Self, CatalogError> {
        let mut lines: BTreeMap<Line, Vec<Station>> = BTreeMap::new();
        let mut seen: HashSet<(Line, StationKey)> = HashSet::new();

        for station in stations {
            let line = station.line();
            let key = station.key();

            if key.as_str().is_empty() {
                return Err(CatalogError::EmptyName { line });
            }
            if !seen.insert((line, key)) {
                return Err(CatalogError::DuplicateStation {
                    line,
                    name: station.name().to_string(),
                });
            }

            lines.entry(line).or_default().push(station);
        }

        Ok(Self { lines })
    }

    /// Returns the stations on a line, in running order.
    ///
    /// A line with no stations yields an empty slice.
    pub fn stations_for_line(&self, line: Line) -> &[Station] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns every station, line by line in catalog order.
    pub fn all_stations(&self) -> impl Iterator<Item = &Station> {
        self.lines.values().flatten()
    }

    /// Returns the lines that have at least one station.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines.keys().copied()
    }

    /// Look up a station by line and name.
    ///
    /// The name is compared after normalization, so "Recto" and
    /// "Recto Station" find the same station.
    pub fn find(&self, line: Line, name: &str) -> Option<&Station> {
        let key = StationKey::from_name(name);
        self.stations_for_line(line)
            .iter()
            .find(|station| station.key() == key)
    }

    /// Returns the total number of stations.
    pub fn len(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Returns true if the catalog has no stations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
