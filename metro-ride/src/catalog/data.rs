//! Station data loading.
//!
//! The network's stations ship inside the binary as JSON, keyed by line:
//!
//! ```json
//! { "LRT2": [ { "name": "Recto Station", "line": "LRT2",
//!               "latitude": 14.603497, "longitude": 120.983403,
//!               "image": "LRT2/Recto.jpg", "landmarks": ["..."] } ] }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Line, Station};

use super::error::CatalogError;
use super::registry::StationCatalog;

/// Station data bundled at build time.
const EMBEDDED_STATIONS: &str = include_str!("../../data/stations.json");

/// One station as it appears in the data file.
#[derive(Debug, Deserialize)]
struct StationRecord {
    name: String,
    line: Line,
    latitude: Option<f64>,
    longitude: Option<f64>,
    image: Option<String>,
    #[serde(default)]
    landmarks: Vec<String>,
}

impl StationRecord {
    fn into_station(self) -> Station {
        let station = Station::new(self.name, self.line, self.latitude, self.longitude)
            .with_landmarks(self.landmarks);
        match self.image {
            Some(image) => station.with_image(image),
            None => station,
        }
    }
}

impl StationCatalog {
    /// Load the catalog bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_STATIONS)
    }

    /// Parse a catalog from JSON.
    ///
    /// Each record's own `line` must match the line it is listed under.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<Line, Vec<StationRecord>> = serde_json::from_str(json)?;

        let mut stations = Vec::new();
        for (listed, records) in raw {
            for record in records {
                if record.line != listed {
                    return Err(CatalogError::LineMismatch {
                        name: record.name,
                        listed,
                        declared: record.line,
                    });
                }
                stations.push(record.into_station());
            }
        }

        let catalog = Self::from_stations(stations)?;
        debug!(
            stations = catalog.len(),
            lines = catalog.lines().count(),
            "loaded station catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = StationCatalog::embedded().unwrap();

        assert_eq!(catalog.stations_for_line(Line::Lrt1).len(), 25);
        assert_eq!(catalog.stations_for_line(Line::Lrt2).len(), 13);
        assert_eq!(catalog.stations_for_line(Line::Mrt3).len(), 13);
        assert_eq!(catalog.len(), 51);
    }

    #[test]
    fn embedded_catalog_line_ends() {
        let catalog = StationCatalog::embedded().unwrap();

        let lrt1 = catalog.stations_for_line(Line::Lrt1);
        assert_eq!(lrt1.first().unwrap().name(), "Fernando Poe Jr. Station");
        assert_eq!(lrt1.last().unwrap().name(), "Dr. Santos Station");

        let lrt2 = catalog.stations_for_line(Line::Lrt2);
        assert_eq!(lrt2.first().unwrap().name(), "Antipolo Station");
        assert_eq!(lrt2.last().unwrap().name(), "Recto Station");

        let mrt3 = catalog.stations_for_line(Line::Mrt3);
        assert_eq!(mrt3.first().unwrap().name(), "North Avenue Station");
        assert_eq!(mrt3.last().unwrap().name(), "Taft Avenue Station");
    }

    #[test]
    fn embedded_interchange_kept_per_line() {
        let catalog = StationCatalog::embedded().unwrap();

        let lrt2 = catalog.find(Line::Lrt2, "Araneta Center-Cubao").unwrap();
        let mrt3 = catalog.find(Line::Mrt3, "Araneta Center-Cubao").unwrap();
        assert_eq!(lrt2.line(), Line::Lrt2);
        assert_eq!(mrt3.line(), Line::Mrt3);
        assert_ne!(lrt2.coordinate(), mrt3.coordinate());
    }

    #[test]
    fn embedded_stations_have_positions_and_images() {
        let catalog = StationCatalog::embedded().unwrap();

        for station in catalog.all_stations() {
            assert!(station.coordinate().is_some(), "{station} has no position");
            assert!(station.image().is_some(), "{station} has no image");
        }

        let recto = catalog.find(Line::Lrt2, "Recto").unwrap();
        assert_eq!(recto.image(), Some("LRT2/Recto.jpg"));
        assert!(
            recto
                .landmarks()
                .iter()
                .any(|l| l == "Transfer to: LRT 1 - Doroteo Jose Station")
        );
    }

    #[test]
    fn parses_minimal_records() {
        let json = r#"{
            "LRT1": [
                { "name": "EDSA Station", "line": "LRT1", "latitude": 14.538825, "longitude": 121.000683 },
                { "name": "Ghost Station", "line": "LRT1" }
            ]
        }"#;

        let catalog = StationCatalog::from_json(json).unwrap();
        let stations = catalog.stations_for_line(Line::Lrt1);
        assert_eq!(stations.len(), 2);
        assert!(stations[0].landmarks().is_empty());
        assert!(stations[0].image().is_none());
        assert!(stations[1].coordinate().is_none());
    }

    #[test]
    fn rejects_line_mismatch() {
        let json = r#"{ "LRT1": [ { "name": "Recto Station", "line": "LRT2" } ] }"#;

        let err = StationCatalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::LineMismatch {
                listed: Line::Lrt1,
                declared: Line::Lrt2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_line_key() {
        let json = r#"{ "PNR": [] }"#;
        assert!(matches!(
            StationCatalog::from_json(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            StationCatalog::from_json("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
