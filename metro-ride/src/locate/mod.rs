//! Nearest-station search.
//!
//! Distances are great-circle (haversine) distances on a spherical Earth,
//! which is plenty for picking between stations a few hundred metres apart.
//! The search is a linear scan: the network has a few dozen stations.

use geo::{HaversineDistance, Point};

use crate::catalog::StationCatalog;
use crate::domain::{Coordinate, Station};

/// Error from nearest-station search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// No station in the catalog has a usable position
    #[error("no station with a known position")]
    NotFound,
}

/// A station together with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyStation<'a> {
    pub station: &'a Station,
    /// Distance in metres; `f64::INFINITY` if it could not be computed.
    pub distance_meters: f64,
}

/// Haversine distance between two coordinates, in metres.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    to_point(a).haversine_distance(&to_point(b))
}

/// Find the station closest to `point`.
///
/// Stations without a position are skipped. A station whose distance comes
/// out non-finite is treated as infinitely far away. Ties go to the station
/// met first in catalog order.
pub fn find_nearest(point: Coordinate, catalog: &StationCatalog) -> Result<&Station, LocateError> {
    let mut best: Option<NearbyStation<'_>> = None;

    for candidate in candidates(point, catalog) {
        match best {
            Some(current) if candidate.distance_meters >= current.distance_meters => {}
            _ => best = Some(candidate),
        }
    }

    best.map(|nearby| nearby.station).ok_or(LocateError::NotFound)
}

/// Up to `limit` stations ordered by distance from `point`, nearest first.
///
/// Equal distances keep catalog order. Returns an empty list if no station
/// has a position.
pub fn nearest_within(
    point: Coordinate,
    catalog: &StationCatalog,
    limit: usize,
) -> Vec<NearbyStation<'_>> {
    let mut nearby: Vec<_> = candidates(point, catalog).collect();
    nearby.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    nearby.truncate(limit);
    nearby
}

/// Stations with a position, in catalog order, with their distances.
fn candidates(
    point: Coordinate,
    catalog: &StationCatalog,
) -> impl Iterator<Item = NearbyStation<'_>> {
    catalog.all_stations().filter_map(move |station| {
        let position = station.coordinate()?;
        let distance = distance_meters(point, position);
        Some(NearbyStation {
            station,
            distance_meters: if distance.is_finite() {
                distance
            } else {
                f64::INFINITY
            },
        })
    })
}

fn to_point(coordinate: Coordinate) -> Point<f64> {
    Point::new(coordinate.longitude(), coordinate.latitude())
}
