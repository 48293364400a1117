//! Station and coordinate types.

use std::fmt;

use super::{Line, StationKey, normalize_station_name};

/// Error returned when a coordinate is outside the valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
pub struct InvalidCoordinate {
    latitude: f64,
    longitude: f64,
    reason: &'static str,
}

/// A WGS84 position in decimal degrees.
///
/// Coordinates built with [`Coordinate::new`] are finite and within range.
/// Coordinates read from station data are taken as-is; a bad one simply
/// yields a non-finite distance and is never picked as nearest.
///
/// # Examples
///
/// ```
/// use metro_ride::domain::Coordinate;
///
/// let recto = Coordinate::new(14.603497, 120.983403).unwrap();
/// assert_eq!(recto.latitude(), 14.603497);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let reason = if !latitude.is_finite() || !longitude.is_finite() {
            Some("must be finite")
        } else if !(-90.0..=90.0).contains(&latitude) {
            Some("latitude must be within -90..=90")
        } else if !(-180.0..=180.0).contains(&longitude) {
            Some("longitude must be within -180..=180")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidCoordinate {
                latitude,
                longitude,
                reason,
            }),
            None => Ok(Coordinate {
                latitude,
                longitude,
            }),
        }
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A station on one line.
///
/// Interchanges appear once per line: "Araneta Center-Cubao Station" on
/// LRT2 and on MRT3 are two distinct stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    line: Line,
    latitude: Option<f64>,
    longitude: Option<f64>,
    landmarks: Vec<String>,
    image: Option<String>,
}

impl Station {
    /// Create a station with no landmarks or image.
    pub fn new(
        name: impl Into<String>,
        line: Line,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            line,
            latitude,
            longitude,
            landmarks: Vec::new(),
            image: None,
        }
    }

    /// Attach nearby landmark descriptions, in display order.
    pub fn with_landmarks(mut self, landmarks: Vec<String>) -> Self {
        self.landmarks = landmarks;
        self
    }

    /// Attach a display image asset path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the full station name as published ("Recto Station").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized name ("Recto").
    pub fn display_name(&self) -> &str {
        normalize_station_name(&self.name)
    }

    /// Returns the fare-matrix key for this station.
    pub fn key(&self) -> StationKey {
        StationKey::from_name(&self.name)
    }

    /// Returns the line this station belongs to.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Returns the position, if both latitude and longitude are known.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Returns nearby landmarks.
    pub fn landmarks(&self) -> &[String] {
        &self.landmarks
    }

    /// Returns the image asset path.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.line)
    }
}
