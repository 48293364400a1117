//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{JourneySegment, Line, Station};
use crate::locate::NearbyStation;
use crate::tickets::{Redemption, Ticket, TicketStop};

/// A line in the network overview.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Line code (e.g., "LRT1")
    pub code: &'static str,

    /// Long name (e.g., "LRT Line 1")
    pub name: &'static str,

    /// Number of stations on the line
    pub stations: usize,
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineSummary>,
}

/// A station.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Full published name (e.g., "Recto Station")
    pub name: String,

    /// Name without the "Station" suffix
    pub display_name: String,

    /// Line code
    pub line: Line,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Nearby landmarks, in display order
    pub landmarks: Vec<String>,

    /// Image asset path
    pub image: Option<String>,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        let coordinate = station.coordinate();
        Self {
            name: station.name().to_string(),
            display_name: station.display_name().to_string(),
            line: station.line(),
            latitude: coordinate.map(|c| c.latitude()),
            longitude: coordinate.map(|c| c.longitude()),
            landmarks: station.landmarks().to_vec(),
            image: station.image().map(str::to_string),
        }
    }
}

/// Response listing the stations on a line.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub line: Line,
    pub stations: Vec<StationResult>,
}

/// Request for the station nearest to a position.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub lat: f64,
    pub lon: f64,

    /// How many stations to return in total (defaults to 1)
    pub limit: Option<usize>,
}

/// A station with its distance from the query point.
#[derive(Debug, Serialize)]
pub struct NearbyResult {
    pub station: StationResult,

    /// Distance in metres; absent if it could not be computed
    pub distance_meters: Option<f64>,
}

impl NearbyResult {
    pub fn from_nearby(nearby: &NearbyStation<'_>) -> Self {
        Self {
            station: StationResult::from_station(nearby.station),
            distance_meters: nearby
                .distance_meters
                .is_finite()
                .then_some(nearby.distance_meters),
        }
    }
}

/// Response for the nearest-station search.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    /// The closest station
    pub nearest: NearbyResult,

    /// The next closest stations, nearest first
    pub alternatives: Vec<NearbyResult>,
}

/// Request to price a journey.
#[derive(Debug, Deserialize)]
pub struct FareRequest {
    pub origin_line: String,
    pub origin: String,
    pub destination_line: String,
    pub destination: String,

    /// "SJT" or "SVC"
    pub ticket_type: String,
}

/// A priced segment.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub line: Line,

    /// Normalized origin name
    pub origin: String,

    /// Normalized destination name
    pub destination: String,

    /// Single-journey fare in pesos; absent if unavailable
    pub sjt: Option<f64>,

    /// Stored-value fare in pesos; absent if unavailable
    pub svc: Option<f64>,

    /// Ticket type the segment was priced for
    pub ticket_type: &'static str,

    /// Fare charged, in pesos
    pub fare: f64,

    /// Fare charged, formatted (e.g., "₱15.00")
    pub fare_display: String,
}

impl SegmentResult {
    pub fn from_segment(segment: &JourneySegment) -> Self {
        Self {
            line: segment.line(),
            origin: segment.origin().to_string(),
            destination: segment.destination().to_string(),
            sjt: segment.single_journey().into(),
            svc: segment.stored_value().into(),
            ticket_type: segment.ticket_type().code(),
            fare: segment.fare().as_pesos(),
            fare_display: segment.fare().to_string(),
        }
    }
}

/// A station reference in a purchase request.
#[derive(Debug, Deserialize)]
pub struct StationRef {
    pub line: String,
    pub name: String,
}

/// Request to buy a ticket.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub origin: StationRef,
    pub destination: StationRef,
    pub ticket_type: String,
}

/// One end of a ticketed trip.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub name: String,
    pub display_name: String,
    pub line: Line,
}

impl StopResult {
    fn from_stop(stop: &TicketStop) -> Self {
        Self {
            name: stop.name.clone(),
            display_name: stop.display_name().to_string(),
            line: stop.line,
        }
    }
}

/// An issued ticket.
#[derive(Debug, Serialize)]
pub struct TicketResult {
    pub id: String,

    /// "SJT" or "SVC"
    pub ticket_type: &'static str,

    /// "Single Journey" or "Stored Value"
    pub ticket_type_label: &'static str,

    pub origin: StopResult,
    pub destination: StopResult,
    pub segments: Vec<SegmentResult>,

    /// Fare charged, in pesos
    pub fare: f64,
    pub fare_display: String,

    /// Issuance time (YYYY-MM-DD HH:MM:SS, local time)
    pub issued_at: String,

    /// "digital_qr" or "physical_claim"
    pub redemption: &'static str,
}

impl TicketResult {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id().to_string(),
            ticket_type: ticket.ticket_type().code(),
            ticket_type_label: ticket.ticket_type().label(),
            origin: StopResult::from_stop(ticket.origin()),
            destination: StopResult::from_stop(ticket.destination()),
            segments: ticket
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            fare: ticket.fare().as_pesos(),
            fare_display: ticket.fare().to_string(),
            issued_at: ticket.issued_at_display(),
            redemption: match ticket.redemption() {
                Redemption::DigitalQr => "digital_qr",
                Redemption::PhysicalClaim => "physical_claim",
            },
        }
    }
}

/// Response listing the session's tickets.
#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    /// Tickets, oldest first
    pub tickets: Vec<TicketResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
