//! Fare error types.

use crate::domain::{Line, StationKey, TicketType};

/// Why a journey could not be priced.
///
/// The variants are checked in declaration order, so a cross-line request
/// is always reported as such even if the stations also share a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// Origin and destination are on different lines
    #[error("cannot price a journey from {origin} to {destination}: transfers are not supported")]
    CrossLineUnsupported { origin: Line, destination: Line },

    /// Origin and destination are the same station
    #[error("origin and destination are both {station}")]
    SameStation { station: StationKey },

    /// The fare table has no entry for the route under one of the ticket types
    #[error("no {line} fare listed from {origin} to {destination}")]
    RouteNotFound {
        line: Line,
        origin: StationKey,
        destination: StationKey,
    },

    /// The route is listed but has no price for the requested ticket type
    #[error("{ticket_type} fare from {origin} to {destination} on {line} is unavailable")]
    FareUnavailable {
        line: Line,
        origin: StationKey,
        destination: StationKey,
        ticket_type: TicketType,
    },
}

/// Errors that can occur while loading fare data.
#[derive(Debug, thiserror::Error)]
pub enum FareTableError {
    /// Fare data is not valid JSON or has the wrong shape
    #[error("fare data parse error: {0}")]
    Json(#[from] serde_json::Error),
}
