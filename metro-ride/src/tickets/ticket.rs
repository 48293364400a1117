//! Issued tickets.

use std::fmt;

use chrono::{DateTime, Local};

use crate::domain::{Fare, JourneySegment, Line, TicketType, normalize_station_name};

/// Display format for issuance timestamps.
const ISSUED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A ticket identifier.
///
/// Identifiers are opaque; the issuer guarantees uniqueness for its own
/// lifetime.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TicketId(String);

impl TicketId {
    pub(crate) fn new(id: String) -> Self {
        TicketId(id)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketId({})", self.0)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a ticket is used at the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redemption {
    /// Shown as a QR code on the rider's phone.
    DigitalQr,
    /// Exchanged for a physical card at the station.
    PhysicalClaim,
}

/// One end of a ticketed trip, as named in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketStop {
    pub name: String,
    pub line: Line,
}

impl TicketStop {
    /// Returns the name without its "Station" suffix.
    pub fn display_name(&self) -> &str {
        normalize_station_name(&self.name)
    }
}

/// An issued ticket.
///
/// Tickets are built by [`TicketIssuer`](super::TicketIssuer) and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub(super) id: TicketId,
    pub(super) ticket_type: TicketType,
    pub(super) origin: TicketStop,
    pub(super) destination: TicketStop,
    pub(super) segments: Vec<JourneySegment>,
    pub(super) fare: Fare,
    pub(super) issued_at: DateTime<Local>,
}

impl Ticket {
    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn origin(&self) -> &TicketStop {
        &self.origin
    }

    pub fn destination(&self) -> &TicketStop {
        &self.destination
    }

    /// Returns the priced segments making up the trip.
    ///
    /// Always exactly one, since transfers cannot be priced.
    pub fn segments(&self) -> &[JourneySegment] {
        &self.segments
    }

    /// Returns the fare charged.
    pub fn fare(&self) -> Fare {
        self.fare
    }

    pub fn issued_at(&self) -> DateTime<Local> {
        self.issued_at
    }

    /// Returns the issuance time formatted for display.
    pub fn issued_at_display(&self) -> String {
        self.issued_at.format(ISSUED_AT_FORMAT).to_string()
    }

    /// Returns how the ticket is redeemed.
    pub fn redemption(&self) -> Redemption {
        match self.ticket_type {
            TicketType::SingleJourney => Redemption::DigitalQr,
            TicketType::StoredValue => Redemption::PhysicalClaim,
        }
    }
}
