//! Ticket issuance.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};

use crate::domain::{JourneySegment, Station};

use super::ticket::{Ticket, TicketId, TicketStop};

/// Default identifier prefix.
pub const DEFAULT_TICKET_PREFIX: &str = "TICKET";

/// Turns priced segments into tickets.
///
/// Identifiers have the form `{prefix}-{unix millis}-{sequence}`. The
/// sequence number is owned by the issuer and strictly increasing, so two
/// tickets from one issuer never share an identifier even when issued in
/// the same millisecond or from different threads.
#[derive(Debug)]
pub struct TicketIssuer {
    prefix: String,
    sequence: AtomicU64,
}

impl TicketIssuer {
    /// Create an issuer with the given identifier prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Issue a ticket for a priced segment, stamped with the current time.
    ///
    /// The ticket type and fare come from the segment, so a ticket always
    /// charges what was priced.
    pub fn issue(&self, segment: JourneySegment, origin: &Station, destination: &Station) -> Ticket {
        self.issue_at(segment, origin, destination, Local::now())
    }

    /// Issue a ticket stamped with `issued_at`.
    ///
    /// `origin` and `destination` must be the stations the segment was
    /// priced for.
    pub fn issue_at(
        &self,
        segment: JourneySegment,
        origin: &Station,
        destination: &Station,
        issued_at: DateTime<Local>,
    ) -> Ticket {
        debug_assert_eq!(origin.line(), segment.line(), "origin is not on the priced line");
        debug_assert_eq!(destination.line(), segment.line(), "destination is not on the priced line");
        debug_assert_eq!(&origin.key(), segment.origin(), "origin does not match the priced segment");
        debug_assert_eq!(
            &destination.key(),
            segment.destination(),
            "destination does not match the priced segment"
        );

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let id = TicketId::new(format!(
            "{}-{}-{:04}",
            self.prefix,
            issued_at.timestamp_millis(),
            sequence
        ));

        Ticket {
            id,
            ticket_type: segment.ticket_type(),
            origin: TicketStop {
                name: origin.name().to_string(),
                line: origin.line(),
            },
            destination: TicketStop {
                name: destination.name().to_string(),
                line: destination.line(),
            },
            fare: segment.fare(),
            segments: vec![segment],
            issued_at,
        }
    }

    /// Returns the prefix used for identifiers.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns how many tickets this issuer has produced.
    pub fn issued_count(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

impl Default for TicketIssuer {
    fn default() -> Self {
        Self::new(DEFAULT_TICKET_PREFIX)
    }
}
