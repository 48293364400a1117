//! Ticket type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown ticket type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ticket type: {value:?} (expected SJT or SVC)")]
pub struct InvalidTicketType {
    value: String,
}

/// The two ways a rider can pay for a trip.
///
/// # Examples
///
/// ```
/// use metro_ride::domain::TicketType;
///
/// assert_eq!(TicketType::parse("sjt").unwrap(), TicketType::SingleJourney);
/// assert_eq!(TicketType::parse("Stored Value").unwrap(), TicketType::StoredValue);
/// assert_eq!(TicketType::SingleJourney.code(), "SJT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// One-time ticket priced per route.
    #[serde(rename = "SJT")]
    SingleJourney,
    /// Fare deducted from a reloadable card balance.
    #[serde(rename = "SVC")]
    StoredValue,
}

impl TicketType {
    /// Both ticket types, in fare-table order.
    pub const ALL: [TicketType; 2] = [TicketType::SingleJourney, TicketType::StoredValue];

    /// Parse a ticket type from its code ("SJT", "SVC") or long name.
    pub fn parse(s: &str) -> Result<Self, InvalidTicketType> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "sjt" | "single journey" | "single-journey" | "single_journey" => {
                Ok(TicketType::SingleJourney)
            }
            "svc" | "stored value" | "stored-value" | "stored_value" => {
                Ok(TicketType::StoredValue)
            }
            _ => Err(InvalidTicketType {
                value: s.to_string(),
            }),
        }
    }

    /// Returns the short code used in the fare table.
    pub fn code(&self) -> &'static str {
        match self {
            TicketType::SingleJourney => "SJT",
            TicketType::StoredValue => "SVC",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::SingleJourney => "Single Journey",
            TicketType::StoredValue => "Stored Value",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
