//! Domain types for the metro network.
//!
//! These are the validated values the rest of the crate passes around:
//! lines, stations, ticket types, fares and priced segments. Types that
//! can be built from untrusted input check their invariants at
//! construction time.

mod fare;
mod line;
mod names;
mod segment;
mod station;
mod ticket_type;

pub use fare::{Fare, FareValue, InvalidFare};
pub use line::{InvalidLine, Line};
pub use names::{StationKey, normalize_station_name};
pub use segment::JourneySegment;
pub use station::{Coordinate, InvalidCoordinate, Station};
pub use ticket_type::{InvalidTicketType, TicketType};
