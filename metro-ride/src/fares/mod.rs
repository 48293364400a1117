//! Fare lookup.
//!
//! A static table of per-line fare matrices and the engine that turns a
//! pair of stations and a ticket type into a priced [`JourneySegment`].
//!
//! [`JourneySegment`]: crate::domain::JourneySegment

mod engine;
mod error;
mod table;

pub use engine::price_journey;
pub use error::{FareError, FareTableError};
pub use table::{FareMatrix, FareTable};
