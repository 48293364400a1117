//! Journey pricing.

use crate::domain::{FareValue, JourneySegment, Station, TicketType};

use super::error::FareError;
use super::table::FareTable;

/// Price a trip between two stations on the same line.
///
/// Checks, in order:
/// 1. both stations are on the same line ([`FareError::CrossLineUnsupported`]);
/// 2. their normalized names differ ([`FareError::SameStation`]);
/// 3. the route is listed under *both* ticket types, whichever one was
///    asked for ([`FareError::RouteNotFound`]);
/// 4. the requested ticket type's cell has an amount
///    ([`FareError::FareUnavailable`]).
///
/// The result carries both fare cells for display plus the fare charged
/// for `ticket_type`. Pure: the same inputs always give the same output.
pub fn price_journey(
    origin: &Station,
    destination: &Station,
    ticket_type: TicketType,
    fares: &FareTable,
) -> Result<JourneySegment, FareError> {
    if origin.line() != destination.line() {
        return Err(FareError::CrossLineUnsupported {
            origin: origin.line(),
            destination: destination.line(),
        });
    }
    let line = origin.line();

    let from = origin.key();
    let to = destination.key();
    if from == to {
        return Err(FareError::SameStation { station: from });
    }

    let single_journey = fares.get(line, TicketType::SingleJourney, &from, &to);
    let stored_value = fares.get(line, TicketType::StoredValue, &from, &to);
    let (Some(single_journey), Some(stored_value)) = (single_journey, stored_value) else {
        return Err(FareError::RouteNotFound {
            line,
            origin: from,
            destination: to,
        });
    };

    let requested = match ticket_type {
        TicketType::SingleJourney => single_journey,
        TicketType::StoredValue => stored_value,
    };
    let FareValue::Amount(fare) = requested else {
        return Err(FareError::FareUnavailable {
            line,
            origin: from,
            destination: to,
            ticket_type,
        });
    };

    Ok(JourneySegment::new(
        line,
        from,
        to,
        single_journey,
        stored_value,
        ticket_type,
        fare,
    ))
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
