//! Priced journey segments.

use super::{Fare, FareValue, Line, StationKey, TicketType};

/// A priced trip between two stations on one line.
///
/// Only the fare engine builds these, after checking that the line matches,
/// the stations differ, both fare cells exist and the requested cell has an
/// amount. Both cells are kept for display alongside the charged fare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneySegment {
    line: Line,
    origin: StationKey,
    destination: StationKey,
    single_journey: FareValue,
    stored_value: FareValue,
    ticket_type: TicketType,
    fare: Fare,
}

impl JourneySegment {
    pub(crate) fn new(
        line: Line,
        origin: StationKey,
        destination: StationKey,
        single_journey: FareValue,
        stored_value: FareValue,
        ticket_type: TicketType,
        fare: Fare,
    ) -> Self {
        Self {
            line,
            origin,
            destination,
            single_journey,
            stored_value,
            ticket_type,
            fare,
        }
    }

    /// Returns the line travelled.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Returns the normalized origin name.
    pub fn origin(&self) -> &StationKey {
        &self.origin
    }

    /// Returns the normalized destination name.
    pub fn destination(&self) -> &StationKey {
        &self.destination
    }

    /// Returns the single-journey fare cell.
    pub fn single_journey(&self) -> FareValue {
        self.single_journey
    }

    /// Returns the stored-value fare cell.
    pub fn stored_value(&self) -> FareValue {
        self.stored_value
    }

    /// Returns the fare cell for the given ticket type.
    pub fn fare_for(&self, ticket_type: TicketType) -> FareValue {
        match ticket_type {
            TicketType::SingleJourney => self.single_journey,
            TicketType::StoredValue => self.stored_value,
        }
    }

    /// Returns the ticket type this segment was priced for.
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the fare charged for the priced ticket type.
    pub fn fare(&self) -> Fare {
        self.fare
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> JourneySegment {
        JourneySegment::new(
            Line::Lrt2,
            StationKey::from_name("Recto"),
            StationKey::from_name("Legarda"),
            FareValue::Amount(Fare::pesos(15)),
            FareValue::Unavailable,
            TicketType::SingleJourney,
            Fare::pesos(15),
        )
    }

    #[test]
    fn accessors() {
        let seg = segment();
        assert_eq!(seg.line(), Line::Lrt2);
        assert_eq!(seg.origin().as_str(), "Recto");
        assert_eq!(seg.destination().as_str(), "Legarda");
        assert_eq!(seg.ticket_type(), TicketType::SingleJourney);
        assert_eq!(seg.fare(), Fare::pesos(15));
    }

    #[test]
    fn fare_for_each_type() {
        let seg = segment();
        assert_eq!(
            seg.fare_for(TicketType::SingleJourney),
            FareValue::Amount(Fare::pesos(15))
        );
        assert_eq!(seg.fare_for(TicketType::StoredValue), FareValue::Unavailable);
        assert_eq!(seg.single_journey(), seg.fare_for(TicketType::SingleJourney));
        assert_eq!(seg.stored_value(), seg.fare_for(TicketType::StoredValue));
    }
}
