//! Session ticket ledger.

use super::ticket::Ticket;

/// Append-only list of tickets issued during a session.
///
/// The ledger is a plain owned value: each session (or test) builds its
/// own. Hosts that issue from several threads must serialize `append`,
/// e.g. by holding the ledger behind a lock.
#[derive(Debug, Clone, Default)]
pub struct TicketLedger {
    tickets: Vec<Ticket>,
}

impl TicketLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ticket. Never rejects.
    pub fn append(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// Returns every ticket, oldest first.
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Look up a ticket by identifier.
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id().as_str() == id)
    }

    /// Returns the most recently appended ticket.
    pub fn latest(&self) -> Option<&Ticket> {
        self.tickets.last()
    }

    /// Returns the number of tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns true if no tickets have been appended.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Station, TicketType};
    use crate::fares::{FareTable, price_journey};
    use crate::tickets::TicketIssuer;

    fn issue(issuer: &TicketIssuer, from: &str, to: &str, ticket_type: TicketType) -> Ticket {
        let fares = FareTable::embedded().unwrap();
        let origin = Station::new(from, Line::Mrt3, None, None);
        let destination = Station::new(to, Line::Mrt3, None, None);
        let segment = price_journey(&origin, &destination, ticket_type, &fares).unwrap();
        issuer.issue(segment, &origin, &destination)
    }

    #[test]
    fn starts_empty() {
        let ledger = TicketLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.all().is_empty());
        assert!(ledger.latest().is_none());
    }

    #[test]
    fn append_adds_to_the_end() {
        let issuer = TicketIssuer::default();
        let mut ledger = TicketLedger::new();

        let first = issue(&issuer, "North Avenue Station", "GMA-Kamuning Station", TicketType::SingleJourney);
        ledger.append(first.clone());
        assert_eq!(ledger.len(), 1);

        let second = issue(&issuer, "Boni Station", "Ayala Station", TicketType::StoredValue);
        ledger.append(second.clone());

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all().last(), Some(&second));
        assert_eq!(ledger.latest(), Some(&second));
        assert_eq!(ledger.all()[0], first);
    }

    #[test]
    fn get_by_id() {
        let issuer = TicketIssuer::default();
        let mut ledger = TicketLedger::new();
        let ticket = issue(&issuer, "Boni Station", "Guadalupe Station", TicketType::SingleJourney);
        let id = ticket.id().clone();
        ledger.append(ticket);

        assert_eq!(ledger.get(id.as_str()).map(Ticket::id), Some(&id));
        assert!(ledger.get("TICKET-0-0000").is_none());
    }

    #[test]
    fn ledgers_are_isolated() {
        let issuer = TicketIssuer::default();
        let mut a = TicketLedger::new();
        let b = TicketLedger::new();

        a.append(issue(&issuer, "Ortigas Station", "Shaw Boulevard Station", TicketType::SingleJourney));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}
