//! Ticket issuance and the session ledger.

mod issuer;
mod ledger;
mod ticket;

pub use issuer::{DEFAULT_TICKET_PREFIX, TicketIssuer};
pub use ledger::TicketLedger;
pub use ticket::{Redemption, Ticket, TicketId, TicketStop};
