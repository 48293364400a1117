//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::StationCatalog;
use crate::config::ServerConfig;
use crate::domain::{Station, TicketType};
use crate::fares::{FareError, FareTable, price_journey};
use crate::tickets::{Ticket, TicketIssuer, TicketLedger};

/// Shared application state.
///
/// The catalog and fare table are read-only. The ledger is the only
/// mutable piece and sits behind a lock so concurrent purchases append one
/// at a time.
#[derive(Clone)]
pub struct AppState {
    /// Stations grouped by line
    pub catalog: Arc<StationCatalog>,

    /// Fare matrices per line and ticket type
    pub fares: Arc<FareTable>,

    /// Ticket identifier source
    pub issuer: Arc<TicketIssuer>,

    /// Tickets issued since startup
    pub ledger: Arc<RwLock<TicketLedger>>,

    /// Service settings
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state with an empty ledger.
    pub fn new(catalog: StationCatalog, fares: FareTable, config: ServerConfig) -> Self {
        let issuer = TicketIssuer::new(config.ticket_prefix.clone());
        Self {
            catalog: Arc::new(catalog),
            fares: Arc::new(fares),
            issuer: Arc::new(issuer),
            ledger: Arc::new(RwLock::new(TicketLedger::new())),
            config: Arc::new(config),
        }
    }

    /// Price a trip, issue the ticket and record it.
    ///
    /// Nothing is recorded if pricing fails.
    pub async fn purchase(
        &self,
        origin: &Station,
        destination: &Station,
        ticket_type: TicketType,
    ) -> Result<Ticket, FareError> {
        let segment = price_journey(origin, destination, ticket_type, &self.fares)?;

        let mut ledger = self.ledger.write().await;
        let ticket = self.issuer.issue(segment, origin, destination);
        ledger.append(ticket.clone());
        Ok(ticket)
    }

    /// Returns a snapshot of every ticket, oldest first.
    pub async fn tickets(&self) -> Vec<Ticket> {
        self.ledger.read().await.all().to_vec()
    }

    /// Look up one ticket by identifier.
    pub async fn ticket(&self, id: &str) -> Option<Ticket> {
        self.ledger.read().await.get(id).cloned()
    }
}
