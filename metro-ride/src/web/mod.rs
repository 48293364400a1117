//! Web layer for the ticketing service.
//!
//! Exposes the station catalog, nearest-station search, fare lookup and
//! ticket purchase as JSON endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
