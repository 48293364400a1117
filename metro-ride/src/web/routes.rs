//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::catalog::StationCatalog;
use crate::domain::{
    Coordinate, InvalidCoordinate, InvalidLine, InvalidTicketType, Line, Station, TicketType,
};
use crate::fares::{FareError, price_journey};
use crate::locate::{LocateError, nearest_within};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines))
        .route("/lines/:line/stations", get(line_stations))
        .route("/stations/nearest", get(nearest_station))
        .route("/fares", get(price_fare))
        .route("/tickets", get(list_tickets).post(purchase_ticket))
        .route("/tickets/:id", get(get_ticket))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the lines with their station counts.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .catalog
        .lines()
        .map(|line| LineSummary {
            code: line.as_str(),
            name: line.display_name(),
            stations: state.catalog.stations_for_line(line).len(),
        })
        .collect();

    Json(LinesResponse { lines })
}

/// List the stations on one line, in catalog order.
async fn line_stations(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> Result<Json<StationListResponse>, AppError> {
    let line = Line::parse(&line)?;

    let stations = state
        .catalog
        .stations_for_line(line)
        .iter()
        .map(StationResult::from_station)
        .collect();

    Ok(Json(StationListResponse { line, stations }))
}

/// Find the station closest to a position, plus the runners-up.
async fn nearest_station(
    State(state): State<AppState>,
    Query(req): Query<NearestRequest>,
) -> Result<Json<NearestResponse>, AppError> {
    let point = Coordinate::new(req.lat, req.lon)?;
    let cap = state.config.max_nearest.max(1);
    let limit = req.limit.unwrap_or(1).clamp(1, cap);

    let ranked = nearest_within(point, &state.catalog, limit);
    let (nearest, rest) = ranked.split_first().ok_or(LocateError::NotFound)?;

    Ok(Json(NearestResponse {
        nearest: NearbyResult::from_nearby(nearest),
        alternatives: rest.iter().map(NearbyResult::from_nearby).collect(),
    }))
}

/// Price a journey without issuing a ticket.
async fn price_fare(
    State(state): State<AppState>,
    Query(req): Query<FareRequest>,
) -> Result<Json<SegmentResult>, AppError> {
    let origin = resolve_station(&state.catalog, &req.origin_line, &req.origin)?;
    let destination = resolve_station(&state.catalog, &req.destination_line, &req.destination)?;
    let ticket_type = TicketType::parse(&req.ticket_type)?;

    let segment = price_journey(origin, destination, ticket_type, &state.fares)?;
    Ok(Json(SegmentResult::from_segment(&segment)))
}

/// Buy a ticket and record it in the ledger.
async fn purchase_ticket(
    State(state): State<AppState>,
    Json(req): Json<PurchaseRequest>,
) -> Result<(StatusCode, Json<TicketResult>), AppError> {
    let origin = resolve_station(&state.catalog, &req.origin.line, &req.origin.name)?;
    let destination =
        resolve_station(&state.catalog, &req.destination.line, &req.destination.name)?;
    let ticket_type = TicketType::parse(&req.ticket_type)?;

    let ticket = state.purchase(origin, destination, ticket_type).await?;
    info!(
        id = %ticket.id(),
        ticket_type = %ticket.ticket_type(),
        fare = %ticket.fare(),
        "issued ticket"
    );

    Ok((StatusCode::CREATED, Json(TicketResult::from_ticket(&ticket))))
}

/// List every ticket issued since startup, oldest first.
async fn list_tickets(State(state): State<AppState>) -> Json<TicketListResponse> {
    let tickets = state
        .tickets()
        .await
        .iter()
        .map(TicketResult::from_ticket)
        .collect();

    Json(TicketListResponse { tickets })
}

/// Fetch one ticket by identifier.
async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TicketResult>, AppError> {
    let ticket = state.ticket(&id).await.ok_or_else(|| AppError::NotFound {
        message: format!("no ticket with id {id:?}"),
    })?;

    Ok(Json(TicketResult::from_ticket(&ticket)))
}

/// Look up a station by line code and name.
///
/// The name may be given with or without its "Station" suffix.
fn resolve_station<'a>(
    catalog: &'a StationCatalog,
    line: &str,
    name: &str,
) -> Result<&'a Station, AppError> {
    let line = Line::parse(line)?;
    catalog.find(line, name).ok_or_else(|| AppError::NotFound {
        message: format!("no station named {name:?} on {line}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        let message = e.to_string();
        match e {
            FareError::CrossLineUnsupported { .. } | FareError::SameStation { .. } => {
                AppError::Unprocessable { message }
            }
            FareError::RouteNotFound { .. } | FareError::FareUnavailable { .. } => {
                AppError::NotFound { message }
            }
        }
    }
}

impl From<LocateError> for AppError {
    fn from(e: LocateError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl From<InvalidLine> for AppError {
    fn from(e: InvalidLine) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidTicketType> for AppError {
    fn from(e: InvalidTicketType) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
