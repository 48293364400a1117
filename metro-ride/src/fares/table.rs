//! Fare matrices.
//!
//! Each line has one origin × destination matrix per ticket type. The data
//! file mirrors that shape, with `null` marking a listed route that has no
//! price:
//!
//! ```json
//! { "LRT2": { "SJT": { "Recto": { "Legarda": 15 } },
//!             "SVC": { "Recto": { "Legarda": 14 } } } }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{FareValue, Line, StationKey, TicketType};

use super::error::FareTableError;

/// Fare data bundled at build time.
const EMBEDDED_FARES: &str = include_str!("../../data/fares.json");

/// Origin → destination → fare cell, keyed by normalized station name.
#[derive(Debug, Clone, Default)]
pub struct FareMatrix {
    routes: HashMap<StationKey, HashMap<StationKey, FareValue>>,
}

impl FareMatrix {
    /// Look up a cell by normalized origin and destination names.
    ///
    /// Returns `None` when the route is not in the matrix at all.
    pub fn get(&self, origin: &str, destination: &str) -> Option<FareValue> {
        self.routes.get(origin)?.get(destination).copied()
    }

    fn insert(&mut self, origin: StationKey, destination: StationKey, value: FareValue) {
        self.routes
            .entry(origin)
            .or_default()
            .insert(destination, value);
    }

    /// Returns the number of listed routes.
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    /// Returns true if no routes are listed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The two matrices for one line.
#[derive(Debug, Clone, Default)]
struct LineFares {
    single_journey: FareMatrix,
    stored_value: FareMatrix,
}

impl LineFares {
    fn matrix(&self, ticket_type: TicketType) -> &FareMatrix {
        match ticket_type {
            TicketType::SingleJourney => &self.single_journey,
            TicketType::StoredValue => &self.stored_value,
        }
    }

    fn matrix_mut(&mut self, ticket_type: TicketType) -> &mut FareMatrix {
        match ticket_type {
            TicketType::SingleJourney => &mut self.single_journey,
            TicketType::StoredValue => &mut self.stored_value,
        }
    }
}

/// Static fare data for every line.
///
/// Symmetry (A→B priced the same as B→A) is expected of the data but not
/// enforced here; each direction is looked up as listed.
#[derive(Debug, Clone, Default)]
pub struct FareTable {
    lines: HashMap<Line, LineFares>,
}

impl FareTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one cell.
    ///
    /// Station names are normalized, so "Recto Station" and "Recto" land
    /// in the same row.
    pub fn insert(
        &mut self,
        line: Line,
        ticket_type: TicketType,
        origin: &str,
        destination: &str,
        value: FareValue,
    ) {
        self.lines
            .entry(line)
            .or_default()
            .matrix_mut(ticket_type)
            .insert(
                StationKey::from_name(origin),
                StationKey::from_name(destination),
                value,
            );
    }

    /// Look up one cell.
    pub fn get(
        &self,
        line: Line,
        ticket_type: TicketType,
        origin: &StationKey,
        destination: &StationKey,
    ) -> Option<FareValue> {
        self.matrix(line, ticket_type)?
            .get(origin.as_str(), destination.as_str())
    }

    /// Returns the matrix for a line and ticket type, if the line is listed.
    pub fn matrix(&self, line: Line, ticket_type: TicketType) -> Option<&FareMatrix> {
        self.lines
            .get(&line)
            .map(|fares| fares.matrix(ticket_type))
    }

    /// Load the table bundled with the crate.
    pub fn embedded() -> Result<Self, FareTableError> {
        Self::from_json(EMBEDDED_FARES)
    }

    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> Result<Self, FareTableError> {
        let raw: BTreeMap<Line, RawLineFares> = serde_json::from_str(json)?;

        let mut table = Self::new();
        for (line, fares) in raw {
            for (ticket_type, matrix) in [
                (TicketType::SingleJourney, fares.single_journey),
                (TicketType::StoredValue, fares.stored_value),
            ] {
                for (origin, row) in matrix {
                    for (destination, value) in row {
                        table.insert(line, ticket_type, &origin, &destination, value);
                    }
                }
            }
        }

        debug!(lines = table.lines.len(), "loaded fare table");
        Ok(table)
    }
}

type RawMatrix = HashMap<String, HashMap<String, FareValue>>;

#[derive(Debug, Deserialize)]
struct RawLineFares {
    #[serde(rename = "SJT", default)]
    single_journey: RawMatrix,
    #[serde(rename = "SVC", default)]
    stored_value: RawMatrix,
}
