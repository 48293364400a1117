//! Station catalog error types.

use crate::domain::Line;

/// Errors that can occur while building the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Station data is not valid JSON or has the wrong shape
    #[error("station data parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A station is listed under a line other than its own
    #[error("station {name:?} declares line {declared} but is listed under {listed}")]
    LineMismatch {
        name: String,
        listed: Line,
        declared: Line,
    },

    /// Two stations on one line share a normalized name
    #[error("duplicate station {name:?} on {line}")]
    DuplicateStation { line: Line, name: String },

    /// A station has an empty name
    #[error("station with empty name on {line}")]
    EmptyName { line: Line },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::LineMismatch {
            name: "Recto Station".into(),
            listed: Line::Lrt1,
            declared: Line::Lrt2,
        };
        assert_eq!(
            err.to_string(),
            "station \"Recto Station\" declares line LRT2 but is listed under LRT1"
        );

        let err = CatalogError::DuplicateStation {
            line: Line::Mrt3,
            name: "Boni".into(),
        };
        assert_eq!(err.to_string(), "duplicate station \"Boni\" on MRT3");

        let err = CatalogError::EmptyName { line: Line::Lrt1 };
        assert_eq!(err.to_string(), "station with empty name on LRT1");
    }
}
