//! Fare amounts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest peso amount accepted from fare data.
const MAX_PESOS: f64 = 1.0e12;

/// Error returned when a fare amount cannot be represented.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid fare amount {amount}: {reason}")]
pub struct InvalidFare {
    amount: f64,
    reason: &'static str,
}

/// A fare, held in centavos.
///
/// Published fares are usually whole pesos but the data may carry decimal
/// amounts; storing centavos keeps both exact from lookup to ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fare(u64);

impl Fare {
    /// Create a fare from a whole peso amount.
    pub const fn pesos(amount: u32) -> Self {
        Fare(amount as u64 * 100)
    }

    /// Create a fare from an amount in centavos.
    pub const fn centavos(amount: u64) -> Self {
        Fare(amount)
    }

    /// Convert a decimal peso amount, to the nearest centavo.
    pub fn from_pesos(amount: f64) -> Result<Self, InvalidFare> {
        let reason = if !amount.is_finite() {
            Some("must be finite")
        } else if amount < 0.0 {
            Some("must not be negative")
        } else if amount > MAX_PESOS {
            Some("too large")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidFare { amount, reason }),
            None => Ok(Fare((amount * 100.0).round() as u64)),
        }
    }

    /// Returns the amount in centavos.
    pub const fn as_centavos(&self) -> u64 {
        self.0
    }

    /// Returns the amount in pesos.
    pub fn as_pesos(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₱{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A fare-matrix cell.
///
/// A cell that is present in the table may still carry no price; that is
/// distinct from the route being absent from the table altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub enum FareValue {
    Amount(Fare),
    Unavailable,
}

impl FareValue {
    /// Returns the fare if this cell has a numeric amount.
    pub fn amount(&self) -> Option<Fare> {
        match self {
            FareValue::Amount(fare) => Some(*fare),
            FareValue::Unavailable => None,
        }
    }

    /// Returns true if this cell has a numeric amount.
    pub fn is_available(&self) -> bool {
        matches!(self, FareValue::Amount(_))
    }
}

impl TryFrom<Option<f64>> for FareValue {
    type Error = InvalidFare;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        match value {
            Some(pesos) => Fare::from_pesos(pesos).map(FareValue::Amount),
            None => Ok(FareValue::Unavailable),
        }
    }
}

impl From<FareValue> for Option<f64> {
    fn from(value: FareValue) -> Self {
        value.amount().map(|fare| fare.as_pesos())
    }
}

impl fmt::Display for FareValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FareValue::Amount(fare) => fare.fmt(f),
            FareValue::Unavailable => f.write_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Fare::pesos(15).to_string(), "₱15.00");
        assert_eq!(FareValue::Amount(Fare::pesos(20)).to_string(), "₱20.00");
        assert_eq!(FareValue::Unavailable.to_string(), "N/A");
    }

    #[test]
    fn amount_accessors() {
        let cell = FareValue::Amount(Fare::pesos(13));
        assert_eq!(cell.amount(), Some(Fare::pesos(13)));
        assert!(cell.is_available());
        assert_eq!(FareValue::Unavailable.amount(), None);
        assert!(!FareValue::Unavailable.is_available());
    }

    #[test]
    fn deserialize_cells() {
        let cells: Vec<FareValue> = serde_json::from_str("[15, null, 0]").unwrap();
        assert_eq!(
            cells,
            vec![
                FareValue::Amount(Fare::pesos(15)),
                FareValue::Unavailable,
                FareValue::Amount(Fare::pesos(0)),
            ]
        );
    }

    #[test]
    fn negative_amounts_rejected() {
        assert!(serde_json::from_str::<FareValue>("-5").is_err());
        assert!(Fare::from_pesos(-0.5).is_err());
        assert!(Fare::from_pesos(f64::NAN).is_err());
    }

    #[test]
    fn decimal_amounts_kept_to_the_centavo() {
        let cells: Vec<FareValue> = serde_json::from_str("[12.5, 13.75, 0.05]").unwrap();
        assert_eq!(
            cells,
            vec![
                FareValue::Amount(Fare::centavos(1250)),
                FareValue::Amount(Fare::centavos(1375)),
                FareValue::Amount(Fare::centavos(5)),
            ]
        );
        assert_eq!(cells[0].to_string(), "₱12.50");
        assert_eq!(cells[2].to_string(), "₱0.05");
        assert_eq!(Fare::centavos(1375).as_pesos(), 13.75);
    }

    #[test]
    fn whole_pesos_in_centavos() {
        assert_eq!(Fare::pesos(15), Fare::centavos(1500));
        assert_eq!(Fare::pesos(15).as_centavos(), 1500);
        assert_eq!(Fare::from_pesos(15.0).unwrap(), Fare::pesos(15));
    }

    #[test]
    fn serialize_cells() {
        let json = serde_json::to_string(&[FareValue::Amount(Fare::centavos(3050)), FareValue::Unavailable]).unwrap();
        assert_eq!(json, "[30.5,null]");
    }

    #[test]
    fn ordering() {
        assert!(Fare::pesos(13) < Fare::pesos(28));
    }
}
