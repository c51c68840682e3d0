use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Booking status of a doctor.
///
/// Stored as text in `doctorsheet.availability` and parsed exhaustively here,
/// so unknown strings never reach the booking state machine. The wire strings
/// carry spaces (`"Not Available"`, `"On Leave"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Availability {
    Available,
    Appointed,
    #[serde(rename = "Not Available")]
    NotAvailable,
    #[serde(rename = "On Leave")]
    OnLeave,
}

#[derive(Debug, Error)]
#[error("'{0}' is not a valid availability status")]
pub struct UnknownAvailability(pub String);

impl Availability {
    pub const fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Appointed => "Appointed",
            Availability::NotAvailable => "Not Available",
            Availability::OnLeave => "On Leave",
        }
    }

    /// Booking is permitted only from `Available`.
    pub const fn is_bookable(self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Whether an administrative set to this status force-clears every
    /// appointment referencing the doctor. Setting `Appointed` is the one
    /// status that leaves the ledger untouched.
    pub const fn clears_appointments(self) -> bool {
        !matches!(self, Availability::Appointed)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = UnknownAvailability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Availability::Available),
            "Appointed" => Ok(Availability::Appointed),
            "Not Available" => Ok(Availability::NotAvailable),
            "On Leave" => Ok(Availability::OnLeave),
            other => Err(UnknownAvailability(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_status() {
        assert_eq!("Available".parse::<Availability>().unwrap(), Availability::Available);
        assert_eq!("Appointed".parse::<Availability>().unwrap(), Availability::Appointed);
        assert_eq!(
            "Not Available".parse::<Availability>().unwrap(),
            Availability::NotAvailable
        );
        assert_eq!("On Leave".parse::<Availability>().unwrap(), Availability::OnLeave);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("Busy".parse::<Availability>().is_err());
        assert!("".parse::<Availability>().is_err());
        // Case matters; the wire strings are exact.
        assert!("available".parse::<Availability>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for status in [
            Availability::Available,
            Availability::Appointed,
            Availability::NotAvailable,
            Availability::OnLeave,
        ] {
            assert_eq!(status.to_string().parse::<Availability>().unwrap(), status);
        }
    }

    #[test]
    fn only_available_is_bookable() {
        assert!(Availability::Available.is_bookable());
        assert!(!Availability::Appointed.is_bookable());
        assert!(!Availability::NotAvailable.is_bookable());
        assert!(!Availability::OnLeave.is_bookable());
    }

    #[test]
    fn appointed_is_the_only_non_clearing_status() {
        assert!(Availability::Available.clears_appointments());
        assert!(Availability::NotAvailable.clears_appointments());
        assert!(Availability::OnLeave.clears_appointments());
        assert!(!Availability::Appointed.clears_appointments());
    }

    #[test]
    fn serde_uses_the_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Availability::NotAvailable).unwrap(),
            "\"Not Available\""
        );
        assert_eq!(
            serde_json::from_str::<Availability>("\"On Leave\"").unwrap(),
            Availability::OnLeave
        );
    }
}
