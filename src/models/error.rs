use std::{error::Error, fmt};

use super::account::InvalidAccountId;

pub const GENERIC_FAILURE: &str = "An error occured, please try again";
pub const FALLBACK_REASON: &str = "An Error Occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    InvalidAccountId,
    TicketLimitExceeded { max: u32 },
    NoTickets,
    NoAdultTicket,
    TooManyInfants,
    PaymentOffline,
    PaymentFailed,
    ReservationOffline,
    ReservationFailed,
    Other(String),
}

impl PurchaseError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAccountId => write!(f, "Invalid ticket id"),
            Self::TicketLimitExceeded { max } => write!(
                f,
                "Total number of tickets exceeds the maximum limit of {max} tickets"
            ),
            Self::NoTickets => write!(f, "At least one ticket must be purchased"),
            Self::NoAdultTicket => write!(f, "At least one adult ticket must be purchased"),
            Self::TooManyInfants => write!(
                f,
                "Number of infant tickets must not exceed number of adult tickets"
            ),
            Self::PaymentOffline => write!(
                f,
                "Payment service is currently offline. Please try again later."
            ),
            Self::ReservationOffline => write!(
                f,
                "Seat reservation service is currently offline. Please try again later."
            ),
            Self::PaymentFailed | Self::ReservationFailed => write!(f, "{GENERIC_FAILURE}"),
            Self::Other(message) if message.is_empty() => write!(f, "{FALLBACK_REASON}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for PurchaseError {}

impl From<InvalidAccountId> for PurchaseError {
    fn from(_: InvalidAccountId) -> Self {
        PurchaseError::InvalidAccountId
    }
}
