use std::{error::Error, fmt};

use async_trait::async_trait;

use crate::models::account::AccountId;

/// Marker collaborators put in their failure message when unavailable.
pub const SERVICE_OFFLINE: &str = "Service Offline";

#[async_trait]
pub trait PaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait SeatReservationService {
    async fn reserve_seat(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn offline() -> Self {
        Self::new(SERVICE_OFFLINE)
    }

    // Collaborators only signal outages through their message text.
    pub fn is_offline(&self) -> bool {
        self.message.contains(SERVICE_OFFLINE)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ServiceError {}
