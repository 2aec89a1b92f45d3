use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::account::AccountId;

use super::service::{PaymentService, SeatReservationService, ServiceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub transaction_id: Uuid,
    pub account_id: AccountId,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: Uuid,
    pub account_id: AccountId,
    pub seats: u64,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    payments: Arc<RwLock<Vec<Payment>>>,
    failure: Option<ServiceError>,
}

impl InMemoryPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error` and nothing is recorded.
    pub fn failing_with(error: ServiceError) -> Self {
        Self {
            payments: Default::default(),
            failure: Some(error),
        }
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments.read().expect("payments lock").clone()
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ServiceError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        let transaction_id = Uuid::new_v4();
        log::trace!("payment {transaction_id} of {amount} for account {account_id}");
        self.payments.write().expect("payments lock").push(Payment {
            transaction_id,
            account_id,
            amount,
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    reservations: Arc<RwLock<Vec<Reservation>>>,
    failure: Option<ServiceError>,
}

impl InMemorySeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error` and nothing is recorded.
    pub fn failing_with(error: ServiceError) -> Self {
        Self {
            reservations: Default::default(),
            failure: Some(error),
        }
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.read().expect("reservations lock").clone()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seat(&self, account_id: AccountId, seats: u64) -> Result<(), ServiceError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        let reservation_id = Uuid::new_v4();
        log::trace!("reservation {reservation_id} of {seats} seats for account {account_id}");
        self.reservations
            .write()
            .expect("reservations lock")
            .push(Reservation {
                reservation_id,
                account_id,
                seats,
            });
        Ok(())
    }
}
