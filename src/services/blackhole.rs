use async_trait::async_trait;

use crate::models::account::AccountId;

use super::service::{PaymentService, SeatReservationService, ServiceError};

#[derive(Debug, Default, Clone)]
pub struct Blackhole {}

#[async_trait]
impl PaymentService for Blackhole {
    async fn make_payment(&self, _account_id: AccountId, _amount: u64) -> Result<(), ServiceError> {
        Ok(())
    }
}

#[async_trait]
impl SeatReservationService for Blackhole {
    async fn reserve_seat(&self, _account_id: AccountId, _seats: u64) -> Result<(), ServiceError> {
        Ok(())
    }
}
