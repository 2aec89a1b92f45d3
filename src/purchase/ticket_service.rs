use uuid::Uuid;

use crate::{
    config::TicketServiceConfig,
    logger::LogSink,
    models::{
        account::AccountId,
        error::PurchaseError,
        purchase::{PurchaseResult, PurchaseStage},
        ticket::TicketTypeRequest,
    },
    services::service::{PaymentService, SeatReservationService},
};

use super::{
    pricing::{price_and_seats, Totals},
    validator::validate,
};

/// Validates and prices ticket requests, then pays and reserves seats for them.
///
/// Payment always completes before the reservation is attempted. A failed
/// reservation does not refund the payment.
pub struct TicketService<Payment, Reservation, Logger> {
    payment: Payment,
    reservation: Reservation,
    logger: Logger,
    config: TicketServiceConfig,
}

impl<Payment, Reservation, Logger> TicketService<Payment, Reservation, Logger>
where
    Payment: PaymentService,
    Reservation: SeatReservationService,
    Logger: LogSink,
{
    pub fn new(payment: Payment, reservation: Reservation, logger: Logger) -> Self {
        Self {
            payment,
            reservation,
            logger,
            config: TicketServiceConfig::default(),
        }
    }

    pub fn with_config(self, config: TicketServiceConfig) -> Self {
        Self { config, ..self }
    }

    /// Every failure is reported to the log sink before it is returned.
    ///
    /// Each call gets a random purchase id. It only correlates the `log::trace!`
    /// lines of one call and is never sent to the collaborators.
    pub async fn purchase_tickets<A>(
        &self,
        account_id: A,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseResult, PurchaseError>
    where
        A: TryInto<AccountId>,
    {
        let purchase_id = Uuid::new_v4();
        let mut stage = PurchaseStage::Start;
        let result = self
            .execute(purchase_id, account_id, requests, &mut stage)
            .await;
        match &result {
            Ok(_) => stage = PurchaseStage::Done,
            Err(e) => {
                log::debug!("purchase {purchase_id} failed after {stage:?}");
                self.logger.error(&e.reason());
                stage = PurchaseStage::Failed;
            }
        }
        debug_assert!(stage.is_terminal());
        log::trace!("purchase {purchase_id} finished as {stage:?}");
        result
    }

    async fn execute<A>(
        &self,
        purchase_id: Uuid,
        account_id: A,
        requests: &[TicketTypeRequest],
        stage: &mut PurchaseStage,
    ) -> Result<PurchaseResult, PurchaseError>
    where
        A: TryInto<AccountId>,
    {
        let account_id: AccountId = account_id
            .try_into()
            .map_err(|_| PurchaseError::InvalidAccountId)?;
        advance(purchase_id, stage);

        let totals = self.totals(requests)?;
        advance(purchase_id, stage);

        self.pay(account_id, totals.amount).await?;
        advance(purchase_id, stage);

        self.reserve(account_id, totals.seats).await?;
        advance(purchase_id, stage);

        Ok(PurchaseResult {
            total_amount: totals.amount,
            total_seats: totals.seats,
        })
    }

    fn totals(&self, requests: &[TicketTypeRequest]) -> Result<Totals, PurchaseError> {
        if requests.is_empty() {
            return Err(PurchaseError::NoTickets);
        }
        requests.iter().try_fold(Totals::default(), |totals, request| {
            validate(request, self.config.max_tickets)?;
            price_and_seats(request, &self.config.prices)
                .and_then(|request_totals| totals.checked_add(request_totals))
                .ok_or_else(|| PurchaseError::other("Ticket totals are too large"))
        })
    }

    async fn pay(&self, account_id: AccountId, amount: u64) -> Result<(), PurchaseError> {
        self.payment
            .make_payment(account_id, amount)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Payment Error: {e}"));
                if e.is_offline() {
                    PurchaseError::PaymentOffline
                } else {
                    PurchaseError::PaymentFailed
                }
            })
    }

    async fn reserve(&self, account_id: AccountId, seats: u64) -> Result<(), PurchaseError> {
        self.reservation
            .reserve_seat(account_id, seats)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Reservation Error: {e}"));
                if e.is_offline() {
                    PurchaseError::ReservationOffline
                } else {
                    PurchaseError::ReservationFailed
                }
            })
    }
}

fn advance(purchase_id: Uuid, stage: &mut PurchaseStage) {
    *stage = stage.advance();
    log::trace!("purchase {purchase_id} reached {stage:?}");
}
