use crate::models::{error::PurchaseError, ticket::TicketTypeRequest};

/// Checks one request against the purchase rules. The first broken rule is reported.
pub fn validate(request: &TicketTypeRequest, max_tickets: u32) -> Result<(), PurchaseError> {
    let total = request.total();

    if total > u64::from(max_tickets) {
        return Err(PurchaseError::TicketLimitExceeded { max: max_tickets });
    }
    if total == 0 {
        return Err(PurchaseError::NoTickets);
    }
    if request.adult() == 0 {
        return Err(PurchaseError::NoAdultTicket);
    }
    if request.infant() > request.adult() {
        return Err(PurchaseError::TooManyInfants);
    }
    Ok(())
}
