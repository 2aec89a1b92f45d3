use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResult {
    pub total_amount: u64,
    pub total_seats: u64,
}

/// Progress of a single purchase call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStage {
    Start,
    AccountValidated,
    RequestsValidated,
    PaymentConfirmed,
    SeatsReserved,
    Done,
    Failed,
}

impl PurchaseStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Next stage on the success path, terminal stages stay put.
    pub fn advance(self) -> Self {
        match self {
            Self::Start => Self::AccountValidated,
            Self::AccountValidated => Self::RequestsValidated,
            Self::RequestsValidated => Self::PaymentConfirmed,
            Self::PaymentConfirmed => Self::SeatsReserved,
            Self::SeatsReserved => Self::Done,
            Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }
}
