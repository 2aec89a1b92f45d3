use crate::models::ticket::{PriceTable, TicketCategory, TicketTypeRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub amount: u64,
    pub seats: u64,
}

impl Totals {
    pub fn checked_add(self, other: Totals) -> Option<Totals> {
        Some(Totals {
            amount: self.amount.checked_add(other.amount)?,
            seats: self.seats.checked_add(other.seats)?,
        })
    }
}

/// Amount owed and seats taken by an already validated request.
/// Infants are free and take no seat. `None` when the amount does not fit in a `u64`.
pub fn price_and_seats(request: &TicketTypeRequest, prices: &PriceTable) -> Option<Totals> {
    TicketCategory::ALL
        .iter()
        .try_fold(Totals::default(), |totals, category| {
            let count = u64::from(request.count(*category));
            let seats = if category.occupies_seat() { count } else { 0 };
            totals.checked_add(Totals {
                amount: count.checked_mul(prices.price(*category))?,
                seats,
            })
        })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_family_purchase() {
        let totals = price_and_seats(&TicketTypeRequest::new(2, 3, 2), &PriceTable::default());
        assert_eq!(Some(Totals { amount: 70, seats: 5 }), totals);
    }

    #[test]
    fn test_custom_prices() {
        let prices = PriceTable { child: 15, adult: 25 };
        let totals = price_and_seats(&TicketTypeRequest::new(1, 2, 1), &prices);
        assert_eq!(Some(Totals { amount: 55, seats: 3 }), totals);
    }

    #[test]
    fn test_accumulation() {
        let prices = PriceTable::default();
        let first = price_and_seats(&TicketTypeRequest::new(0, 1, 1), &prices).unwrap();
        let second = price_and_seats(&TicketTypeRequest::new(1, 0, 2), &prices).unwrap();
        assert_eq!(Some(Totals { amount: 70, seats: 4 }), first.checked_add(second));
        assert_eq!(first.checked_add(second), second.checked_add(first));

        let full = Totals {
            amount: u64::MAX,
            seats: 1,
        };
        assert_eq!(None, full.checked_add(first));
    }

    #[test]
    fn test_single_request_overflow() {
        let prices = PriceTable {
            child: 1,
            adult: u64::MAX / 2 + 1,
        };
        assert_eq!(None, price_and_seats(&TicketTypeRequest::new(0, 0, 3), &prices));

        let prices = PriceTable {
            child: u64::MAX,
            adult: 1,
        };
        assert_eq!(None, price_and_seats(&TicketTypeRequest::new(0, 1, 1), &prices));
    }

    proptest! {
        #[test]
        fn pricing_is_linear_and_infant_exempt(infant in 0u32..=20, child in 0u32..=20, adult in 0u32..=20) {
            let prices = PriceTable::default();
            let totals = price_and_seats(&TicketTypeRequest::new(infant, child, adult), &prices).unwrap();
            prop_assert_eq!(u64::from(child) * prices.child + u64::from(adult) * prices.adult, totals.amount);
            prop_assert_eq!(u64::from(child) + u64::from(adult), totals.seats);
        }
    }
}
