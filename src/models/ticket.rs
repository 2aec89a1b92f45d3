use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Infant,
    Child,
    Adult,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [Self::Infant, Self::Child, Self::Adult];

    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Infant => write!(f, "INFANT"),
            Self::Child => write!(f, "CHILD"),
            Self::Adult => write!(f, "ADULT"),
        }
    }
}

/// Ticket counts for one line item of a purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(default)]
    infant: u32,
    #[serde(default)]
    child: u32,
    #[serde(default)]
    adult: u32,
}

impl TicketTypeRequest {
    pub fn new(infant: u32, child: u32, adult: u32) -> Self {
        Self {
            infant,
            child,
            adult,
        }
    }

    pub fn infant(&self) -> u32 {
        self.infant
    }

    pub fn adult(&self) -> u32 {
        self.adult
    }

    pub fn count(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Infant => self.infant,
            TicketCategory::Child => self.child,
            TicketCategory::Adult => self.adult,
        }
    }

    pub fn total(&self) -> u64 {
        TicketCategory::ALL
            .iter()
            .map(|c| u64::from(self.count(*c)))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default = "PriceTable::default_child")]
    pub child: u64,
    #[serde(default = "PriceTable::default_adult")]
    pub adult: u64,
}

impl PriceTable {
    pub const CHILD: u64 = 10;
    pub const ADULT: u64 = 20;

    pub fn price(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Infant => 0,
            TicketCategory::Child => self.child,
            TicketCategory::Adult => self.adult,
        }
    }

    fn default_child() -> u64 {
        Self::CHILD
    }

    fn default_adult() -> u64 {
        Self::ADULT
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            child: Self::CHILD,
            adult: Self::ADULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infant_is_free() {
        let prices = PriceTable::default();
        assert_eq!(0, prices.price(TicketCategory::Infant));
        assert_eq!(10, prices.price(TicketCategory::Child));
        assert_eq!(20, prices.price(TicketCategory::Adult));
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn test_request_counts() {
        let request = TicketTypeRequest::new(1, 4, 2);
        assert_eq!(1, request.count(TicketCategory::Infant));
        assert_eq!(2, request.count(TicketCategory::Adult));
        assert_eq!(7, request.total());
        assert_eq!(4, request.count(TicketCategory::Child));
    }

    #[test]
    fn test_request_missing_fields_deserialize_as_zero() {
        let request: TicketTypeRequest = serde_json::from_str(r#"{"adult": 3}"#).unwrap();
        assert_eq!(TicketTypeRequest::new(0, 0, 3), request);
    }
}
