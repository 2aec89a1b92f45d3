use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAccountId(pub String);

impl fmt::Display for InvalidAccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid account id: {}", self.0)
    }
}

impl Error for InvalidAccountId {}

macro_rules! account_id_from_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for AccountId {
            type Error = InvalidAccountId;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Ok(AccountId::new(u64::from(value)))
            }
        }
    )*};
}

macro_rules! account_id_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for AccountId {
            type Error = InvalidAccountId;

            fn try_from(value: $t) -> Result<Self, Self::Error> {
                u64::try_from(value)
                    .map(AccountId::new)
                    .map_err(|_| InvalidAccountId(value.to_string()))
            }
        }
    )*};
}

account_id_from_unsigned!(u8, u16, u32, u64);
account_id_from_signed!(i8, i16, i32, i64);

impl FromStr for AccountId {
    type Err = InvalidAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(AccountId::new)
            .map_err(|_| InvalidAccountId(s.to_string()))
    }
}

impl TryFrom<&str> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// JSON numbers are accepted when integral and non-negative, so 7.0 is a valid id.
// Strings are rejected, even numeric ones.
impl TryFrom<&serde_json::Value> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let invalid = || InvalidAccountId(value.to_string());
        let serde_json::Value::Number(number) = value else {
            return Err(invalid());
        };
        if let Some(id) = number.as_u64() {
            return Ok(AccountId::new(id));
        }
        match number.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                Ok(AccountId::new(f as u64))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<serde_json::Value> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        AccountId::try_from(&value)
    }
}
