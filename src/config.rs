use std::{error::Error, fmt, fs, path::Path};

use serde::Deserialize;

use crate::models::ticket::PriceTable;

pub const MAX_TICKETS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TicketServiceConfig {
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,
    #[serde(default)]
    pub prices: PriceTable,
}

fn default_max_tickets() -> u32 {
    MAX_TICKETS
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS,
            prices: PriceTable::default(),
        }
    }
}

impl TicketServiceConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets == 0 {
            return Err(ConfigError::Invalid("max_tickets must be positive".to_string()));
        }
        if self.prices.child == 0 || self.prices.adult == 0 {
            return Err(ConfigError::Invalid(
                "child and adult prices must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read config: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config: {e}"),
            Self::Invalid(e) => write!(f, "Invalid config: {e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Parse(value)
    }
}
