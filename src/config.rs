//! Dashboard configuration.
//!
//! Every section falls back to the stock dashboard when omitted, so an empty
//! JSON object is a valid configuration.

use crate::domain::board::BoardConfig;
use crate::error::Result;
use crate::runtime::ticker::TickerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub board: BoardConfig,
    pub ticker: TickerConfig,
}

impl DashboardConfig {
    /// Parses and validates a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        self.ticker.validate()
    }
}
