// ⚙️ Game configuration - price rules as data
// Loaded from JSON; every field falls back to the standard game.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Cost of a single ticket in won
pub const TICKET_PRICE: i64 = 1000;

/// A purchase must be strictly greater than this
pub const MIN_PURCHASE_PRICE: i64 = 1000;

/// Most tickets a single purchase may hold
pub const MAX_TICKETS_PER_PURCHASE: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_ticket_price")]
    pub ticket_price: i64,

    #[serde(default = "default_min_purchase_price")]
    pub min_purchase_price: i64,
}

fn default_ticket_price() -> i64 {
    TICKET_PRICE
}

fn default_min_purchase_price() -> i64 {
    MIN_PURCHASE_PRICE
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ticket_price: TICKET_PRICE,
            min_purchase_price: MIN_PURCHASE_PRICE,
        }
    }
}

impl GameConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        GameConfig::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;

        if config.ticket_price <= 0 {
            anyhow::bail!("ticket_price must be positive, got {}", config.ticket_price);
        }

        if config.min_purchase_price < 0 {
            anyhow::bail!(
                "min_purchase_price must not be negative, got {}",
                config.min_purchase_price
            );
        }

        Ok(config)
    }

    /// How many tickets a price buys
    pub fn affordable(&self, price: i64) -> usize {
        if price <= 0 {
            return 0;
        }
        (price / self.ticket_price) as usize
    }
}

// ============================================================================
// TESTS
// ============================================================================
