// 📊 Payoff Report - the result of one draw
// Serializable snapshot of rank counts and return ratio for display or JSON.

use crate::batch::format_ratio;
use crate::rank::Rank;
use crate::ticket::Ticket;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankLine {
    pub rank: Rank,
    pub match_threshold: usize,
    pub prize: u64,
    pub count: u64,
}

impl RankLine {
    pub fn describe(&self) -> String {
        format!(
            "{} matches ({}) - {} tickets",
            self.match_threshold, self.prize, self.count
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffReport {
    pub batch_id: String,
    pub drawn_at: DateTime<Utc>,
    pub price: i64,
    pub ticket_count: usize,
    pub winning_ticket: Ticket,

    /// Paying tiers, lowest prize first
    pub ranks: Vec<RankLine>,

    pub total_prize: u64,
    pub payoff_ratio: Decimal,
}

impl PayoffReport {
    /// Spent more than was won
    pub fn is_loss(&self) -> bool {
        self.payoff_ratio < Decimal::ONE
    }

    pub fn lines(&self) -> Vec<String> {
        self.ranks.iter().map(RankLine::describe).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Batch {}: {} tickets for {}, won {}, payoff ratio {}{}",
            self.batch_id,
            self.ticket_count,
            self.price,
            self.total_prize,
            format_ratio(self.payoff_ratio),
            if self.is_loss() { " (loss)" } else { "" }
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
