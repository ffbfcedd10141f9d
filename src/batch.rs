// 🧾 Ticket Batch - one game session
//
// Owns the purchased tickets and the price paid for them. The winning
// ticket is the only mutation point; every count and ratio is derived
// from the current tickets + winning ticket on each call.

use crate::config::{GameConfig, MAX_TICKETS_PER_PURCHASE};
use crate::error::{LottoError, LottoResult};
use crate::rank::Rank;
use crate::report::{PayoffReport, RankLine};
use crate::ticket::Ticket;
use chrono::Utc;
use rand::Rng;
use rust_decimal::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Payoff ratios are rounded to this many places
const RATIO_DECIMAL_PLACES: u32 = 2;

// ============================================================================
// TICKET BATCH
// ============================================================================

#[derive(Debug, Clone)]
pub struct TicketBatch {
    /// Stable identity for reports
    id: String,

    /// Aggregate amount paid, used as the payoff denominator
    price: i64,

    tickets: Vec<Ticket>,

    winning: Option<Ticket>,
}

impl TicketBatch {
    /// Create a batch with the standard game rules
    pub fn new(price: i64, tickets: Vec<Ticket>) -> LottoResult<Self> {
        TicketBatch::with_config(&GameConfig::default(), price, tickets)
    }

    pub fn with_config(config: &GameConfig, price: i64, tickets: Vec<Ticket>) -> LottoResult<Self> {
        // price is the payoff divisor, so it stays positive whatever the config says
        if price <= config.min_purchase_price || price <= 0 {
            return Err(LottoError::InvalidPurchase(format!(
                "price {} must be greater than {}",
                price,
                config.min_purchase_price.max(0)
            )));
        }

        check_ticket_limit(tickets.len())?;

        let affordable = config.affordable(price);
        if tickets.len() > affordable {
            return Err(LottoError::InvalidPurchase(format!(
                "{} tickets cost more than {} ({} affordable)",
                tickets.len(),
                price,
                affordable
            )));
        }

        let batch = TicketBatch {
            id: uuid::Uuid::new_v4().to_string(),
            price,
            tickets,
            winning: None,
        };
        debug!(batch = %batch.id, price, tickets = batch.tickets.len(), "ticket batch created");

        Ok(batch)
    }

    /// Batch priced at exactly one ticket price per ticket
    pub fn from_tickets(tickets: Vec<Ticket>) -> LottoResult<Self> {
        let config = GameConfig::default();
        let price = tickets.len() as i64 * config.ticket_price;
        TicketBatch::with_config(&config, price, tickets)
    }

    /// Buy `manual` tickets and spend the rest of `price` on quick picks
    pub fn purchase<R: Rng + ?Sized>(
        config: &GameConfig,
        price: i64,
        manual: Vec<Ticket>,
        rng: &mut R,
    ) -> LottoResult<Self> {
        let affordable = config.affordable(price);
        check_ticket_limit(affordable)?;
        let manual_count = manual.len();

        let mut tickets = manual;
        if affordable > manual_count {
            tickets.extend((manual_count..affordable).map(|_| Ticket::random(rng)));
        }

        let batch = TicketBatch::with_config(config, price, tickets)?;
        info!(
            batch = %batch.id,
            manual = manual_count,
            auto = batch.tickets.len() - manual_count,
            "tickets purchased"
        );

        Ok(batch)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn winning_ticket(&self) -> Option<&Ticket> {
        self.winning.as_ref()
    }

    /// Record the draw. Setting it again replaces the previous draw.
    pub fn set_winning_ticket(&mut self, winning: Ticket) {
        if let Some(previous) = &self.winning {
            debug!(batch = %self.id, %previous, "replacing winning ticket");
        }
        info!(batch = %self.id, winning = %winning, "winning ticket set");
        self.winning = Some(winning);
    }

    fn winning(&self) -> LottoResult<&Ticket> {
        self.winning.as_ref().ok_or(LottoError::WinningTicketNotSet)
    }

    /// Number of tickets landing exactly on `rank`
    pub fn count_for_rank(&self, rank: Rank) -> LottoResult<u64> {
        let winning = self.winning()?;

        Ok(self
            .tickets
            .iter()
            .filter(|t| Rank::for_match_count(t.match_count(winning)) == rank)
            .count() as u64)
    }

    /// Ticket count for every tier, including non-paying ones
    pub fn rank_counts(&self) -> LottoResult<BTreeMap<Rank, u64>> {
        let winning = self.winning()?;

        let mut counts: BTreeMap<Rank, u64> = Rank::ALL.iter().map(|r| (*r, 0)).collect();
        for ticket in &self.tickets {
            *counts
                .entry(Rank::for_match_count(ticket.match_count(winning)))
                .or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Prize money won across all paying tiers
    pub fn total_prize(&self) -> LottoResult<u64> {
        Ok(prize_for(&self.rank_counts()?))
    }

    /// Total prize divided by price paid, rounded to two places
    pub fn payoff_ratio(&self) -> LottoResult<Decimal> {
        Ok(self.ratio_for(self.total_prize()?))
    }

    fn ratio_for(&self, total_prize: u64) -> Decimal {
        let ratio = Decimal::from(total_prize) / Decimal::from(self.price);
        ratio.round_dp_with_strategy(RATIO_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn report(&self) -> LottoResult<PayoffReport> {
        let winning = self.winning()?.clone();
        let counts = self.rank_counts()?;
        let total_prize = prize_for(&counts);

        let ranks = Rank::ranked()
            .rev()
            .map(|rank| RankLine {
                rank,
                match_threshold: rank.match_threshold(),
                prize: rank.prize(),
                count: counts.get(&rank).copied().unwrap_or(0),
            })
            .collect();

        Ok(PayoffReport {
            batch_id: self.id.clone(),
            drawn_at: Utc::now(),
            price: self.price,
            ticket_count: self.tickets.len(),
            winning_ticket: winning,
            ranks,
            total_prize,
            payoff_ratio: self.ratio_for(total_prize),
        })
    }
}

fn prize_for(counts: &BTreeMap<Rank, u64>) -> u64 {
    Rank::ranked()
        .map(|rank| counts.get(&rank).copied().unwrap_or(0) * rank.prize())
        .sum()
}

fn check_ticket_limit(count: usize) -> LottoResult<()> {
    if count > MAX_TICKETS_PER_PURCHASE {
        return Err(LottoError::InvalidPurchase(format!(
            "{} tickets exceed the limit of {} per purchase",
            count, MAX_TICKETS_PER_PURCHASE
        )));
    }
    Ok(())
}

/// Fixed-point rendering with exactly two decimals ("0.00", "1.50")
pub fn format_ratio(ratio: Decimal) -> String {
    format!(
        "{:.2}",
        ratio.round_dp_with_strategy(RATIO_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    )
}

// ============================================================================
// TESTS
// ============================================================================
