// 🎟️ Ticket - one lottery entry
//
// A ticket is a VALUE: six distinct numbers in 1..=45, validated once at
// construction and never mutated afterwards.

use crate::error::{LottoError, LottoResult};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Numbers on every ticket
pub const TICKET_SIZE: usize = 6;

/// Smallest number that can be picked
pub const MIN_NUMBER: u8 = 1;

/// Largest number that can be picked
pub const MAX_NUMBER: u8 = 45;

// ============================================================================
// TICKET
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Ticket {
    numbers: BTreeSet<u8>,
}

impl Ticket {
    /// Build a ticket from exactly six distinct numbers in range
    pub fn new<I>(numbers: I) -> LottoResult<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let picked: Vec<u8> = numbers.into_iter().collect();

        if picked.len() != TICKET_SIZE {
            return Err(LottoError::InvalidTicket(format!(
                "expected {} numbers, got {}",
                TICKET_SIZE,
                picked.len()
            )));
        }

        if let Some(out) = picked
            .iter()
            .find(|n| !(MIN_NUMBER..=MAX_NUMBER).contains(*n))
        {
            return Err(LottoError::InvalidTicket(format!(
                "{} is outside {}..={}",
                out, MIN_NUMBER, MAX_NUMBER
            )));
        }

        let numbers: BTreeSet<u8> = picked.iter().copied().collect();
        if numbers.len() != picked.len() {
            return Err(LottoError::InvalidTicket(
                "numbers must not repeat".to_string(),
            ));
        }

        Ok(Ticket { numbers })
    }

    /// Quick pick: six distinct numbers drawn uniformly from the valid range
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let span = (MAX_NUMBER - MIN_NUMBER + 1) as usize;
        let numbers = index::sample(rng, span, TICKET_SIZE)
            .into_iter()
            .map(|i| MIN_NUMBER + i as u8)
            .collect();

        Ticket { numbers }
    }

    /// How many numbers the two tickets share
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers.intersection(&other.numbers).count()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Numbers in ascending order
    pub fn numbers(&self) -> Vec<u8> {
        self.numbers.iter().copied().collect()
    }
}

impl FromStr for Ticket {
    type Err = LottoError;

    /// Parse "1,2,3,4,5,6" (whitespace around each number is ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u8>().map_err(|_| {
                    LottoError::InvalidTicket(format!("'{}' is not a valid number", part))
                })
            })
            .collect::<LottoResult<Vec<u8>>>()?;

        Ticket::new(numbers)
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = LottoError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Ticket::new(numbers)
    }
}

impl From<Ticket> for Vec<u8> {
    fn from(ticket: Ticket) -> Self {
        ticket.numbers()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}]", joined.join(", "))
    }
}

// ============================================================================
// TESTS
// ============================================================================
