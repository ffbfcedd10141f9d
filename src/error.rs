// Domain errors for ticket and batch construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    /// Wrong size, duplicate, out-of-range or unparsable number
    #[error("invalid ticket: {0}")]
    InvalidTicket(String),

    /// Price at or below the minimum, or tickets costing more than was paid
    #[error("invalid purchase: {0}")]
    InvalidPurchase(String),

    #[error("winning ticket has not been set")]
    WinningTicketNotSet,
}

pub type LottoResult<T> = std::result::Result<T, LottoError>;
