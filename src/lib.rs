// Lotto - Core Library
// Ticket scoring and payout engine, used by the CLI and tests

pub mod error;
pub mod ticket;
pub mod rank;
pub mod config;
pub mod batch;
pub mod report;
pub mod loader;

// Re-export commonly used types
pub use error::{LottoError, LottoResult};
pub use ticket::{Ticket, TICKET_SIZE, MIN_NUMBER, MAX_NUMBER};
pub use rank::Rank;
pub use config::{GameConfig, TICKET_PRICE, MIN_PURCHASE_PRICE, MAX_TICKETS_PER_PURCHASE};
pub use batch::{TicketBatch, format_ratio};
pub use report::{PayoffReport, RankLine};
pub use loader::{load_tickets, read_tickets};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
