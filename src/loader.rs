// 📂 Ticket sheet loader - CSV → validated tickets
//
// Expected layout (header required):
//
//   numbers
//   "1,2,3,4,5,6"
//   "7, 8, 9, 10, 11, 12"

use crate::ticket::Ticket;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TicketRow {
    numbers: String,
}

pub fn load_tickets(csv_path: &Path) -> Result<Vec<Ticket>> {
    let rdr = csv::Reader::from_path(csv_path).context("Failed to open ticket sheet")?;
    let tickets = read_tickets(rdr)?;

    debug!(path = %csv_path.display(), count = tickets.len(), "ticket sheet loaded");
    Ok(tickets)
}

/// Parse tickets from any CSV source
pub fn read_tickets<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Ticket>> {
    let mut tickets = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // Row 1 is the header
        let row_number = i + 2;
        let row: TicketRow =
            result.with_context(|| format!("Failed to read ticket row {}", row_number))?;

        let ticket: Ticket = row
            .numbers
            .parse()
            .with_context(|| format!("Invalid ticket on row {}", row_number))?;

        tickets.push(ticket);
    }

    Ok(tickets)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn test_read_tickets() {
        let data = "numbers\n\"1,2,3,4,5,6\"\n\"45, 44, 43, 42, 41, 40\"\n";
        let tickets = read_tickets(reader(data)).unwrap();

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[1].numbers(), vec![40, 41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let data = "numbers\n\"1,2,3,4,5,6\"\n\"1,1,2,3,4,5\"\n";
        let err = read_tickets(reader(data)).unwrap_err();

        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_load_tickets_from_file() {
        let path = std::env::temp_dir().join(format!("lotto-sheet-{}.csv", uuid::Uuid::new_v4()));
        fs::write(&path, "numbers\n\"10,20,30,40,41,42\"\n").unwrap();

        let tickets = load_tickets(&path).unwrap();
        assert_eq!(tickets.len(), 1);
        assert!(tickets[0].contains(30));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_sheet() {
        let err = load_tickets(Path::new("/nonexistent/tickets.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open ticket sheet"));
    }
}
