use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lotto::{format_ratio, load_tickets, GameConfig, Ticket, TicketBatch};

const USAGE: &str = "usage: lotto --price <won> --winning <n,n,n,n,n,n> \
[--ticket <n,n,n,n,n,n>]... [--sheet <tickets.csv>] [--config <game.json>] [--json]";

#[derive(Debug, Default)]
struct Args {
    price: Option<i64>,
    winning: Option<String>,
    tickets: Vec<String>,
    sheet: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("lotto {}\n{}", lotto::VERSION, USAGE);
        return Ok(());
    }

    run(args)
}

fn parse_args<I: Iterator<Item = String>>(mut raw: I) -> Result<Args> {
    let mut args = Args::default();

    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--price" => {
                let value = raw.next().context("--price needs a value")?;
                args.price = Some(value.trim().parse().with_context(|| {
                    format!("Price must be a whole number, got '{}'", value)
                })?);
            }
            "--winning" => args.winning = Some(raw.next().context("--winning needs a value")?),
            "--ticket" => args.tickets.push(raw.next().context("--ticket needs a value")?),
            "--sheet" => args.sheet = Some(raw.next().context("--sheet needs a path")?.into()),
            "--config" => args.config = Some(raw.next().context("--config needs a path")?.into()),
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            other => bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(args)
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let price = args.price.context(USAGE)?;
    let winning: Ticket = args
        .winning
        .as_deref()
        .context(USAGE)?
        .parse()
        .context("Invalid winning ticket")?;

    // Manual tickets: command line first, then the sheet
    let mut manual = Vec::new();
    for line in &args.tickets {
        let ticket: Ticket = line
            .parse()
            .with_context(|| format!("Invalid ticket '{}'", line))?;
        manual.push(ticket);
    }
    if let Some(sheet) = &args.sheet {
        manual.extend(load_tickets(sheet)?);
    }

    let mut rng = rand::thread_rng();
    let manual_count = manual.len();
    let mut batch = TicketBatch::purchase(&config, price, manual, &mut rng)?;
    batch.set_winning_ticket(winning);

    let report = batch.report()?;

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "Bought {} manual and {} automatic tickets",
        manual_count,
        batch.tickets().len() - manual_count
    );
    for ticket in batch.tickets() {
        println!("{}", ticket);
    }

    println!("\nWinning statistics");
    println!("------------------");
    for line in report.lines() {
        println!("{}", line);
    }

    print!("Payoff ratio: {}", format_ratio(report.payoff_ratio));
    if report.is_loss() {
        println!(" (below 1 means a loss)");
    } else {
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&[
            "--price",
            "14000",
            "--winning",
            "1,2,3,4,5,6",
            "--ticket",
            "7,8,9,10,11,12",
            "--ticket",
            "1,2,3,4,5,6",
            "--json",
        ])
        .unwrap();

        assert_eq!(parsed.price, Some(14000));
        assert_eq!(parsed.winning.as_deref(), Some("1,2,3,4,5,6"));
        assert_eq!(parsed.tickets.len(), 2);
        assert!(parsed.json);
        assert!(!parsed.help);
        assert!(parsed.sheet.is_none());
    }

    #[test]
    fn test_parse_args_help() {
        assert!(args(&["--help"]).unwrap().help);
        assert!(args(&["--price", "5000", "-h"]).unwrap().help);
    }

    #[test]
    fn test_parse_args_rejects_unknown_and_bad_price() {
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["--price", "lots"]).is_err());
        assert!(args(&["--price"]).is_err());
    }

    #[test]
    fn test_run_requires_price() {
        let parsed = args(&["--winning", "1,2,3,4,5,6"]).unwrap();
        assert!(run(parsed).is_err());
    }

    #[test]
    fn test_run_rejects_low_price() {
        let parsed = args(&["--price", "1000", "--winning", "1,2,3,4,5,6"]).unwrap();
        let err = run(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid purchase"));
    }

    #[test]
    fn test_run_rejects_price_beyond_ticket_limit() {
        let parsed = args(&[
            "--price",
            "9223372036854775807",
            "--winning",
            "1,2,3,4,5,6",
        ])
        .unwrap();
        let err = run(parsed).unwrap_err();
        assert!(err.to_string().contains("exceed the limit"));
    }
}
