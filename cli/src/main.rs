//! Command-line front-end for the allocation engine
//!
//! Reads a `bidder,quote` CSV, runs the selected weighting scheme, and
//! writes the result table as CSV to stdout or a file:
//!
//! ```text
//! tender-alloc --scheme proportional --capacity 10000 quotes.csv
//! tender-alloc --scheme rank --capacity 10000 --region en_IN quotes.csv -o result.csv
//! ```

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tender_allocation_core_rs::{
    allocate_by_rank, allocate_proportional, report_to_csv, sort_by_quote, BidQuote,
    CurrencyFormatter,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    /// Capacity proportional to quote value
    Proportional,
    /// Descending-rank weighting with contract values
    Rank,
}

#[derive(Parser, Debug)]
#[command(name = "tender-alloc", about = "Tender capacity allocation calculator")]
struct Args {
    /// Input CSV of bidder,quote rows (header row optional)
    input: PathBuf,

    /// Weighting scheme
    #[arg(long, value_enum)]
    scheme: SchemeArg,

    /// Total capacity to allocate (e.g. MW)
    #[arg(long)]
    capacity: f64,

    /// Region for currency formatting (rank scheme)
    #[arg(long, default_value = "en_IN")]
    region: String,

    /// Write the result CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&args.input)?;
    let mut rows = parse_quotes_csv(&text)?;

    let report = match args.scheme {
        SchemeArg::Proportional => allocate_proportional(&rows, args.capacity)?,
        SchemeArg::Rank => {
            let formatter = CurrencyFormatter::for_region(&args.region)?;
            sort_by_quote(&mut rows);
            allocate_by_rank(&rows, args.capacity, &formatter)?
        }
    };

    let csv = report_to_csv(&report);
    match &args.output {
        Some(path) => fs::write(path, csv)?,
        None => print!("{}", csv),
    }
    Ok(())
}

/// Parse `bidder,quote` lines. A first line whose quote column is not
/// numeric is treated as a header and skipped.
fn parse_quotes_csv(text: &str) -> Result<Vec<BidQuote>, Box<dyn Error>> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (bidder, quote_text) = line
            .rsplit_once(',')
            .ok_or_else(|| format!("line {}: expected 'bidder,quote'", lineno + 1))?;
        match quote_text.trim().parse::<f64>() {
            Ok(quote) => rows.push(BidQuote::new(unquote(bidder.trim()), quote)),
            Err(_) if lineno == 0 => continue, // header row
            Err(_) => {
                return Err(format!(
                    "line {}: quote '{}' is not numeric",
                    lineno + 1,
                    quote_text.trim()
                )
                .into())
            }
        }
    }
    Ok(rows)
}

/// Strip RFC 4180 quoting from a bidder label.
fn unquote(field: &str) -> String {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].replace("\"\"", "\"")
    } else {
        field.to_string()
    }
}
