//! Plain configuration handed from the command line layer to the reports
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::Error;

/// The report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Balance,
    Register,
    Print,
}

impl FromStr for Report {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balance" | "bal" => Ok(Report::Balance),
            "register" | "reg" => Ok(Report::Register),
            "print" => Ok(Report::Print),
            x => Err(Error::UnknownCommand(x.to_string())),
        }
    }
}

/// What to do with lines that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip the line and log a warning
    Lenient,
    /// Fail on the first malformed line
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::Lenient
    }
}

/// Which price entry to use when a commodity has several
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLookup {
    /// The last declared price, regardless of dates
    Latest,
    /// The latest price not after the date of each transaction
    TransactionDate,
    /// The latest price not after a fixed date
    On(NaiveDate),
}

impl Default for PriceLookup {
    fn default() -> Self {
        PriceLookup::Latest
    }
}

pub const DEFAULT_REFERENCE_UNIT: &str = "USD";

#[derive(Debug, Clone)]
pub struct Config {
    pub report: Report,
    pub ledger_path: PathBuf,
    /// `None` means no price database at all
    pub price_db_path: Option<PathBuf>,
    /// Sort accounts by name, only used by the balance report
    pub sort: bool,
    pub parse_mode: ParseMode,
    pub reference_unit: String,
    pub price_lookup: PriceLookup,
}

impl Config {
    pub fn new(report: Report, ledger_path: PathBuf) -> Self {
        Config {
            report,
            ledger_path,
            price_db_path: None,
            sort: false,
            parse_mode: ParseMode::default(),
            reference_unit: DEFAULT_REFERENCE_UNIT.to_string(),
            price_lookup: PriceLookup::default(),
        }
    }
}
