//! Document the command line interface
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::clap::ErrorKind;
use structopt::StructOpt;

use crate::commands;
use crate::config::{Config, ParseMode, PriceLookup, Report, DEFAULT_REFERENCE_UNIT};
use crate::Error;
use chrono::NaiveDate;

#[derive(Debug, StructOpt)]
#[structopt(
    about = "Balance, register and print reports over a plain text ledger",
    version = env!("CARGO_PKG_VERSION"),
    name = "ledgercat"
)]
struct Opt {
    /// The report: balance (bal), register (reg) or print
    #[structopt(name = "COMMAND")]
    command: Option<String>,

    #[structopt(flatten)]
    options: CommonOpts,
}

/// Command line options
#[derive(Debug, StructOpt, Clone)]
pub struct CommonOpts {
    /// Journal file [default: ~/.ledger, then ./ledger.dat]
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    pub input_file: Option<PathBuf>,

    /// Price database [default: ~/.pricedb]
    #[structopt(long = "price-db", parse(from_os_str))]
    pub price_db: Option<PathBuf>,

    /// Sort the accounts of the balance report by name
    #[structopt(long = "sort")]
    pub sort: bool,

    /// Malformed lines are errors instead of warnings
    #[structopt(long = "strict")]
    pub strict: bool,

    /// Commodity every amount is converted to
    #[structopt(long = "reference-unit", default_value = DEFAULT_REFERENCE_UNIT)]
    pub reference_unit: String,

    /// Convert with the price in effect at the date of each transaction
    #[structopt(long = "historical", conflicts_with = "price-date")]
    pub historical: bool,

    /// Convert with the price in effect at this date
    #[structopt(long = "price-date", parse(try_from_str = date_parser))]
    pub price_date: Option<NaiveDate>,
}

const LEDGER_PATH_UNDER_HOME: &str = "~/.ledger";
const LEDGER_PATH: &str = "ledger.dat";
const PRICE_DB_PATH_UNDER_HOME: &str = "~/.pricedb";

impl CommonOpts {
    /// Builds the configuration for `report`, filling in the default paths
    pub fn to_config(&self, report: Report) -> Config {
        let ledger_path = match &self.input_file {
            Some(file) => file.clone(),
            None => default_ledger_path(),
        };
        // An explicit price database that is missing gets a warning, the default one does not
        let price_db_path = match &self.price_db {
            Some(file) => Some(file.clone()),
            None => Some(PathBuf::from(
                shellexpand::tilde(PRICE_DB_PATH_UNDER_HOME).to_string(),
            ))
            .filter(|path| path.exists()),
        };
        let price_lookup = match (self.historical, self.price_date) {
            (_, Some(date)) => PriceLookup::On(date),
            (true, None) => PriceLookup::TransactionDate,
            (false, None) => PriceLookup::Latest,
        };
        Config {
            report,
            ledger_path,
            price_db_path,
            sort: self.sort,
            parse_mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            reference_unit: self.reference_unit.clone(),
            price_lookup,
        }
    }
}

fn default_ledger_path() -> PathBuf {
    let under_home = PathBuf::from(shellexpand::tilde(LEDGER_PATH_UNDER_HOME).to_string());
    if under_home.exists() {
        under_home
    } else {
        PathBuf::from(LEDGER_PATH)
    }
}

/// Turns the argument vector into a configuration
///
/// Returns `None` when there is nothing else to do, i.e. help or version were requested.
fn build_config(args: Vec<String>) -> Result<Option<Config>, Error> {
    let opt = match Opt::from_iter_safe(args.iter()) {
        Ok(opt) => opt,
        Err(e) => {
            return match e.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                    println!("{}", e.message);
                    Ok(None)
                }
                ErrorKind::UnknownArgument => {
                    let argument = e
                        .info
                        .as_ref()
                        .and_then(|info| info.first())
                        .cloned()
                        .unwrap_or_default();
                    Err(Error::UnrecognizedArgument(argument))
                }
                _ => Err(Error::InvalidOption(e.message)),
            }
        }
    };
    let report = match &opt.command {
        Some(command) => Report::from_str(command)?,
        None => return Err(Error::NoCommand),
    };
    Ok(Some(opt.options.to_config(report)))
}

/// Entry point for the command line app
///
/// Parses the arguments, runs the report and prints it. The report is only printed once it
/// has been completely generated.
pub fn run_app(args: Vec<String>) -> Result<(), Error> {
    if let Some(config) = build_config(args)? {
        let output = commands::execute(&config)?;
        print!("{}", output);
    }
    Ok(())
}

/// A parser for date expressions
pub fn date_parser(date: &str) -> Result<NaiveDate, Error> {
    lazy_static! {
        static ref RE_YEAR: Regex = Regex::new(r"^(\d{4})$").unwrap();
        static ref RE_MONTH: Regex = Regex::new(r"^(\d{4})[/-](\d\d?)$").unwrap();
        static ref RE_DATE: Regex = Regex::new(r"^(\d{4})[/-](\d\d?)[/-](\d\d?)$").unwrap();
    }
    let invalid = || Error::InvalidDate(date.to_string());
    let (year, month, day) = if let Some(captures) = RE_DATE.captures(date) {
        (captures[1].to_string(), captures[2].to_string(), captures[3].to_string())
    } else if let Some(captures) = RE_MONTH.captures(date) {
        (captures[1].to_string(), captures[2].to_string(), "1".to_string())
    } else if let Some(captures) = RE_YEAR.captures(date) {
        (captures[1].to_string(), "1".to_string(), "1".to_string())
    } else {
        return Err(invalid());
    };
    NaiveDate::from_ymd_opt(
        year.parse::<i32>().map_err(|_| invalid())?,
        month.parse::<u32>().map_err(|_| invalid())?,
        day.parse::<u32>().map_err(|_| invalid())?,
    )
    .ok_or_else(invalid)
}
