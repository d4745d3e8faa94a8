//! The reports
//!
//! Every report takes an already loaded [`Ledger`](crate::models::Ledger) and returns its
//! text. Nothing is printed here, so a report that fails half way leaves no output behind.
use std::convert::TryFrom;

use crate::config::{Config, Report};
use crate::models::Ledger;
use crate::Error;

pub mod balance;
pub mod print;
pub mod register;

/// Loads the files named in `config` and runs the selected report
pub fn execute(config: &Config) -> Result<String, Error> {
    let ledger = Ledger::try_from(config)?;
    run(config, &ledger)
}

/// Runs the selected report over an already loaded ledger
pub fn run(config: &Config, ledger: &Ledger) -> Result<String, Error> {
    let valuator = ledger.valuator(config);
    match config.report {
        Report::Balance => balance::execute(ledger, &valuator, config.sort),
        Report::Register => register::execute(ledger, &valuator),
        Report::Print => print::execute(ledger, &valuator),
    }
}
