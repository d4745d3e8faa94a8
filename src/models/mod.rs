use std::convert::TryFrom;

pub use balance::Balance;
pub use price::{round_half_even, Price, PriceDb, Valuator};
pub use transaction::Transaction;

use crate::config::Config;
use crate::error::FileKind;
use crate::parser::Tokenizer;
use crate::Error;
use log::{debug, warn};

mod balance;
mod price;
mod transaction;

/// Everything a report needs: the postings of the journal and the price database
///
/// Both are parsed once and only read afterwards.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub prices: PriceDb,
}

impl Ledger {
    pub fn valuator<'a>(&'a self, config: &'a Config) -> Valuator<'a> {
        Valuator::new(
            &self.prices,
            config.reference_unit.as_str(),
            config.price_lookup,
        )
    }

    #[cfg(test)]
    pub(crate) fn from_strings(journal: &str, prices: &str) -> Ledger {
        use crate::config::ParseMode;
        Ledger {
            transactions: Tokenizer::from(journal.to_string())
                .transactions(ParseMode::Strict)
                .unwrap(),
            prices: Tokenizer::from(prices.to_string())
                .prices(ParseMode::Strict)
                .unwrap(),
        }
    }
}

impl<'a> TryFrom<&'a Config> for Ledger {
    type Error = Error;

    /// Reads the journal and the price database named in the configuration
    ///
    /// A journal that cannot be read is an error. A price database that cannot be read is
    /// only a warning: reports then show amounts unconverted.
    fn try_from(config: &'a Config) -> Result<Self, Self::Error> {
        let tokenizer = Tokenizer::from_file(&config.ledger_path, FileKind::Journal)?;
        let transactions = tokenizer.transactions(config.parse_mode)?;

        let prices = match &config.price_db_path {
            None => PriceDb::new(),
            Some(path) => match Tokenizer::from_file(path, FileKind::PriceDb) {
                Ok(tokenizer) => tokenizer.prices(config.parse_mode)?,
                Err(e) => {
                    warn!("{}", e);
                    PriceDb::new()
                }
            },
        };
        debug!(
            "loaded {} postings and prices for {} commodities",
            transactions.len(),
            prices.len()
        );

        Ok(Ledger {
            transactions,
            prices,
        })
    }
}
