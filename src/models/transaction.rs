use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single posting of the journal
///
/// Every posting line of the journal becomes one transaction: it carries the date and payee
/// of the header it belongs to, one account and one amount.
///
/// The amount is an integer number of minor units (cents). When `commodity` is `None` the
/// amount is already in the reference unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub payee: String,
    pub account: String,
    pub commodity: Option<String>,
    pub amount: i64,
    pub note: String,
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}  {}  {}", self.date, self.payee, self.account, self.amount)?;
        if let Some(commodity) = &self.commodity {
            write!(f, " {}", commodity)?;
        }
        if !self.note.is_empty() {
            write!(f, " ; {}", self.note)?;
        }
        Ok(())
    }
}
