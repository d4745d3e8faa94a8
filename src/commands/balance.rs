use crate::models::{Balance, Ledger, Valuator};
use crate::Error;

/// Balance report
///
/// One line per account with the sum of its converted amounts. Accounts are listed in the
/// order they first appear in the journal, or by name when `sort` is set.
pub fn execute(ledger: &Ledger, valuator: &Valuator, sort: bool) -> Result<String, Error> {
    let mut balances = Balance::new();
    for t in ledger.transactions.iter() {
        let amount = valuator.value(t)?;
        if balances.add(&t.account, amount).is_none() {
            return Err(Error::AmountOverflow {
                account: t.account.clone(),
            });
        }
    }

    let mut output = String::new();
    for (account, total) in balances.accounts(sort) {
        output.push_str(&format!("  {:<30} {:>10}\n", account, total));
    }
    Ok(output)
}
