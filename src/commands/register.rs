use crate::models::{Ledger, Valuator};
use crate::Error;

/// Register report
///
/// One line per transaction in journal order: date, payee, account, converted amount and note.
pub fn execute(ledger: &Ledger, valuator: &Valuator) -> Result<String, Error> {
    let mut output = String::new();
    for t in ledger.transactions.iter() {
        let amount = valuator.value(t)?;
        let line = format!(
            "{} {:<20} {:<30} {:>10} {}",
            t.date, t.payee, t.account, amount, t.note
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    Ok(output)
}
