use crate::models::{Ledger, Valuator};
use crate::Error;

/// Print report: the register without the account column
pub fn execute(ledger: &Ledger, valuator: &Valuator) -> Result<String, Error> {
    let mut output = String::new();
    for t in ledger.transactions.iter() {
        let amount = valuator.value(t)?;
        let line = format!("{} {:<20} {:>10} {}", t.date, t.payee, amount, t.note);
        output.push_str(line.trim_end());
        output.push('\n');
    }
    Ok(output)
}
