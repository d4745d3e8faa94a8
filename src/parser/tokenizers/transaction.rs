use super::super::{GrammarParser, Rule};
use crate::config::ParseMode;
use crate::models::Transaction;
use crate::parser::utils::{describe, parse_date, parse_quantity};
use crate::parser::Tokenizer;
use crate::Error;
use chrono::NaiveDate;
use pest::Parser;

/// The part of a transaction shared by all its postings
#[derive(Debug, Clone)]
struct Header {
    date: NaiveDate,
    payee: String,
    note: String,
}

impl Tokenizer {
    /// Parses the journal, one transaction per posting, in file order
    ///
    /// A posting without a valid header before it is malformed, so a bad header line
    /// also takes its postings with it.
    pub fn transactions(&self, mode: ParseMode) -> Result<Vec<Transaction>, Error> {
        let mut transactions = Vec::new();
        let mut header: Option<Header> = None;
        for (number, line) in self.lines() {
            if line.starts_with(char::is_whitespace) {
                let parsed = match &header {
                    Some(header) => parse_posting(line.trim_start(), header),
                    None => Err("posting without a transaction header".to_string()),
                };
                match parsed {
                    Ok(transaction) => transactions.push(transaction),
                    Err(reason) => self.reject(mode, number, line, reason)?,
                }
            } else {
                match parse_header(line) {
                    Ok(parsed) => header = Some(parsed),
                    Err(reason) => {
                        header = None;
                        self.reject(mode, number, line, reason)?;
                    }
                }
            }
        }
        Ok(transactions)
    }
}

fn parse_header(line: &str) -> Result<Header, String> {
    let parsed = GrammarParser::parse(Rule::header, line).map_err(describe)?;
    let mut date = None;
    let mut payee = String::new();
    let mut note = String::new();
    for part in parsed.flat_map(|pair| pair.into_inner()) {
        match part.as_rule() {
            Rule::date => date = Some(parse_date(part)?),
            Rule::payee => payee = part.as_str().trim().to_string(),
            Rule::note => note = part.as_str().trim().to_string(),
            _ => {}
        }
    }
    match date {
        Some(date) => Ok(Header { date, payee, note }),
        None => Err("missing date".to_string()),
    }
}

fn parse_posting(line: &str, header: &Header) -> Result<Transaction, String> {
    let parsed = GrammarParser::parse(Rule::posting, line).map_err(describe)?;
    let mut account = String::new();
    let mut commodity = None;
    let mut amount = None;
    let mut note = String::new();
    for part in parsed.flat_map(|pair| pair.into_inner()) {
        match part.as_rule() {
            Rule::account => account = part.as_str().to_string(),
            Rule::commodity => commodity = Some(part.as_str().to_string()),
            Rule::quantity => amount = Some(parse_quantity(part.as_str())?),
            Rule::note => note = part.as_str().trim().to_string(),
            _ => {}
        }
    }
    if note.is_empty() {
        note = header.note.clone();
    }
    match amount {
        Some(amount) => Ok(Transaction {
            date: header.date,
            payee: header.payee.clone(),
            account,
            commodity,
            amount,
            note,
        }),
        None => Err("missing amount".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Transaction> {
        Tokenizer::from(content.to_string())
            .transactions(ParseMode::Strict)
            .unwrap()
    }

    #[test]
    fn header_and_postings() {
        let transactions = parse(
            "2024-01-01 Store ; groceries
    Expenses:Food        1000 EUR ; lunch
    Assets:Cash\t-1000
",
        );
        assert_eq!(transactions.len(), 2);
        let food = &transactions[0];
        assert_eq!(food.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(food.payee, "Store");
        assert_eq!(food.account, "Expenses:Food");
        assert_eq!(food.commodity.as_deref(), Some("EUR"));
        assert_eq!(food.amount, 1000);
        assert_eq!(food.note, "lunch");
        let cash = &transactions[1];
        assert_eq!(cash.account, "Assets:Cash");
        assert_eq!(cash.commodity, None);
        assert_eq!(cash.amount, -1000);
        assert_eq!(cash.note, "groceries");
    }

    #[test]
    fn status_and_slashes() {
        let transactions = parse("2024/02/29 * Rent\n  Expenses:Rent  500\n");
        assert_eq!(transactions[0].payee, "Rent");
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn accounts_with_spaces_and_prefix_commodities() {
        let transactions = parse(
            "2024-03-01
    Assets:Checking account   $-50
    Expenses:Eating out  EUR 25
",
        );
        assert_eq!(transactions[0].payee, "");
        assert_eq!(transactions[0].account, "Assets:Checking account");
        assert_eq!(transactions[0].commodity.as_deref(), Some("$"));
        assert_eq!(transactions[0].amount, -50);
        assert_eq!(transactions[1].account, "Expenses:Eating out");
        assert_eq!(transactions[1].commodity.as_deref(), Some("EUR"));
        assert_eq!(transactions[1].amount, 25);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let content = "2024-01-01 Store
    Expenses:Food 1000
    Expenses:Food  10.50
    Expenses:Food  10
2024-13-01 Bad date
    Expenses:Lost  1
2024-01-02 Good
    Expenses:Found  2
";
        let transactions = Tokenizer::from(content.to_string())
            .transactions(ParseMode::Lenient)
            .unwrap();
        let amounts: Vec<i64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![10, 2]);
    }

    #[test]
    fn strict_mode_fails() {
        let res = Tokenizer::from("    Orphan  10\n".to_string()).transactions(ParseMode::Strict);
        match res {
            Err(Error::MalformedRecord { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(reason, "posting without a transaction header");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn status_without_space_before_payee() {
        let transactions = parse("2024-01-01 *Store ; shop\n  Expenses:Food  5\n");
        assert_eq!(transactions[0].payee, "Store");
        assert_eq!(transactions[0].note, "shop");
        assert!(parse_header("2024-01-01Store").is_err());
    }

    #[test]
    fn postings_with_status_markers() {
        let transactions = parse(
            "2024-01-01 Store
    * Expenses:Food  1000
    ! Assets:Cash  -990
    *Assets:Bank  -10
",
        );
        let accounts: Vec<&str> = transactions.iter().map(|t| t.account.as_str()).collect();
        assert_eq!(accounts, vec!["Expenses:Food", "Assets:Cash", "Assets:Bank"]);
        let amounts: Vec<i64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1000, -990, -10]);
    }

    #[test]
    fn indented_hash_lines_are_malformed() {
        let content = "2024-01-01 Store
    Expenses:Food  1000
    # not a comment
    Assets:Cash  -1000
";
        let res = Tokenizer::from(content.to_string()).transactions(ParseMode::Strict);
        match res {
            Err(Error::MalformedRecord { line, content, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(content.trim(), "# not a comment");
            }
            other => panic!("unexpected {:?}", other),
        }

        let transactions = Tokenizer::from(content.to_string())
            .transactions(ParseMode::Lenient)
            .unwrap();
        let amounts: Vec<i64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1000, -1000]);
        assert!(parse_posting("#  Expenses:Food  10", &transactions_header()).is_err());
    }

    fn transactions_header() -> Header {
        Header {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            payee: "Store".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn mixed_separators() {
        assert!(parse_header("2024-01/01 Store").is_err());
    }
}
