//! This module contains auxiliary parsers
use super::Rule;
use chrono::NaiveDate;
use num::{BigInt, BigRational};
use pest::error::LineColLocation;
use pest::iterators::Pair;
use std::str::FromStr;

/// Parses a date, assumes `date` is a `Rule::date`
pub(crate) fn parse_date(date: Pair<Rule>) -> Result<NaiveDate, String> {
    let mut year = None;
    let mut month = None;
    let mut day = None;
    let mut separators = Vec::new();
    for part in date.into_inner() {
        match part.as_rule() {
            Rule::year => year = i32::from_str(part.as_str()).ok(),
            Rule::month => month = u32::from_str(part.as_str()).ok(),
            Rule::day => day = u32::from_str(part.as_str()).ok(),
            Rule::date_sep => separators.push(part.as_str()),
            _ => {}
        }
    }
    if separators.len() == 2 && separators[0] != separators[1] {
        return Err("wrong date separator".to_string());
    }
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => {
            NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("invalid date {}-{}-{}", y, m, d))
        }
        _ => Err("incomplete date".to_string()),
    }
}

/// Parses an unsigned decimal number exactly
pub(crate) fn parse_rational(number: &str) -> Result<BigRational, String> {
    let mut num = String::new();
    let mut den = "1".to_string();
    let mut decimal = false;
    for c in number.chars() {
        if c == '.' {
            decimal = true
        } else {
            num.push(c);
            if decimal {
                den.push('0')
            };
        }
    }
    match (BigInt::from_str(num.as_str()), BigInt::from_str(den.as_str())) {
        (Ok(n), Ok(d)) => Ok(BigRational::new(n, d)),
        _ => Err(format!("invalid number {}", number)),
    }
}

/// Parses an integer amount of minor units
pub(crate) fn parse_quantity(quantity: &str) -> Result<i64, String> {
    i64::from_str(quantity).map_err(|_| format!("amount out of range {}", quantity))
}

/// A short description of a grammar error, the line itself is reported separately
pub(crate) fn describe(err: pest::error::Error<Rule>) -> String {
    let column = match err.line_col {
        LineColLocation::Pos((_, c)) => c,
        LineColLocation::Span((_, c), _) => c,
    };
    format!("unexpected input at column {}", column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rationals() {
        assert_eq!(
            parse_rational("1.10").unwrap(),
            BigRational::new(BigInt::from(11), BigInt::from(10))
        );
        assert_eq!(
            parse_rational("3").unwrap(),
            BigRational::from_integer(BigInt::from(3))
        );
        assert_eq!(
            parse_rational("0.005").unwrap(),
            BigRational::new(BigInt::from(1), BigInt::from(200))
        );
    }

    #[test]
    fn quantities() {
        assert_eq!(parse_quantity("-250"), Ok(-250));
        assert_eq!(parse_quantity("+7"), Ok(7));
        assert!(parse_quantity("99999999999999999999").is_err());
    }
}
