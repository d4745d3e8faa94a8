use super::super::{GrammarParser, Rule};
use crate::config::ParseMode;
use crate::models::{Price, PriceDb};
use crate::parser::utils::{describe, parse_date, parse_rational};
use crate::parser::Tokenizer;
use crate::Error;
use pest::Parser;

impl Tokenizer {
    /// Parses the price database
    ///
    /// Prices are kept in declaration order, so a commodity declared twice ends up priced by
    /// its last line unless a dated lookup is requested.
    pub fn prices(&self, mode: ParseMode) -> Result<PriceDb, Error> {
        let mut prices = PriceDb::new();
        for (number, line) in self.lines() {
            match parse_price(line.trim_start()) {
                Ok((commodity, price)) => prices.insert(&commodity, price),
                Err(reason) => self.reject(mode, number, line, reason)?,
            }
        }
        Ok(prices)
    }
}

fn parse_price(line: &str) -> Result<(String, Price), String> {
    let parsed = GrammarParser::parse(Rule::price, line).map_err(describe)?;
    let mut date = None;
    let mut commodities = Vec::new();
    let mut rate = None;
    for element in parsed.flat_map(|pair| pair.into_inner()) {
        match element.as_rule() {
            Rule::price_directive | Rule::price_pair => {
                for part in element.into_inner() {
                    match part.as_rule() {
                        Rule::date => date = Some(parse_date(part)?),
                        Rule::commodity => commodities.push(part.as_str().to_string()),
                        Rule::rate => rate = Some(parse_rational(part.as_str())?),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    let mut commodities = commodities.into_iter();
    match (commodities.next(), rate) {
        (Some(commodity), Some(rate)) => Ok((commodity, Price::new(date, rate, commodities.next()))),
        _ => Err("expected a commodity and a rate".to_string()),
    }
}
