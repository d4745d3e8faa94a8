use crate::config::PriceLookup;
use crate::models::Transaction;
use crate::Error;
use chrono::NaiveDate;
use num::rational::BigRational;
use num::{BigInt, Integer, One, ToPrimitive};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A price declares how many reference units one unit of a commodity is worth
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub date: Option<NaiveDate>,
    pub rate: BigRational,
    /// The commodity the rate is quoted in, if the price file says so
    pub unit: Option<String>,
}

impl Price {
    pub fn new(date: Option<NaiveDate>, rate: BigRational, unit: Option<String>) -> Price {
        Price { date, rate, unit }
    }

    /// Whether the price can convert into `target`
    fn quotes(&self, target: &str) -> bool {
        match &self.unit {
            Some(unit) => unit == target,
            None => true,
        }
    }

    /// Undated prices are valid since forever
    fn valid_on(&self, date: NaiveDate) -> bool {
        match self.date {
            Some(d) => d <= date,
            None => true,
        }
    }
}

/// The price database: every price declared for every commodity, in declaration order
#[derive(Debug, Clone, Default)]
pub struct PriceDb {
    prices: HashMap<String, Vec<Price>>,
}

impl PriceDb {
    pub fn new() -> Self {
        PriceDb {
            prices: HashMap::new(),
        }
    }

    pub fn insert(&mut self, commodity: &str, price: Price) {
        self.prices
            .entry(commodity.to_string())
            .or_insert_with(Vec::new)
            .push(price);
    }

    /// The price in effect for a commodity when dates are ignored: the last one declared
    pub fn get(&self, commodity: &str) -> Option<&Price> {
        self.prices.get(commodity).and_then(|list| list.last())
    }

    /// Every price declared for a commodity, oldest declaration first
    pub fn history(&self, commodity: &str) -> &[Price] {
        match self.prices.get(commodity) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Number of commodities with at least one price
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Chooses the price for `commodity` into `target` following the lookup policy
    ///
    /// For dated lookups the latest price not after `date` wins; when two prices share
    /// that date, the one declared last wins.
    pub fn lookup(
        &self,
        commodity: &str,
        target: &str,
        policy: PriceLookup,
        date: NaiveDate,
    ) -> Option<&Price> {
        let candidates = self.history(commodity).iter().filter(|p| p.quotes(target));
        let cutoff = match policy {
            PriceLookup::Latest => return candidates.last(),
            PriceLookup::TransactionDate => date,
            PriceLookup::On(fixed) => fixed,
        };
        let mut best: Option<&Price> = None;
        for price in candidates.filter(|p| p.valid_on(cutoff)) {
            best = match best {
                Some(current) if current.date > price.date => Some(current),
                _ => Some(price),
            };
        }
        best
    }
}

/// Converts amounts into the reference unit
#[derive(Debug, Clone)]
pub struct Valuator<'a> {
    prices: &'a PriceDb,
    target: &'a str,
    policy: PriceLookup,
}

impl<'a> Valuator<'a> {
    pub fn new(prices: &'a PriceDb, target: &'a str, policy: PriceLookup) -> Self {
        Valuator {
            prices,
            target,
            policy,
        }
    }

    /// The amount of a transaction expressed in the reference unit
    pub fn value(&self, transaction: &Transaction) -> Result<i64, Error> {
        self.convert(
            transaction.amount,
            transaction.commodity.as_deref(),
            transaction.date,
        )
        .ok_or_else(|| Error::AmountOverflow {
            account: transaction.account.clone(),
        })
    }

    /// Converts `amount` of `commodity` into the reference unit
    ///
    /// Amounts without a commodity, in the reference unit already or in a commodity without a
    /// usable price are returned unchanged. Returns `None` only if the converted amount does
    /// not fit in an `i64`.
    pub fn convert(&self, amount: i64, commodity: Option<&str>, date: NaiveDate) -> Option<i64> {
        let commodity = match commodity {
            None => return Some(amount),
            Some(c) if c == self.target => return Some(amount),
            Some(c) => c,
        };
        match self.prices.lookup(commodity, self.target, self.policy, date) {
            None => Some(amount),
            Some(price) => {
                let exact = BigRational::from_integer(BigInt::from(amount)) * &price.rate;
                round_half_even(&exact).to_i64()
            }
        }
    }
}

/// Rounds to the nearest integer, ties go to the even neighbour
pub fn round_half_even(value: &BigRational) -> BigInt {
    let floor = value.floor();
    let fraction = value - &floor;
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    let floor = floor.to_integer();
    match fraction.cmp(&half) {
        Ordering::Less => floor,
        Ordering::Greater => floor + BigInt::one(),
        Ordering::Equal => {
            if floor.is_even() {
                floor
            } else {
                floor + BigInt::one()
            }
        }
    }
}
