use std::collections::HashMap;

/// Running totals per account, in reference-unit minor units
///
/// Accounts remember the order in which they were first seen so that reports are
/// deterministic without sorting.
#[derive(Debug, Clone, Default)]
pub struct Balance {
    order: Vec<String>,
    totals: HashMap<String, i64>,
}

impl Balance {
    pub fn new() -> Balance {
        Balance {
            order: Vec::new(),
            totals: HashMap::new(),
        }
    }

    /// Adds `amount` to the total of `account`, returns `None` on overflow
    pub fn add(&mut self, account: &str, amount: i64) -> Option<i64> {
        if !self.totals.contains_key(account) {
            self.order.push(account.to_string());
        }
        let total = self.totals.entry(account.to_string()).or_insert(0);
        *total = total.checked_add(amount)?;
        Some(*total)
    }

    pub fn get(&self, account: &str) -> Option<i64> {
        self.totals.get(account).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Accounts with their totals, first-seen order or sorted by name
    pub fn accounts(&self, sorted: bool) -> Vec<(&str, i64)> {
        let mut accounts: Vec<(&str, i64)> = self
            .order
            .iter()
            .map(|name| (name.as_str(), self.totals[name]))
            .collect();
        if sorted {
            accounts.sort_by(|a, b| a.0.cmp(b.0));
        }
        accounts
    }
}
