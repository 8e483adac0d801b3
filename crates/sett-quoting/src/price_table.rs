use std::collections::HashMap;

use rust_decimal::Decimal;

type TokenId = String;

/// USD unit prices keyed by token address (case-insensitive).
#[derive(Clone, Default, Debug)]
pub struct PriceTable(HashMap<TokenId, Decimal>);

impl PriceTable {
    pub fn get(&self, token: &str) -> Option<Decimal> {
        self.0.get(&token.to_lowercase()).copied()
    }

    /// Negative prices are ignored and `None` is returned.
    pub fn insert(&mut self, token: &str, price: Decimal) -> Option<Decimal> {
        if price.is_sign_negative() {
            return None;
        }
        self.0.insert(token.to_lowercase(), price)
    }

    /// Values `amount` of `token` in USD. Unknown tokens are worth zero.
    /// Returns `None` only if the product overflows.
    pub fn usd_value(&self, token: &str, amount: Decimal) -> Option<Decimal> {
        let Some(price) = self.get(token) else {
            tracing::warn!(token, "No USD price for token, valuing at zero");
            return Some(Decimal::ZERO);
        };
        amount.checked_mul(price)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Utils implementation to easily spin up a PriceTable (in tests mainly).
impl From<Vec<(String, Decimal)>> for PriceTable {
    fn from(pairs: Vec<(String, Decimal)>) -> Self {
        let mut table = Self::default();
        for (token, price) in pairs {
            table.insert(&token, price);
        }
        table
    }
}
