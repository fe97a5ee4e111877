//! Cart

use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;
use tracing::trace;

use crate::{items::LineItem, pricing::total_price};

/// Errors related to cart construction or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A line item with the same key is already in the cart.
    #[error("Line item {0} is already in the cart")]
    DuplicateLineItem(String),

    /// A line item has a quantity of zero.
    #[error("Line item {0} has a quantity of zero")]
    InvalidQuantity(String),

    /// A line item's currency differs from the cart currency (key, item currency, cart currency).
    #[error("Line item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A good has no calculated price, so the goods price cannot be determined.
    #[error("Line item {0} has no calculated price")]
    UnpricedLineItem(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    name: String,
    token: String,
    currency: &'static Currency,
    line_items: Vec<LineItem<'a>>,
    index: FxHashMap<String, usize>,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart.
    pub fn new(
        name: impl Into<String>,
        token: impl Into<String>,
        currency: &'static Currency,
    ) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            currency,
            line_items: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add a line item to the cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::DuplicateLineItem`]: the key is already in the cart.
    /// - [`CartError::InvalidQuantity`]: the item has a quantity of zero.
    /// - [`CartError::CurrencyMismatch`]: the item is priced in another currency.
    pub fn add(&mut self, item: LineItem<'a>) -> Result<&mut Self, CartError> {
        if self.index.contains_key(item.key()) {
            return Err(CartError::DuplicateLineItem(item.key().to_string()));
        }

        if item.quantity() == 0 {
            return Err(CartError::InvalidQuantity(item.key().to_string()));
        }

        if let Some(price) = item.price() {
            let item_currency = price.currency();

            if item_currency != self.currency {
                return Err(CartError::CurrencyMismatch(
                    item.key().to_string(),
                    item_currency.iso_alpha_code,
                    self.currency.iso_alpha_code,
                ));
            }
        }

        trace!(cart = %self.name, key = item.key(), "adding line item");

        self.index.insert(item.key().to_string(), self.line_items.len());
        self.line_items.push(item);

        Ok(self)
    }

    /// Remove a line item by key, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Option<LineItem<'a>> {
        let position = self.index.remove(key)?;
        let item = self.line_items.remove(position);

        // Positions after the removed item shift down by one.
        for idx in self.index.values_mut() {
            if *idx > position {
                *idx -= 1;
            }
        }

        Some(item)
    }

    /// Look up a line item by key.
    pub fn get(&self, key: &str) -> Option<&LineItem<'a>> {
        self.index
            .get(key)
            .and_then(|position| self.line_items.get(*position))
    }

    /// All line items, in insertion order.
    pub fn line_items(&self) -> &[LineItem<'a>] {
        &self.line_items
    }

    /// Line items that count as goods, in insertion order.
    pub fn goods(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.line_items.iter().filter(|item| item.is_good())
    }

    /// Sum of the total prices of all goods. An empty cart has a goods price of zero.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnpricedLineItem`]: a good has no calculated price.
    /// - [`CartError::Money`]: money arithmetic failed.
    pub fn goods_price(&self) -> Result<Money<'a, Currency>, CartError> {
        let prices = self
            .goods()
            .map(|item| {
                item.price()
                    .ok_or_else(|| CartError::UnpricedLineItem(item.key().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(total_price(prices, self.currency)?)
    }

    /// Number of goods in the cart, counting quantities.
    pub fn goods_count(&self) -> u64 {
        self.goods().map(|item| u64::from(item.quantity())).sum()
    }

    /// Cart name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cart token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Get the number of line items in the cart.
    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
