//! Line Items

use crate::prices::CalculatedPrice;

/// A single entry in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    key: String,
    kind: String,
    quantity: u32,
    good: bool,
    price: Option<CalculatedPrice<'a>>,
}

impl<'a> LineItem<'a> {
    /// Creates a new unpriced line item with a quantity of one.
    ///
    /// Line items are goods unless marked otherwise with [`LineItem::with_good`].
    pub fn new(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
            quantity: 1,
            good: true,
            price: None,
        }
    }

    /// Sets the calculated price.
    #[must_use]
    pub fn with_price(mut self, price: CalculatedPrice<'a>) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Marks whether the item is a good (merchandise) or not (e.g. a voucher or fee).
    #[must_use]
    pub fn with_good(mut self, good: bool) -> Self {
        self.good = good;
        self
    }

    /// Replaces the calculated price.
    pub fn set_price(&mut self, price: CalculatedPrice<'a>) {
        self.price = Some(price);
    }

    /// Key identifying the item within its cart
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Item type label
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the item counts as a good
    pub fn is_good(&self) -> bool {
        self.good
    }

    /// Calculated price, if the item has been priced
    pub fn price(&self) -> Option<&CalculatedPrice<'a>> {
        self.price.as_ref()
    }
}
