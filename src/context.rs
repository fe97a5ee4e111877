//! Checkout Context

use std::fmt;

use clap::ValueEnum;
use rusty_money::iso::Currency;

/// How prices in the checkout are presented with respect to tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TaxState {
    /// Prices include tax.
    #[default]
    Gross,

    /// Prices exclude tax.
    Net,

    /// No tax is charged.
    TaxFree,
}

impl fmt::Display for TaxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gross => "gross",
            Self::Net => "net",
            Self::TaxFree => "tax-free",
        })
    }
}

/// Checkout context a cart is evaluated in.
#[derive(Debug, Clone)]
pub struct CheckoutContext {
    currency: &'static Currency,
    tax_state: TaxState,
}

impl CheckoutContext {
    /// Create a gross-priced context in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            tax_state: TaxState::default(),
        }
    }

    /// Set the tax state.
    #[must_use]
    pub fn with_tax_state(mut self, tax_state: TaxState) -> Self {
        self.tax_state = tax_state;
        self
    }

    /// Context currency
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Tax state
    pub fn tax_state(&self) -> TaxState {
        self.tax_state
    }
}
