//! Rules
//!
//! Predicates evaluated against a [`RuleScope`]. Cart rules read the cart in a
//! [`CartRuleScope`]; evaluated against any other scope they simply do not match.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    context::CheckoutContext,
};

pub mod config;
pub mod goods_count;
pub mod goods_price;
pub mod group;
pub mod operator;

pub use config::{RuleConfig, RuleConfigError};
pub use goods_count::GoodsCountRule;
pub use goods_price::GoodsPriceRule;
pub use group::{BoolOp, NotRule, RuleGroup};
pub use operator::{Operator, OperatorError};

/// Errors raised while evaluating a rule.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// The cart and the checkout context disagree on currency.
    #[error("Cart has currency {cart}, but checkout context has currency {context}")]
    CurrencyMismatch {
        /// Cart currency code
        cart: &'static str,
        /// Context currency code
        context: &'static str,
    },

    /// The cart totals could not be calculated.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Outcome of evaluating a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    matches: bool,
    messages: SmallVec<[String; 2]>,
}

impl MatchResult {
    /// A successful match.
    pub fn matched() -> Self {
        Self {
            matches: true,
            messages: SmallVec::new(),
        }
    }

    /// A failed match with a reason.
    pub fn not_matched(message: impl Into<String>) -> Self {
        let mut messages = SmallVec::new();
        messages.push(message.into());

        Self {
            matches: false,
            messages,
        }
    }

    /// Build a result from a boolean, attaching `message` only when it did not match.
    pub fn from_bool(matches: bool, message: impl FnOnce() -> String) -> Self {
        if matches {
            Self::matched()
        } else {
            Self::not_matched(message())
        }
    }

    /// Whether the rule matched
    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Reasons the rule did not match
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// A cart together with the checkout context it is evaluated in.
#[derive(Debug, Clone, Copy)]
pub struct CartRuleScope<'s, 'a> {
    cart: &'s Cart<'a>,
    context: &'s CheckoutContext,
}

impl<'s, 'a> CartRuleScope<'s, 'a> {
    /// Create a cart scope.
    pub fn new(cart: &'s Cart<'a>, context: &'s CheckoutContext) -> Self {
        Self { cart, context }
    }

    /// Cart under evaluation
    pub fn cart(&self) -> &'s Cart<'a> {
        self.cart
    }

    /// Checkout context
    pub fn context(&self) -> &'s CheckoutContext {
        self.context
    }

    /// Ensure the cart is priced in the context currency.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::CurrencyMismatch`] if the currencies differ.
    pub fn ensure_currency(&self) -> Result<(), RuleError> {
        if self.cart.currency() == self.context.currency() {
            Ok(())
        } else {
            Err(RuleError::CurrencyMismatch {
                cart: self.cart.currency().iso_alpha_code,
                context: self.context.currency().iso_alpha_code,
            })
        }
    }
}

/// Data a rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub enum RuleScope<'s, 'a> {
    /// A cart in a checkout context.
    Cart(CartRuleScope<'s, 'a>),

    /// A checkout context without a cart.
    Checkout(&'s CheckoutContext),
}

impl<'s, 'a> RuleScope<'s, 'a> {
    /// Convenience constructor for a cart scope.
    pub fn cart(cart: &'s Cart<'a>, context: &'s CheckoutContext) -> Self {
        Self::Cart(CartRuleScope::new(cart, context))
    }

    /// Checkout context of any scope
    pub fn context(&self) -> &'s CheckoutContext {
        match self {
            Self::Cart(scope) => scope.context(),
            Self::Checkout(context) => *context,
        }
    }

    /// The cart scope, if this is one.
    pub fn as_cart(&self) -> Option<&CartRuleScope<'s, 'a>> {
        match self {
            Self::Cart(scope) => Some(scope),
            Self::Checkout(_) => None,
        }
    }
}

/// A predicate over a [`RuleScope`].
pub trait Rule: fmt::Debug + Send + Sync {
    /// Short, stable rule name used in logs and messages.
    fn name(&self) -> &'static str;

    /// Evaluate the rule.
    ///
    /// # Errors
    ///
    /// Returns a [`RuleError`] if the scope data needed by the rule is inconsistent.
    fn evaluate(&self, scope: &RuleScope<'_, '_>) -> Result<MatchResult, RuleError>;
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{EUR, GBP};

    use super::*;

    #[test]
    fn from_bool_attaches_message_on_mismatch_only() {
        let matched = MatchResult::from_bool(true, || "unused".to_string());
        let failed = MatchResult::from_bool(false, || "too cheap".to_string());

        assert!(matched.matches());
        assert!(matched.messages().is_empty());
        assert!(!failed.matches());
        assert_eq!(failed.messages(), ["too cheap".to_string()]);
    }

    #[test]
    fn cart_scope_currency_mismatch_errors() {
        let cart = Cart::new("test", "test", GBP);
        let context = CheckoutContext::new(EUR);

        assert_eq!(
            CartRuleScope::new(&cart, &context).ensure_currency(),
            Err(RuleError::CurrencyMismatch {
                cart: "GBP",
                context: "EUR",
            })
        );
    }

    #[test]
    fn checkout_scope_has_no_cart() {
        let context = CheckoutContext::new(GBP);
        let scope = RuleScope::Checkout(&context);

        assert!(scope.as_cart().is_none());
        assert_eq!(scope.context().currency(), GBP);
    }
}
