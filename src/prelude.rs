//! Cart rules prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    context::{CheckoutContext, TaxState},
    fixtures::{FixtureError, cart_from_yaml_str, load_cart},
    items::LineItem,
    prices::CalculatedPrice,
    rules::{
        BoolOp, CartRuleScope, GoodsCountRule, GoodsPriceRule, MatchResult, NotRule, Operator,
        Rule, RuleConfig, RuleConfigError, RuleError, RuleGroup, RuleScope,
    },
    tax::{CalculatedTax, CalculatedTaxCollection, TaxRule, TaxRuleCollection},
};
