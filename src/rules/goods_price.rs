//! Goods Price Rule

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{MatchResult, Operator, Rule, RuleError, RuleScope};

/// Matches when the total price of the goods in a cart compares to `amount` under `operator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoodsPriceRule {
    /// Threshold, in major units of the cart currency
    pub amount: Decimal,

    /// Comparison between the goods price (left) and `amount` (right)
    pub operator: Operator,
}

impl GoodsPriceRule {
    /// Create a goods price rule.
    pub fn new(amount: impl Into<Decimal>, operator: Operator) -> Self {
        Self {
            amount: amount.into(),
            operator,
        }
    }
}

impl Rule for GoodsPriceRule {
    fn name(&self) -> &'static str {
        "goods_price"
    }

    fn evaluate(&self, scope: &RuleScope<'_, '_>) -> Result<MatchResult, RuleError> {
        let Some(scope) = scope.as_cart() else {
            return Ok(MatchResult::not_matched("goods price requires a cart scope"));
        };

        scope.ensure_currency()?;

        let goods_price = scope.cart().goods_price()?;
        let matches = self.operator.compare(goods_price.amount(), &self.amount);

        debug!(
            rule = self.name(),
            cart = scope.cart().name(),
            goods_price = %goods_price.amount(),
            operator = %self.operator,
            amount = %self.amount,
            matches,
            "evaluated rule"
        );

        Ok(MatchResult::from_bool(matches, || {
            format!(
                "goods price {} is not {} {}",
                goods_price.amount(),
                self.operator,
                self.amount
            )
        }))
    }
}
