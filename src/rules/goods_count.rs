//! Goods Count Rule

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{MatchResult, Operator, Rule, RuleError, RuleScope};

/// Matches when the number of goods in a cart, counting quantities, compares to `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoodsCountRule {
    /// Threshold
    pub count: u64,

    /// Comparison between the goods count (left) and `count` (right)
    pub operator: Operator,
}

impl GoodsCountRule {
    /// Create a goods count rule.
    pub fn new(count: u64, operator: Operator) -> Self {
        Self { count, operator }
    }
}

impl Rule for GoodsCountRule {
    fn name(&self) -> &'static str {
        "goods_count"
    }

    fn evaluate(&self, scope: &RuleScope<'_, '_>) -> Result<MatchResult, RuleError> {
        let Some(scope) = scope.as_cart() else {
            return Ok(MatchResult::not_matched("goods count requires a cart scope"));
        };

        scope.ensure_currency()?;

        let goods_count = scope.cart().goods_count();
        let matches = self.operator.compare(&goods_count, &self.count);

        debug!(
            rule = self.name(),
            cart = scope.cart().name(),
            goods_count,
            operator = %self.operator,
            count = self.count,
            matches,
            "evaluated rule"
        );

        Ok(MatchResult::from_bool(matches, || {
            format!(
                "goods count {goods_count} is not {} {}",
                self.operator, self.count
            )
        }))
    }
}
