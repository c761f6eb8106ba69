use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::values::Money;

/// League rules enforced by the market engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRules {
    /// Purchases a team may complete per transfer window
    #[serde(default = "default_max_transfers")]
    pub max_transfers_per_window: u8,
    /// Upper bound for the sum of one valuation request
    #[serde(default = "default_valuation_budget")]
    pub valuation_budget: Money,
    /// Players per valuation request
    #[serde(default = "default_max_valuation_entries")]
    pub max_valuation_entries: usize,
    /// Clause = value x multiplier
    #[serde(default = "default_clause_multiplier")]
    pub clause_multiplier: Decimal,
}

fn default_max_transfers() -> u8 {
    3
}

fn default_valuation_budget() -> Money {
    dec!(60)
}

fn default_max_valuation_entries() -> usize {
    3
}

fn default_clause_multiplier() -> Decimal {
    dec!(1.5)
}

impl Default for MarketRules {
    fn default() -> Self {
        Self {
            max_transfers_per_window: default_max_transfers(),
            valuation_budget: default_valuation_budget(),
            max_valuation_entries: default_max_valuation_entries(),
            clause_multiplier: default_clause_multiplier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = MarketRules::default();
        assert_eq!(rules.max_transfers_per_window, 3);
        assert_eq!(rules.valuation_budget, dec!(60));
        assert_eq!(rules.max_valuation_entries, 3);
        assert_eq!(rules.clause_multiplier, dec!(1.5));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules: MarketRules = serde_json::from_str(r#"{"max_transfers_per_window": 5}"#).unwrap();
        assert_eq!(rules.max_transfers_per_window, 5);
        assert_eq!(rules.valuation_budget, dec!(60));
    }
}
