//! Balance predicates
//!
//! Pure comparisons of a balance against a threshold. Equality always
//! satisfies the predicate.

use crate::models::Money;

/// True when `balance` covers `amount`
pub fn has_sufficient_balance(balance: Money, amount: Money) -> bool {
    balance >= amount
}

/// True when `balance` is at or above `minimum`
pub fn is_balance_above_minimum(balance: Money, minimum: Money) -> bool {
    balance >= minimum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_sufficient_balance() {
        assert!(has_sufficient_balance(Money::from_units(100), Money::from_units(50)));
        assert!(!has_sufficient_balance(Money::from_units(100), Money::from_units(150)));
    }

    #[test]
    fn test_is_balance_above_minimum() {
        assert!(is_balance_above_minimum(Money::from_units(100), Money::from_units(50)));
        assert!(!is_balance_above_minimum(Money::from_units(100), Money::from_units(150)));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        for balance in [
            Money::zero(),
            Money::from_units(1000),
            Money::from_cents(-250),
            Money::from_cents(1),
        ] {
            assert!(has_sufficient_balance(balance, balance));
            assert!(is_balance_above_minimum(balance, balance));
        }
    }
}
