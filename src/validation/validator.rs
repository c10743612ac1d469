//! Account validator factory
//!
//! Builds reusable `Money -> bool` predicates closed over a threshold, so
//! withdraw and transfer callers can hand a check to the service without
//! repeating the threshold at every call site.

use crate::models::Money;

use super::predicates::{has_sufficient_balance, is_balance_above_minimum};

/// Factory for balance predicates
pub struct AccountValidator;

impl AccountValidator {
    /// Predicate accepting balances at or above `minimum_balance`
    pub fn minimum_balance(minimum_balance: Money) -> impl Fn(Money) -> bool + Copy {
        move |balance| is_balance_above_minimum(balance, minimum_balance)
    }

    /// Predicate accepting balances that cover `requested_amount`
    pub fn requested_amount(requested_amount: Money) -> impl Fn(Money) -> bool + Copy {
        move |balance| has_sufficient_balance(balance, requested_amount)
    }

    /// Predicate for withdrawing `amount` while keeping `minimum_balance` behind
    ///
    /// Rejects non-positive amounts outright.
    pub fn withdrawal(amount: Money, minimum_balance: Money) -> impl Fn(Money) -> bool + Copy {
        let covers = Self::requested_amount(amount);
        let keeps_minimum = Self::minimum_balance(minimum_balance);
        move |balance: Money| {
            amount.is_positive()
                && covers(balance)
                && balance.checked_sub(amount).is_some_and(keeps_minimum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_balance_validator() {
        // (minimum, balance, expected)
        let cases = [
            (1000, 500, false),
            (1000, 1000, true),
            (1000, 1500, true),
            (1000, 2000, true),
            (250, 1000, true),
        ];

        for (minimum, balance, expected) in cases {
            let validator = AccountValidator::minimum_balance(Money::from_units(minimum));
            assert_eq!(
                validator(Money::from_units(balance)),
                expected,
                "minimum {} balance {}",
                minimum,
                balance
            );
        }
    }

    #[test]
    fn test_minimum_balance_boundary() {
        let minimum = Money::from_cents(50075);
        let validator = AccountValidator::minimum_balance(minimum);

        assert!(validator(minimum));
        assert!(!validator(Money::from_cents(50074)));
        assert!(!validator(Money::parse("500.7499").unwrap()));
    }

    #[test]
    fn test_requested_amount_validator() {
        // (requested, balance, expected)
        let cases = [(500, 1000, true), (1000, 1000, true), (1500, 1000, false)];

        for (requested, balance, expected) in cases {
            let validator = AccountValidator::requested_amount(Money::from_units(requested));
            assert_eq!(validator(Money::from_units(balance)), expected);
        }
    }

    #[test]
    fn test_validators_are_reusable() {
        let validator = AccountValidator::requested_amount(Money::from_units(300));
        let balances = [100, 300, 700].map(Money::from_units);
        let results: Vec<bool> = balances.iter().map(|b| validator(*b)).collect();
        assert_eq!(results, vec![false, true, true]);
        assert!(validator(Money::from_units(300)));
    }

    #[test]
    fn test_withdrawal_validator() {
        let validator =
            AccountValidator::withdrawal(Money::from_units(300), Money::from_units(100));

        assert!(validator(Money::from_units(400)));
        assert!(!validator(Money::from_units(399)));
        assert!(!validator(Money::from_units(200)));

        let negative = AccountValidator::withdrawal(Money::from_units(-10), Money::zero());
        assert!(!negative(Money::from_units(1000)));

        let zero = AccountValidator::withdrawal(Money::zero(), Money::zero());
        assert!(!zero(Money::from_units(1000)));
    }

    #[test]
    fn test_withdrawal_validator_at_range_limits() {
        let max = Money::from(rust_decimal::Decimal::MAX);
        let min = Money::from(rust_decimal::Decimal::MIN);

        let all_of_it = AccountValidator::withdrawal(max, Money::zero());
        assert!(all_of_it(max));

        let below_floor = AccountValidator::withdrawal(Money::from_units(1), min);
        assert!(!below_floor(min));
    }
}
