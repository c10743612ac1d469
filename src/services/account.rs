//! Account service
//!
//! Mediates between account mutation and the outside world: each operation
//! looks up or mutates the account, persists it through the repository and
//! reports the outcome to the audit logger.
//!
//! Gates and formulas are supplied by the caller, so business rules such as
//! minimum balances or interest math stay out of the service.
//!
//! A mutation whose persistence fails is undone on the caller's `Account`
//! before the error is returned, so in-memory and stored state agree.

use rust_decimal::Decimal;

use crate::audit::Logger;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountType, Money};
use crate::storage::AccountRepository;

/// Flat-rate interest: `balance * rate / 100`, with `rate` in percent
///
/// Returns `None` when the result is not representable.
pub fn simple_interest(balance: Money, rate: Decimal) -> Option<Money> {
    balance.checked_mul(rate.checked_div(Decimal::ONE_HUNDRED)?)
}

/// Service for account operations
pub struct AccountService<'a> {
    repository: &'a dyn AccountRepository,
    logger: &'a dyn Logger,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(repository: &'a dyn AccountRepository, logger: &'a dyn Logger) -> Self {
        Self { repository, logger }
    }

    /// Open a new account and add it to the repository
    pub fn open_account(
        &self,
        account_number: &str,
        initial_balance: Money,
        account_type: AccountType,
    ) -> LedgerResult<Account> {
        let account_number = account_number.trim();
        if account_number.is_empty() {
            return Err(LedgerError::Validation(
                "Account number cannot be empty".into(),
            ));
        }

        if self
            .repository
            .get_by_account_number(account_number)?
            .is_some()
        {
            return Err(LedgerError::duplicate_account(account_number));
        }

        let account = Account::new(account_number, initial_balance, account_type);
        self.repository.add(&account)?;

        tracing::debug!(id = %account.id(), number = account_number, "account opened");
        self.logger.log(&format!(
            "Opened {} account {} with balance {}",
            account.account_type(),
            account.account_number(),
            account.balance()
        ));

        Ok(account)
    }

    /// Find an account by its number
    pub fn find(&self, account_number: &str) -> LedgerResult<Option<Account>> {
        self.repository.get_by_account_number(account_number.trim())
    }

    /// All accounts, ordered by account number
    pub fn list(&self) -> LedgerResult<Vec<Account>> {
        self.repository.get_all()
    }

    /// Remove an account from the repository
    pub fn close_account(&self, account: &Account) -> LedgerResult<()> {
        self.repository.remove(account)?;
        self.logger
            .log(&format!("Closed account {}", account.account_number()));
        Ok(())
    }

    /// Apply `formula(balance, rate)` to the account without mutating it
    ///
    /// A formula returning `None` is reported as `Overflow`.
    pub fn calculate_interest<F>(
        &self,
        account: &Account,
        formula: F,
        rate: Decimal,
    ) -> LedgerResult<Money>
    where
        F: Fn(Money, Decimal) -> Option<Money>,
    {
        let Some(interest) = formula(account.balance(), rate) else {
            self.logger.log(&format!(
                "Failed to calculate interest for account {} at rate {}%: overflow",
                account.account_number(),
                rate
            ));
            return Err(LedgerError::Overflow(format!(
                "interest on {} at rate {}%",
                account.balance(),
                rate
            )));
        };

        self.logger.log(&format!(
            "Calculated interest of {} for account {} at rate {}%",
            interest,
            account.account_number(),
            rate
        ));

        Ok(interest)
    }

    /// Deposit into the account, persist it, then report the new balance
    ///
    /// `on_success` runs only after the account has been stored.
    pub fn deposit<F>(
        &self,
        account: &mut Account,
        amount: Money,
        on_success: F,
    ) -> LedgerResult<()>
    where
        F: FnOnce(Money),
    {
        let before = account.clone();

        if let Err(e) = account.deposit(amount) {
            self.logger.log(&format!(
                "Rejected deposit of {} into account {}: {}",
                amount,
                account.account_number(),
                e
            ));
            return Err(e);
        }

        if let Err(e) = self.repository.update(account) {
            *account = before;
            self.logger.log(&format!(
                "Failed to deposit {} into account {}: {}",
                amount,
                account.account_number(),
                e
            ));
            return Err(e);
        }

        self.logger.log(&format!(
            "Deposited {} into account {}; new balance {}",
            amount,
            account.account_number(),
            account.balance()
        ));

        on_success(account.balance());
        Ok(())
    }

    /// Withdraw from the account if `can_withdraw` accepts its current balance
    ///
    /// The predicate and the account's own insufficient-funds check are
    /// independent gates; a rejection from either returns `Ok(false)` and
    /// leaves the account unchanged.
    pub fn withdraw<P>(
        &self,
        account: &mut Account,
        amount: Money,
        can_withdraw: P,
    ) -> LedgerResult<bool>
    where
        P: Fn(Money) -> bool,
    {
        if !can_withdraw(account.balance()) {
            self.logger.log(&format!(
                "Rejected withdrawal of {} from account {}: validation failed",
                amount,
                account.account_number()
            ));
            return Ok(false);
        }

        let before = account.clone();

        match account.withdraw(amount) {
            Ok(true) => {}
            Ok(false) => {
                self.logger.log(&format!(
                    "Rejected withdrawal of {} from account {}: insufficient funds",
                    amount,
                    account.account_number()
                ));
                return Ok(false);
            }
            Err(e) => {
                self.logger.log(&format!(
                    "Rejected withdrawal of {} from account {}: {}",
                    amount,
                    account.account_number(),
                    e
                ));
                return Err(e);
            }
        }

        if let Err(e) = self.repository.update(account) {
            *account = before;
            self.logger.log(&format!(
                "Failed to withdraw {} from account {}: {}",
                amount,
                account.account_number(),
                e
            ));
            return Err(e);
        }

        self.logger.log(&format!(
            "Withdrew {} from account {}; new balance {}",
            amount,
            account.account_number(),
            account.balance()
        ));

        Ok(true)
    }

    /// Move `amount` from one account to another
    ///
    /// Both accounts must already be in the repository. Both predicates are
    /// evaluated against the source balance before either leg runs. The
    /// legs are computed on copies and only written back to `from` and `to`
    /// once both are stored; if the second write fails the first is
    /// reverted.
    pub fn transfer<W, D>(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: Money,
        can_withdraw: W,
        can_deposit: D,
    ) -> LedgerResult<bool>
    where
        W: Fn(Money) -> bool,
        D: Fn(Money) -> bool,
    {
        let fail = |err: Option<LedgerError>| -> LedgerResult<bool> {
            self.log_transfer_failure(&*from, &*to, amount);
            err.map_or(Ok(false), Err)
        };

        if from.id() == to.id() {
            return fail(Some(LedgerError::Validation(
                "Cannot transfer to the same account".into(),
            )));
        }

        if !amount.is_positive() {
            return fail(Some(LedgerError::InvalidAmount(amount)));
        }

        for account in [&*from, &*to] {
            match self.repository.get_by_id(account.id()) {
                Ok(Some(_)) => {}
                Ok(None) => {
                    return fail(Some(LedgerError::account_not_found(
                        account.account_number(),
                    )))
                }
                Err(e) => return fail(Some(e)),
            }
        }

        if !(can_withdraw(from.balance()) && can_deposit(from.balance())) {
            return fail(None);
        }

        let mut debited = from.clone();
        match debited.withdraw(amount) {
            Ok(true) => {}
            Ok(false) => return fail(None),
            Err(e) => return fail(Some(e)),
        }

        let mut credited = to.clone();
        if let Err(e) = credited.deposit(amount) {
            return fail(Some(e));
        }

        if let Err(e) = self.repository.update(&debited) {
            return fail(Some(e));
        }
        if let Err(e) = self.repository.update(&credited) {
            if let Err(revert) = self.repository.update(from) {
                tracing::error!(
                    account = %from.id(),
                    error = %revert,
                    "failed to revert source account after transfer error"
                );
            }
            return fail(Some(e));
        }

        *from = debited;
        *to = credited;

        tracing::debug!(from = %from.id(), to = %to.id(), %amount, "transfer committed");
        self.logger.log(&format!(
            "Transferred {} from account {} to account {}",
            amount,
            from.account_number(),
            to.account_number()
        ));

        Ok(true)
    }

    fn log_transfer_failure(&self, from: &Account, to: &Account, amount: Money) {
        self.logger.log(&format!(
            "Failed to transfer {} from account {} to account {}",
            amount,
            from.account_number(),
            to.account_number()
        ));
    }

    /// Stored balance of the account, or zero when the repository has no
    /// record of it
    pub fn get_balance(&self, account: &Account) -> LedgerResult<Money> {
        let balance = match self.repository.get_by_id(account.id())? {
            Some(stored) => {
                self.logger.log(&format!(
                    "Balance query for account {}: {}",
                    stored.account_number(),
                    stored.balance()
                ));
                stored.balance()
            }
            None => {
                self.logger.log(&format!(
                    "Balance query for account {}: not found",
                    account.account_number()
                ));
                Money::zero()
            }
        };

        Ok(balance)
    }
}
