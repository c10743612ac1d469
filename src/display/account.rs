//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let number_width = accounts
        .iter()
        .map(|a| a.account_number().len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<number_width$}  {:<8}  {:>14}  {}\n",
        "Number",
        "Type",
        "Balance",
        "ID",
        number_width = number_width,
    ));

    output.push_str(&format!(
        "{:-<number_width$}  {:-<8}  {:->14}  {:-<12}\n",
        "",
        "",
        "",
        "",
        number_width = number_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<number_width$}  {:<8}  {:>14}  {}\n",
            account.account_number(),
            account.account_type().to_string(),
            account.balance().to_string(),
            account.id(),
            number_width = number_width,
        ));
    }

    let total = accounts
        .iter()
        .try_fold(Money::zero(), |acc, a| acc.checked_add(a.balance()))
        .map_or_else(|| "overflow".to_string(), |total| total.to_string());
    output.push_str(&format!(
        "{:<number_width$}  {:<8}  {:>14}\n",
        "Total",
        "",
        total,
        number_width = number_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.account_number()));
    output.push_str(&format!("  Type:    {}\n", account.account_type()));
    output.push_str(&format!("  Balance: {}\n", account.balance()));
    output.push_str(&format!("  ID:      {}\n", account.id().as_uuid()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(&[]), "No accounts found.");
    }

    #[test]
    fn test_list_contains_rows_and_total() {
        let accounts = vec![
            Account::new("12345", Money::from_units(1000), AccountType::Checking),
            Account::new("67890", Money::from_cents(50050), AccountType::Savings),
        ];

        let output = format_account_list(&accounts);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("12345"));
        assert!(lines[2].contains("1000.00"));
        assert!(lines[3].contains("Savings"));
        assert!(lines[4].starts_with("Total"));
        assert!(lines[4].contains("1500.50"));
    }

    #[test]
    fn test_total_out_of_range() {
        let max = Money::from(rust_decimal::Decimal::MAX);
        let accounts = vec![
            Account::new("1", max, AccountType::Checking),
            Account::new("2", max, AccountType::Savings),
        ];

        let output = format_account_list(&accounts);
        let total_line = output.lines().last().unwrap();

        assert!(total_line.starts_with("Total"));
        assert!(total_line.ends_with("overflow"));
    }

    #[test]
    fn test_details() {
        let account = Account::new("12345", Money::from_units(1200), AccountType::Checking);
        let output = format_account_details(&account);

        assert!(output.contains("Account: 12345"));
        assert!(output.contains("Type:    Checking"));
        assert!(output.contains("Balance: 1200.00"));
        assert!(output.contains(&account.id().as_uuid().to_string()));
    }
}
