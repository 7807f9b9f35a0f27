use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Budget, Category, Transaction, TransactionKind};

/// Load transactions from a CSV snapshot with columns
/// `date,type,category,amount[,note[,recurring]]`. Later rows count as more
/// recently created.
pub(crate) fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut transactions = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2; // 1-based, after the header
        let record = result.with_context(|| format!("Row {row}: failed to read CSV record"))?;

        let date_str = record.get(0).unwrap_or("").to_string();
        if date_str.is_empty() {
            continue;
        }
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Row {row}: failed to parse date '{date_str}'"))?;

        let kind = TransactionKind::parse(record.get(1).unwrap_or(""));
        let category = Category::parse(record.get(2).unwrap_or(""));
        let amount = parse_decimal(record.get(3).unwrap_or(""))
            .with_context(|| format!("Row {row}: failed to parse amount"))?;
        let note = record.get(4).unwrap_or("").to_string();

        let mut tx = Transaction::new(
            format!("tx-{}", i + 1),
            date_str,
            amount,
            kind,
            category,
            note,
        );
        tx.is_recurring = parse_flag(record.get(5).unwrap_or(""));
        // Row order doubles as creation order.
        tx.created_at = format!("{:08}", i + 1);

        if !tx.matches_kind() {
            eprintln!(
                "Warning: row {row}: category '{}' does not match type '{}'",
                tx.category.as_str(),
                tx.kind
            );
        }
        transactions.push(tx);
    }

    Ok(transactions)
}

/// Load budget records from a CSV with columns `category,month,limit,spent`.
pub(crate) fn load_budgets(path: &Path) -> Result<Vec<Budget>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut budgets = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2;
        let record = result.with_context(|| format!("Row {row}: failed to read CSV record"))?;

        let category = Category::parse(record.get(0).unwrap_or(""));
        let month = record.get(1).unwrap_or("").to_string();
        if month.is_empty() {
            continue;
        }
        let monthly_limit = parse_decimal(record.get(2).unwrap_or(""))
            .with_context(|| format!("Row {row}: failed to parse limit"))?;
        let spent = parse_decimal(record.get(3).unwrap_or(""))
            .with_context(|| format!("Row {row}: failed to parse spent"))?;

        let mut budget = Budget::new(category, month, monthly_limit);
        budget.spent = spent;
        budgets.push(budget);
    }

    Ok(budgets)
}

/// Parse a decimal amount, tolerating currency symbols and thousands commas.
fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).with_context(|| format!("Invalid amount: '{s}'"))
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "y")
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
