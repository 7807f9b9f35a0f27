use rust_decimal::Decimal;

use super::{Category, TransactionKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    /// Always non-negative; direction is carried by `kind`.
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: Category,
    /// Empty means no note was entered.
    pub note: String,
    pub is_recurring: bool,
    pub created_at: String,
}

impl Transaction {
    pub fn new(
        id: String,
        date: String,
        amount: Decimal,
        kind: TransactionKind,
        category: Category,
        note: String,
    ) -> Self {
        Self {
            id,
            user_id: String::new(),
            date,
            amount,
            kind,
            category,
            note,
            is_recurring: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// True when the date falls in the given "YYYY-MM" month.
    pub fn in_month(&self, month: &str) -> bool {
        self.date.starts_with(month)
    }

    /// Categories with an intrinsic kind must agree with `kind`.
    pub fn matches_kind(&self) -> bool {
        match self.category.kind() {
            Some(k) => k == self.kind,
            None => true,
        }
    }
}
