use rust_decimal::Decimal;

use super::Category;

/// One record per (user, category, month); uniqueness is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub user_id: String,
    pub category: Category,
    /// Format: "YYYY-MM"
    pub month: String,
    pub monthly_limit: Decimal,
    pub spent: Decimal,
}

impl Budget {
    pub fn new(category: Category, month: String, monthly_limit: Decimal) -> Self {
        Self {
            user_id: String::new(),
            category,
            month,
            monthly_limit,
            spent: Decimal::ZERO,
        }
    }

    pub fn remaining(&self) -> Decimal {
        self.monthly_limit - self.spent
    }
}
