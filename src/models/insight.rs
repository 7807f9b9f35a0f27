use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    SafeToSpend,
    SpendingIncrease,
    IncomePattern,
    UnderBudget,
    RecurringSuggestion,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SafeToSpend => "safe_to_spend",
            Self::SpendingIncrease => "spending_increase",
            Self::IncomePattern => "income_pattern",
            Self::UnderBudget => "under_budget",
            Self::RecurringSuggestion => "recurring_suggestion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightAction {
    AdjustBudget,
    SetGoal,
    MakeRecurring,
    Reward,
}

impl InsightAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdjustBudget => "adjust_budget",
            Self::SetGoal => "set_goal",
            Self::MakeRecurring => "make_recurring",
            Self::Reward => "reward",
        }
    }
}

/// A derived observation about the current financial month. Recomputed on
/// demand and never persisted; `id` is stable across recomputations so a
/// caller can de-duplicate within a render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartInsight {
    pub id: String,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub action_label: Option<String>,
    pub action: Option<InsightAction>,
    pub value: Option<Decimal>,
    pub category: Option<Category>,
}

impl SmartInsight {
    pub(crate) fn new(id: String, kind: InsightKind, title: String, description: String) -> Self {
        Self {
            id,
            kind,
            title,
            description,
            action_label: None,
            action: None,
            value: None,
            category: None,
        }
    }
}
