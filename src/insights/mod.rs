use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Budget, Category, InsightAction, InsightKind, SmartInsight, Transaction};

/// A category must exceed last month's spend by this ratio to count as a spike.
const SPIKE_RATIO: Decimal = Decimal::from_parts(12, 0, 0, false, 1); // 1.2
/// Total spend below this share of the total budget counts as under budget.
const UNDER_BUDGET_RATIO: Decimal = Decimal::from_parts(7, 0, 0, false, 1); // 0.7
/// Amounts within this share of each other look like the same recurring charge.
const RECURRING_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1
/// Minimum gig deposits in a month before the income looks steady.
const GIG_PATTERN_MIN: usize = 3;
/// Under-budget celebration only fires late in the month.
const UNDER_BUDGET_DAY_GATE: u32 = 20;
/// The recurring scan only looks at the most recently created transactions.
const RECENT_WINDOW: usize = 10;
const MAX_INSIGHTS: usize = 5;

/// Derive up to [`MAX_INSIGHTS`] insights for the month containing
/// `reference`. Pure: identical inputs and reference date give identical
/// output, in a fixed order (safe-to-spend, spending spikes, gig income,
/// under budget, recurring suggestion).
pub fn generate_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    reference: NaiveDate,
) -> Vec<SmartInsight> {
    let mut insights = Vec::new();

    let current_month = month_key(reference);
    let month_tx: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.in_month(&current_month))
        .collect();

    let income: Decimal = month_tx.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expenses: Decimal = month_tx.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();
    let available = income - expenses;

    let days_left = days_in_month(reference) - reference.day();

    // 1. Safe to spend today
    if available > Decimal::ZERO && days_left > 0 {
        let safe = round_whole(available / Decimal::from(days_left));
        let mut insight = SmartInsight::new(
            "safe-to-spend".into(),
            InsightKind::SafeToSpend,
            format!("Safe to spend: ${safe} today"),
            format!("Based on your {days_left} days left this month"),
        );
        insight.value = Some(safe);
        insights.push(insight);
    }

    // 2. Per-category spending increase vs last month
    let last_month = prior_month(&current_month);

    // Vec keeps first-appearance order; a map would scramble it.
    let mut category_spending: Vec<(Category, Decimal, Decimal)> = Vec::new();
    for tx in month_tx.iter().filter(|t| t.is_expense()) {
        let entry = find_or_insert(&mut category_spending, tx.category);
        entry.1 += tx.amount;
    }
    for tx in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(&last_month))
    {
        let entry = find_or_insert(&mut category_spending, tx.category);
        entry.2 += tx.amount;
    }

    for (category, current, last) in &category_spending {
        if *last > Decimal::ZERO && *current > *last * SPIKE_RATIO {
            let increase = round_whole((*current - *last) / *last * Decimal::from(100));
            let mut insight = SmartInsight::new(
                format!("spending-increase-{}", category.as_str()),
                InsightKind::SpendingIncrease,
                format!("{} spending up {increase}%", category.label()),
                format!(
                    "${} vs ${} last month",
                    current.normalize(),
                    last.normalize()
                ),
            );
            insight.action_label = Some("Adjust?".into());
            insight.action = Some(InsightAction::AdjustBudget);
            insight.category = Some(*category);
            insights.push(insight);
        }
    }

    // 3. Gig income pattern
    let gig_amounts: Vec<Decimal> = month_tx
        .iter()
        .filter(|t| t.is_income() && t.category == Category::Gig)
        .map(|t| t.amount)
        .collect();
    if gig_amounts.len() >= GIG_PATTERN_MIN {
        let total: Decimal = gig_amounts.iter().copied().sum();
        let avg = round_whole(total / Decimal::from(gig_amounts.len() as u64));
        let mut insight = SmartInsight::new(
            "gig-income-pattern".into(),
            InsightKind::IncomePattern,
            format!("Gig income steady at ~${avg}"),
            format!("Consider setting a ${avg}/mo savings goal"),
        );
        insight.action_label = Some("Set Goal".into());
        insight.action = Some(InsightAction::SetGoal);
        insight.value = Some(avg);
        insights.push(insight);
    }

    // 4. Under-budget celebration
    let total_budget: Decimal = budgets.iter().map(|b| b.monthly_limit).sum();
    let total_spent: Decimal = budgets.iter().map(|b| b.spent).sum();
    if total_budget > Decimal::ZERO
        && total_spent < total_budget * UNDER_BUDGET_RATIO
        && reference.day() > UNDER_BUDGET_DAY_GATE
    {
        let saved = round_whole(total_budget - total_spent);
        let mut insight = SmartInsight::new(
            "under-budget".into(),
            InsightKind::UnderBudget,
            format!("Under budget by ${saved}!"),
            "Great job this month! Reward yourself?".into(),
        );
        insight.action_label = Some("$10 treat?".into());
        insight.action = Some(InsightAction::Reward);
        insight.value = Some(Decimal::from(10));
        insights.push(insight);
    }

    // 5. Recurring-expense suggestion (at most one per call)
    if let Some(insight) = recurring_suggestion(transactions) {
        insights.push(insight);
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

/// [`generate_insights`] against the local wall clock.
pub fn generate_insights_now(
    transactions: &[Transaction],
    budgets: &[Budget],
) -> Vec<SmartInsight> {
    generate_insights(transactions, budgets, chrono::Local::now().date_naive())
}

fn recurring_suggestion(transactions: &[Transaction]) -> Option<SmartInsight> {
    // Most recently created first; input order is not part of the contract.
    let mut by_created: Vec<&Transaction> = transactions.iter().collect();
    by_created.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    for tx in by_created
        .iter()
        .take(RECENT_WINDOW)
        .filter(|t| !t.is_recurring && t.is_expense())
    {
        let similar = transactions
            .iter()
            .filter(|other| {
                other.id != tx.id
                    && other.category == tx.category
                    && !other.is_recurring
                    && (other.amount - tx.amount).abs() < tx.amount * RECURRING_TOLERANCE
            })
            .count();

        if similar >= 2 {
            let name = if tx.note.is_empty() {
                tx.category.label().to_string()
            } else {
                tx.note.clone()
            };
            let mut insight = SmartInsight::new(
                format!("recurring-{}", tx.id),
                InsightKind::RecurringSuggestion,
                format!("{name} detected"),
                "This looks like a recurring expense".into(),
            );
            insight.action_label = Some("Make recurring".into());
            insight.action = Some(InsightAction::MakeRecurring);
            // Only one recurring suggestion per call.
            return Some(insight);
        }
    }

    None
}

/// Current-month totals for the dashboard-style summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub available: Decimal,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    /// Whole percent spent of the total budget; 0 when there is no budget.
    pub budget_progress: u32,
    /// Daily discretionary amount for the rest of the month, clamped at 0.
    pub safe_to_spend: Decimal,
}

impl MonthSummary {
    pub fn compute(
        transactions: &[Transaction],
        budgets: &[Budget],
        reference: NaiveDate,
    ) -> Self {
        let month = month_key(reference);
        let income: Decimal = transactions
            .iter()
            .filter(|t| t.is_income() && t.in_month(&month))
            .map(|t| t.amount)
            .sum();
        let expenses: Decimal = transactions
            .iter()
            .filter(|t| t.is_expense() && t.in_month(&month))
            .map(|t| t.amount)
            .sum();
        let available = income - expenses;

        let total_budget: Decimal = budgets.iter().map(|b| b.monthly_limit).sum();
        let total_spent: Decimal = budgets.iter().map(|b| b.spent).sum();
        let budget_progress = if total_budget > Decimal::ZERO {
            round_whole(total_spent / total_budget * Decimal::from(100))
                .to_u32()
                .unwrap_or(0)
        } else {
            0
        };

        let days_left = days_in_month(reference) - reference.day();
        let safe_to_spend = if days_left > 0 {
            round_whole(available / Decimal::from(days_left)).max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        Self {
            month,
            income,
            expenses,
            available,
            total_budget,
            total_spent,
            budget_progress,
            safe_to_spend,
        }
    }
}

// ── date and rounding helpers ─────────────────────────────────

/// "YYYY-MM" key for the month containing `date`.
pub(crate) fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// The month before a "YYYY-MM" key, rolling January back to December of the
/// previous year. Malformed keys fall through unchanged rather than panic.
fn prior_month(month: &str) -> String {
    let mut parts = month.splitn(2, '-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let m: u32 = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    if year == 0 || m == 0 {
        return month.to_string();
    }
    if m == 1 {
        format!("{:04}-12", year - 1)
    } else {
        format!("{:04}-{:02}", year, m - 1)
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(a), Some(b)) => (b - a).num_days() as u32,
        _ => 30,
    }
}

/// Round to a whole dollar, half away from zero. Every rounded quantity in
/// this module is non-negative.
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn find_or_insert(
    entries: &mut Vec<(Category, Decimal, Decimal)>,
    category: Category,
) -> &mut (Category, Decimal, Decimal) {
    if let Some(pos) = entries.iter().position(|(c, _, _)| *c == category) {
        &mut entries[pos]
    } else {
        entries.push((category, Decimal::ZERO, Decimal::ZERO));
        let last = entries.len() - 1;
        &mut entries[last]
    }
}
