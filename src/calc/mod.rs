//! What-if financial calculators. These work in `f64` rather than `Decimal`:
//! the payoff formula needs logarithms, and the inputs are hypothetical
//! figures, not ledger money.

#[derive(Debug, Clone, PartialEq)]
pub struct CreditPayoff {
    pub months_to_payoff: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    pub monthly_payment: f64,
}

/// Months and cost to pay off a revolving balance at a fixed monthly payment.
/// Returns `None` when an input is non-positive or the payment does not cover
/// the monthly interest (the balance would never shrink).
pub fn credit_payoff(balance: f64, apr_percent: f64, monthly_payment: f64) -> Option<CreditPayoff> {
    let rate = apr_percent / 100.0 / 12.0;
    if balance <= 0.0 || rate <= 0.0 || monthly_payment <= 0.0 {
        return None;
    }
    if monthly_payment <= balance * rate {
        return None;
    }

    let months = (monthly_payment / (monthly_payment - balance * rate)).ln() / (1.0 + rate).ln();
    let months = months.ceil() as u32;

    let total_paid = monthly_payment * f64::from(months);
    let total_interest = total_paid - balance;

    Some(CreditPayoff {
        months_to_payoff: months,
        total_interest: round_cents(total_interest),
        total_paid: round_cents(total_paid),
        monthly_payment,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundGrowth {
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    /// One (year, balance) entry per completed year.
    pub yearly_breakdown: Vec<(u32, f64)>,
}

/// Project a balance with monthly compounding and a fixed monthly
/// contribution. Returns `None` for a zero horizon or when there is nothing
/// to grow.
pub fn compound_growth(
    principal: f64,
    monthly_contribution: f64,
    annual_return_percent: f64,
    years: u32,
) -> Option<CompoundGrowth> {
    if years == 0 || (principal <= 0.0 && monthly_contribution <= 0.0) {
        return None;
    }

    let monthly_rate = annual_return_percent / 100.0 / 12.0;
    let total_months = years * 12;

    let mut balance = principal;
    let mut yearly_breakdown = Vec::with_capacity(years as usize);
    for month in 1..=total_months {
        balance = balance * (1.0 + monthly_rate) + monthly_contribution;
        if month % 12 == 0 {
            yearly_breakdown.push((month / 12, balance.round()));
        }
    }

    let total_contributions = principal + monthly_contribution * f64::from(total_months);

    Some(CompoundGrowth {
        final_amount: balance.round(),
        total_contributions,
        total_interest: round_cents(balance - total_contributions),
        yearly_breakdown,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
