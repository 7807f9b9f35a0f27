use regex::Regex;

use crate::models::TransactionKind;

/// Ordered (pattern, label) rules. A note can satisfy several patterns, so
/// rule order is part of the contract: first match wins.
const RULES: &[(&str, &str)] = &[
    ("salary|payroll|wage|income", "Income: Salary"),
    ("invoice|client|project", "Income: Client"),
    ("grocer|supermarket|food|restaurant", "Expense: Food"),
    ("rent|mortgage", "Expense: Housing"),
    ("uber|lyft|transit|gas", "Expense: Transport"),
    ("tool|software|subscription", "Expense: Tools"),
    ("tax", "Expense: Taxes"),
];

pub(crate) struct Categorizer {
    rules: Vec<CompiledRule>,
}

struct CompiledRule {
    regex: Option<Regex>,
    label: &'static str,
}

impl Categorizer {
    pub(crate) fn new() -> Self {
        let compiled = RULES
            .iter()
            .map(|(pattern, label)| CompiledRule {
                regex: Regex::new(pattern).ok(),
                label,
            })
            .collect();

        Self { rules: compiled }
    }

    /// Map a free-text note plus a transaction kind to a category label.
    /// Always returns a non-empty string; unmatched notes fall back to the
    /// kind's "Other" bucket.
    pub(crate) fn categorize(&self, note: &str, kind: TransactionKind) -> String {
        let note_lower = note.to_lowercase();

        for rule in &self.rules {
            if rule.regex.as_ref().is_some_and(|re| re.is_match(&note_lower)) {
                return rule.label.to_string();
            }
        }

        match kind {
            TransactionKind::Income => "Income: Other".to_string(),
            TransactionKind::Expense => "Expense: Other".to_string(),
        }
    }
}
