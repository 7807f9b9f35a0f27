mod budget;
mod category;
mod insight;
mod transaction;

pub use budget::Budget;
pub use category::{Category, TransactionKind};
pub use insight::{InsightAction, InsightKind, SmartInsight};
pub use transaction::Transaction;
