mod csv_import;

pub(crate) use csv_import::{load_budgets, load_transactions};
