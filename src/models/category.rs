#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food,
    Rent,
    Transport,
    School,
    Fun,
    Gig,
    Income,
    Other,
}

impl Category {
    /// Lowercase storage key, as used in data files and insight ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Rent => "rent",
            Self::Transport => "transport",
            Self::School => "school",
            Self::Fun => "fun",
            Self::Gig => "gig",
            Self::Income => "income",
            Self::Other => "other",
        }
    }

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Transport => "Transport",
            Self::School => "School",
            Self::Fun => "Fun",
            Self::Gig => "Gig",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "rent" => Self::Rent,
            "transport" => Self::Transport,
            "school" => Self::School,
            "fun" => Self::Fun,
            "gig" => Self::Gig,
            "income" => Self::Income,
            _ => Self::Other,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Rent,
            Self::Transport,
            Self::School,
            Self::Fun,
            Self::Gig,
            Self::Income,
            Self::Other,
        ]
    }

    /// The transaction kind this category implies, if it has one.
    /// `Other` is usable for both income and expenses.
    pub fn kind(&self) -> Option<TransactionKind> {
        match self {
            Self::Gig | Self::Income => Some(TransactionKind::Income),
            Self::Food | Self::Rent | Self::Transport | Self::School | Self::Fun => {
                Some(TransactionKind::Expense)
            }
            Self::Other => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
