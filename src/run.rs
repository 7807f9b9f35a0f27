use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::calc;
use crate::categorize::Categorizer;
use crate::insights::{generate_insights, generate_insights_now, MonthSummary};
use crate::models::{Budget, Category, SmartInsight, Transaction, TransactionKind};
use crate::util::format_amount;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "insights" | "i" => cli_insights(&args[2..]),
        "summary" | "s" => cli_summary(&args[2..]),
        "categorize" | "c" => cli_categorize(&args[2..]),
        "payoff" => cli_payoff(&args[2..]),
        "growth" => cli_growth(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("Folio — rule-based smart insights for personal finance");
    println!();
    println!("Usage: folio <command>");
    println!();
    println!("Commands:");
    println!("  insights <txns.csv>           Generate smart insights");
    println!("    --budgets <file.csv>        Budget records to include");
    println!("    --date <YYYY-MM-DD>         Reference date (default: today)");
    println!("  summary <txns.csv>            Print the monthly summary");
    println!("    --budgets <file.csv>        Budget records to include");
    println!("    --date <YYYY-MM-DD>         Reference date (default: today)");
    println!("  categorize <note...>          Suggest a category for a note");
    println!("    --income                    Treat the note as income");
    println!("  payoff <balance> <apr%> <payment>");
    println!("                                Credit-card payoff projection");
    println!("  growth <principal> <monthly> <rate%> <years>");
    println!("                                Compound growth projection");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    let categories: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    println!("Categories: {}", categories.join(", "));
}

fn cli_insights(args: &[String]) -> Result<()> {
    let (transactions, budgets, reference) = load_inputs(args, "insights")?;
    let insights = match reference {
        Some(date) => generate_insights(&transactions, &budgets, date),
        None => generate_insights_now(&transactions, &budgets),
    };

    if insights.is_empty() {
        println!("No insights yet — add more transactions");
        return Ok(());
    }

    for insight in &insights {
        print_insight(insight);
    }
    Ok(())
}

fn print_insight(insight: &SmartInsight) {
    println!("  [{}] {}", insight.kind.as_str(), insight.title);
    println!("      {}", insight.description);
    if let (Some(label), Some(action)) = (&insight.action_label, insight.action) {
        println!("      → {label} ({})", action.as_str());
    }
}

fn cli_summary(args: &[String]) -> Result<()> {
    let (transactions, budgets, reference) = load_inputs(args, "summary")?;
    let reference = reference.unwrap_or_else(|| chrono::Local::now().date_naive());
    let summary = MonthSummary::compute(&transactions, &budgets, reference);

    println!("Folio — {}", summary.month);
    println!("{}", "─".repeat(40));
    println!("  Income:        {}", format_amount(summary.income));
    println!("  Expenses:      {}", format_amount(summary.expenses));
    println!("  Available:     {}", format_amount(summary.available));
    if summary.total_budget > rust_decimal::Decimal::ZERO {
        println!(
            "  Budget:        {} of {} ({}%)",
            format_amount(summary.total_spent),
            format_amount(summary.total_budget),
            summary.budget_progress,
        );
        for budget in &budgets {
            println!(
                "    {:<12} {} left of {}",
                budget.category.label(),
                format_amount(budget.remaining()),
                format_amount(budget.monthly_limit),
            );
        }
    }
    println!("  Safe today:    {}", format_amount(summary.safe_to_spend));
    Ok(())
}

fn cli_categorize(args: &[String]) -> Result<()> {
    let kind = if args.iter().any(|a| a == "--income") {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };
    let note = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    if note.is_empty() {
        anyhow::bail!("Usage: folio categorize <note...> [--income]");
    }

    let categorizer = Categorizer::new();
    println!("{}", categorizer.categorize(&note, kind));
    Ok(())
}

fn cli_payoff(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: folio payoff <balance> <apr%> <payment>");
    }
    let balance = parse_number(&args[0], "balance")?;
    let apr = parse_number(&args[1], "apr")?;
    let payment = parse_number(&args[2], "payment")?;

    match calc::credit_payoff(balance, apr, payment) {
        Some(result) => {
            println!("Payoff in {} months", result.months_to_payoff);
            println!("  Monthly payment: ${:.2}", result.monthly_payment);
            println!("  Total paid:      ${:.2}", result.total_paid);
            println!("  Total interest:  ${:.2}", result.total_interest);
        }
        None => println!("Payment of ${payment:.2} never clears the balance at {apr}% APR"),
    }
    Ok(())
}

fn cli_growth(args: &[String]) -> Result<()> {
    if args.len() < 4 {
        anyhow::bail!("Usage: folio growth <principal> <monthly> <rate%> <years>");
    }
    let principal = parse_number(&args[0], "principal")?;
    let monthly = parse_number(&args[1], "monthly")?;
    let rate = parse_number(&args[2], "rate")?;
    let years: u32 = args[3]
        .parse()
        .with_context(|| format!("Invalid years: '{}'", args[3]))?;

    match calc::compound_growth(principal, monthly, rate, years) {
        Some(result) => {
            println!("After {years} years: ${:.0}", result.final_amount);
            println!("  Contributions:  ${:.2}", result.total_contributions);
            println!("  Interest:       ${:.2}", result.total_interest);
            for (year, balance) in &result.yearly_breakdown {
                println!("  Year {year:<3} ${balance:.0}");
            }
        }
        None => println!("Nothing to project — check principal, contribution, and years"),
    }
    Ok(())
}

/// Shared loading for the insights and summary commands: positional
/// transactions file, optional `--budgets` file and `--date` override
/// (`None` means "today").
fn load_inputs(
    args: &[String],
    cmd: &str,
) -> Result<(Vec<Transaction>, Vec<Budget>, Option<NaiveDate>)> {
    let tx_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .ok_or_else(|| anyhow::anyhow!("Usage: folio {cmd} <txns.csv> [--budgets <file>] [--date <YYYY-MM-DD>]"))?;
    let path = Path::new(tx_path);
    if !path.exists() {
        anyhow::bail!("File not found: {tx_path}");
    }
    let transactions = crate::import::load_transactions(path)?;

    let budgets = match args.windows(2).find(|w| w[0] == "--budgets") {
        Some(w) => crate::import::load_budgets(Path::new(&w[1]))?,
        None => Vec::new(),
    };

    let reference = match args.windows(2).find(|w| w[0] == "--date") {
        Some(w) => Some(
            NaiveDate::parse_from_str(&w[1], "%Y-%m-%d")
                .with_context(|| format!("Invalid date: '{}'", w[1]))?,
        ),
        None => None,
    };

    Ok((transactions, budgets, reference))
}

fn parse_number(s: &str, name: &str) -> Result<f64> {
    s.parse()
        .with_context(|| format!("Invalid {name}: '{s}'"))
}
