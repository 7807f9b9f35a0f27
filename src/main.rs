mod calc;
mod categorize;
mod import;
mod insights;
mod models;
mod run;
mod util;


use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        0 | 1 => {
            run::print_usage();
            Ok(())
        }
        _ => run::as_cli(&args),
    }
}
