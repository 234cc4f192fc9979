//! Validate a router limits config.toml before deployment
//!
//! Usage: check-limits-config <limits.toml> [-v|--verbose]
//!
//! Exits nonzero if the file fails to parse or the limits are internally
//! inconsistent, so deploy scripts can gate on it.

use std::path::PathBuf;
use std::process::ExitCode;

use dex_router_guard::ValidationLimits;

struct Args {
    input: PathBuf,
    verbose: bool,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let input = args.next().expect("Limits file required").into();
        let verbose = args.any(|a| a == "-v" || a == "--verbose");
        Self { input, verbose }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match ValidationLimits::from_file(&args.input) {
        Ok(limits) => {
            if args.verbose {
                println!("max_path_length        = {}", limits.max_path_length);
                println!("max_deadline_extension = {}", limits.max_deadline_extension);
                println!("min_liquidity          = {}", limits.min_liquidity);
            }
            println!("{}: ok", args.input.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", args.input.display(), e);
            ExitCode::FAILURE
        }
    }
}
