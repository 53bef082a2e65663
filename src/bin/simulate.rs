//! Three-door convergence simulator CLI.
//!
//! Runs a schedule of batch sizes and reports how the stay and switch win
//! rates approach 1/3 and 2/3.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Default schedule
//!   cargo run --bin simulate -- -b 10,100,1000      # Custom schedule
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use monty::build_info;
use monty::simulator::{run_simulation, SimConfig};
use monty::{SimError, SimResult};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(2);
        }
    };

    init_logging(options.config.verbosity);

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct CliOptions {
    config: SimConfig,
    save_json: bool,
}

fn run(options: &CliOptions) -> SimResult<()> {
    let config = &options.config;

    if config.verbosity > 0 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              THREE-DOOR CONVERGENCE SIMULATOR                 ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Batches:        {:?}", config.batch_sizes);
        println!("  Workers:        {}", config.workers);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(config)?;

    println!("{}", report.to_text());

    if options.save_json {
        let json = report.to_json()?;
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args(args: &[String]) -> SimResult<CliOptions> {
    let mut config = SimConfig::default();
    let mut save_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-b" | "--batches" => {
                let value = next_value(args, &mut i, "--batches")?;
                config.batch_sizes =
                    SimConfig::parse_batch_sizes(value).map_err(SimError::config)?;
            }
            "-s" | "--seed" => {
                let value = next_value(args, &mut i, "--seed")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| SimError::config("--seed requires a number"))?,
                );
            }
            "-w" | "--workers" => {
                let value = next_value(args, &mut i, "--workers")?;
                config.workers = value
                    .parse()
                    .map_err(|_| SimError::config("--workers requires a number"))?;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                save_json = true;
            }
            "--quick" => {
                config.batch_sizes = SimConfig::quick().batch_sizes;
            }
            "--version" => {
                println!("{}", build_info::version_string("simulate"));
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(SimError::config(format!("unknown option {}", other))),
        }
        i += 1;
    }

    Ok(CliOptions { config, save_json })
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> SimResult<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| SimError::config(format!("{} requires a value", flag)))
}

fn print_help() {
    println!("Three-Door Convergence Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --batches <LIST>  Comma-separated batch sizes");
    println!("                          (default: 5,10,100,1000,3000,5000,10000,50000,1000000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -w, --workers <N>     Threads per batch (default: 1)");
    println!("    -v, --verbose         Log every batch");
    println!("    -q, --quiet           Only print the report");
    println!("    --json                Save JSON report");
    println!("    --quick               Skip the largest batches");
    println!("    --version             Show version information");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                       # Default schedule");
    println!("    cargo run --bin simulate -- --seed 42          # Reproducible");
    println!("    cargo run --bin simulate -- -b 1000000 -w 8    # One big parallel batch");
    println!("    cargo run --bin simulate -- --quick --json     # Quick run, save JSON");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.config.batch_sizes, SimConfig::default().batch_sizes);
        assert!(!options.save_json);
    }

    #[test]
    fn test_parse_full_command_line() {
        let options =
            parse_args(&args(&["-b", "10,100", "--seed", "42", "-w", "4", "-q", "--json"])).unwrap();
        assert_eq!(options.config.batch_sizes, vec![10, 100]);
        assert_eq!(options.config.seed, Some(42));
        assert_eq!(options.config.workers, 4);
        assert_eq!(options.config.verbosity, 0);
        assert!(options.save_json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["-b", "5,x"])).is_err());
    }
}
