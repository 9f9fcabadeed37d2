use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use u_partition::cli::Cli;
use u_partition::error::Result;
use u_partition::partition::read_instance;
use u_partition::random::create_rng;
use u_partition::registry::{Algorithm, Solver};

fn main() {
    enable_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage problems exit with 1; --help and --version exit cleanly.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    match run(&cli) {
        Ok(residue) => println!("{residue}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<u64> {
    // Resolve the algorithm before touching the file.
    let algorithm = Algorithm::try_from(cli.algorithm)?;
    let instance = read_instance(&cli.input, cli.size)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!(seed, "random source");
    let mut rng = create_rng(seed);

    Solver::with_max_iterations(cli.max_iterations).solve(algorithm, &instance, &mut rng)
}
