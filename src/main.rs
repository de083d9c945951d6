use anyhow::Result;
use clap::Parser;

use arbormark::{driver, parse_size, Workload};

#[derive(Parser, Debug)]
#[command(
    name = "arbormark",
    about = "Binary-tree allocation microbenchmark: builds, checksums and discards complete binary trees in parallel"
)]
struct Cli {
    /// Problem size; drives the maximum tree depth (clamped to at least 6).
    #[arg(value_parser = parse_size, default_value_t = 0)]
    n: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let workload = Workload::from_size(cli.n);

    for line in driver::run(&workload) {
        println!("{line}");
    }

    Ok(())
}
