#![doc = include_str!("../README.md")]

use clap::Parser;
use hamming::CancellationToken;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "hamming",
    version,
    about = "Print the first N Hamming numbers using a concurrent dataflow network"
)]
struct CliArgs {
    /// How many Hamming numbers to produce.
    #[arg(short = 'n', long, default_value_t = 60)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    hamming::run_with_shutdown(args.count, |value| println!("{value}"), shutdown).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Received Ctrl+C, stopping network");
        shutdown.cancel();
    }
}
