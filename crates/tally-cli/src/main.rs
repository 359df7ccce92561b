use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use tally_core::{CounterOwner, ProducerGroup, RunConfig};

/// Serialized-counter demonstration: producer tasks hammer a single owner
/// task over a request channel, then the settled value is read back.
#[derive(Debug, Parser)]
#[command(name = "tally", about, long_about = None)]
struct Args {
    /// Increment-only producer tasks.
    #[arg(long, default_value_t = 1)]
    incrementers: usize,

    /// Decrement-only producer tasks.
    #[arg(long, default_value_t = 1)]
    decrementers: usize,

    /// Operations per producer.
    #[arg(long, default_value_t = 1_000_000)]
    ops: u64,

    /// Request channel capacity (1 = rendezvous-style hand-off).
    #[arg(long, default_value_t = 1)]
    capacity: usize,

    /// Also wait for Enter before reading the final value. The read still
    /// happens after the producers have been joined.
    #[arg(long)]
    wait_enter: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = RunConfig {
        incrementers: args.incrementers,
        decrementers: args.decrementers,
        ops_per_producer: args.ops,
        channel_capacity: args.capacity,
    };
    config.validate()?;

    let (handle, owner) = CounterOwner::spawn(config.channel_capacity);
    let producers = ProducerGroup::spawn(&handle, &config);
    info!(
        producers = producers.len(),
        ops = config.ops_per_producer,
        capacity = config.channel_capacity,
        "run started"
    );

    // 完了はハンドルの join で待つ。Enter 待ちだけではレースが残る
    producers.join().await?;
    debug!("all producers joined");

    if args.wait_enter {
        let mut line = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    }

    let value = handle.get().await?;
    println!("The magic number is: {value}");

    handle.quit().await?;
    let final_value = owner.join().await;
    debug!(final_value, "owner joined");

    Ok(())
}
