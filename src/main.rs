//! Demo driver: builds a tree from a sequence of values, then prints its
//! traversal as it's drained from a bounded channel by a separate task.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wbtree::{stream, WBTree};

/// The values inserted with `--order fixed`.
const FIXED: [&str; 31] = [
    "a", "ab", "ac", "ae", "af", "f", "e", "e9", "e8", "e7", "e3", "e2", "d", "b", "c", "c1", "c2",
    "c3", "c4", "c5", "c6", "b1", "v6", "v5", "bx", "qr", "v4", "v3", "ba", "v2", "cx",
];

/// Inserts values into a weight-balanced tree and prints them back in order.
#[derive(Parser, Debug)]
#[command(name = "wbtree-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which values to insert, and in what order
    #[arg(long, value_enum, default_value = "fixed")]
    order: Order,

    /// Number of values to generate, for every order except `fixed`
    #[arg(short = 'n', long, default_value = "31")]
    count: usize,

    /// Seed for `--order shuffled`. A random seed is used if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Size of the buffer between the producer and the printer
    #[arg(short, long, default_value = "3")]
    capacity: usize,

    /// Log every rebalance
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    /// A fixed list of 31 short strings
    Fixed,
    /// The numbers `0..count`, ascending
    Ascending,
    /// The numbers `0..count`, descending
    Descending,
    /// The numbers `0..count`, shuffled
    Shuffled,
}

fn values(cli: &Cli) -> Vec<String> {
    let count = cli.count as u64;
    match cli.order {
        Order::Fixed => FIXED.iter().map(|s| s.to_string()).collect(),
        Order::Ascending => (0..count).map(|n| format!("{:05}", n)).collect(),
        Order::Descending => (0..count).rev().map(|n| format!("{:05}", n)).collect(),
        Order::Shuffled => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut res: Vec<_> = (0..count).map(|n| format!("{:05}", n)).collect();
            res.shuffle(&mut rng);
            res
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.capacity == 0 {
        anyhow::bail!("--capacity must be at least 1");
    }

    let mut tree = WBTree::new();
    for value in values(&cli) {
        debug!(%value, "inserting");
        tree.insert(value).context("inserting into the tree")?;
    }
    info!(
        len = tree.len(),
        height = tree.height(),
        order = ?cli.order,
        "tree built"
    );

    let (tx, mut rx) = mpsc::channel(cli.capacity);
    let producer = tokio::spawn(stream::send_owned(tree, tx));
    while let Some(value) = rx.recv().await {
        println!("{}", value);
    }
    let sent = producer.await.context("producer task failed")?;
    info!(sent, "done");
    Ok(())
}
