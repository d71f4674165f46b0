use anyhow::{bail, Context};
use byte_ring::{RingBuffer, RingBufferError};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Random producer/consumer bursts over a single byte ring.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of byte slots in the ring
    #[arg(long, default_value_t = 10)]
    capacity: usize,

    /// Producer/consumer rounds to run
    #[arg(long, default_value_t = 100)]
    rounds: usize,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Default)]
struct Stats {
    written: usize,
    read: usize,
    rejected_writes: usize,
    rejected_reads: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut storage = vec![0u8; args.capacity];
    let mut buffer = RingBuffer::new();
    buffer
        .init(&mut storage, args.capacity)
        .context("could not bind ring buffer storage")?;

    let mut stats = Stats::default();
    // Producer writes an incrementing sequence, so the consumer knows what comes next.
    let mut next_write: u8 = 0;
    let mut next_read: u8 = 0;

    for round in 0..args.rounds {
        let burst = rng.gen_range(0..=args.capacity);
        for _ in 0..burst {
            match buffer.write(next_write) {
                Ok(()) => {
                    next_write = next_write.wrapping_add(1);
                    stats.written += 1;
                }
                Err(RingBufferError::Full { .. }) => stats.rejected_writes += 1,
                Err(err) => return Err(err.into()),
            }
        }

        let burst = rng.gen_range(0..=args.capacity);
        for _ in 0..burst {
            match buffer.read() {
                Ok(value) => {
                    if value != next_read {
                        bail!("FIFO order broken in round {round}: expected {next_read:#04x}, got {value:#04x}");
                    }
                    next_read = next_read.wrapping_add(1);
                    stats.read += 1;
                }
                Err(RingBufferError::Empty) => stats.rejected_reads += 1,
                Err(err) => return Err(err.into()),
            }
        }

        debug!(round, elems = buffer.elems_cnt(), "round done");
    }

    info!(
        written = stats.written,
        read = stats.read,
        rejected_writes = stats.rejected_writes,
        rejected_reads = stats.rejected_reads,
        "simulation finished"
    );
    println!("elements left in ring : {}", buffer.elems_cnt());
    buffer.deinit();
    Ok(())
}
