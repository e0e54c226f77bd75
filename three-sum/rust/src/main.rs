use anyhow::{Context, Result};
use three_sum::{find_zero_triplets, input::parse_sequence};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLES: [&[i32]; 3] = [&[-1, 0, 1, 2, -1, -4], &[0, 0, 0], &[-2, 0, 1, 1, 2]];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let sequences: Vec<Vec<i32>> = if args.is_empty() {
        info!("no sequences given, running samples");
        SAMPLES.iter().map(|s| s.to_vec()).collect()
    } else {
        args.iter()
            .map(|arg| parse_sequence(arg).with_context(|| format!("invalid sequence argument '{arg}'")))
            .collect::<Result<Vec<_>>>()?
    };

    for (i, values) in sequences.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Input: {values:?}");
        println!("Output: {}", find_zero_triplets(values));
    }

    Ok(())
}
