use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use pvalue_tpr::config::{DEFAULT_SCORES_PATH, SCORES_FILE};
use pvalue_tpr::{bool_flag, SIGNIFICANCE_THRESHOLD};

/// Write a synthetic scores.jsonl for trying out `pvalue-tpr`.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output directory; created if missing.
    #[arg(long = "scores_path", default_value = DEFAULT_SCORES_PATH)]
    scores_path: PathBuf,

    #[arg(long = "num_samples", default_value_t = 1000)]
    num_samples: usize,

    /// Share of samples drawn below the significance threshold.
    #[arg(long = "positive_fraction", default_value_t = 0.25)]
    positive_fraction: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Replace an existing scores.jsonl (yes/no, true/false, 1/0 ...).
    #[arg(long, value_parser = bool_flag, action = clap::ArgAction::Set, default_value = "false")]
    overwrite: bool,
}

#[derive(Serialize)]
struct ScoreLine {
    sample_id: usize,
    pvalue: f64,
    positive: bool,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Positives land in `[0, threshold)`, the rest in `[threshold, 1)`.
fn draw_pvalue(rng: &mut SimpleRng, positive: bool) -> f64 {
    let u = rng.next_f64();
    if positive {
        u * SIGNIFICANCE_THRESHOLD
    } else {
        SIGNIFICANCE_THRESHOLD + u * (1.0 - SIGNIFICANCE_THRESHOLD)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.num_samples == 0 {
        bail!("--num_samples must be at least 1");
    }
    if !(0.0..=1.0).contains(&args.positive_fraction) {
        bail!(
            "--positive_fraction must be within [0, 1], got {}",
            args.positive_fraction
        );
    }

    fs::create_dir_all(&args.scores_path)
        .with_context(|| format!("creating {}", args.scores_path.display()))?;
    let output_path = args.scores_path.join(SCORES_FILE);
    if output_path.exists() && !args.overwrite {
        bail!(
            "{} already exists; pass --overwrite yes to replace it",
            output_path.display()
        );
    }

    let mut rng = SimpleRng::new(args.seed);
    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut positives = 0usize;
    for sample_id in 0..args.num_samples {
        let positive = rng.next_f64() < args.positive_fraction;
        let line = ScoreLine {
            sample_id,
            pvalue: draw_pvalue(&mut rng, positive),
            positive,
        };
        serde_json::to_writer(&mut writer, &line).context("serializing score line")?;
        writeln!(writer).context("writing score line")?;
        positives += usize::from(positive);
    }
    writer.flush().context("flushing scores file")?;

    log::info!("seed {}: {positives} positives", args.seed);
    println!(
        "Wrote {} scores ({positives} below p = {SIGNIFICANCE_THRESHOLD}) to {}",
        args.num_samples,
        output_path.display()
    );
    Ok(())
}
