//! Train command - Train the Nim Q-learning agent by self-play

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::output::{create_training_progress, format_number, print_kv, print_section},
    nim::{NimAgent, agent::NimAgentState},
};

#[derive(Parser, Debug)]
#[command(about = "Train a Nim agent by self-play")]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: usize,

    /// Learning rate alpha (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,

    /// Exploration rate epsilon (0.0-1.0)
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Starting piles, comma-separated (e.g. "1,3,5,7")
    #[arg(long, default_value = "1,3,5,7")]
    pub piles: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Resume training from a saved agent file
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file for the trained agent
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

/// Parse starting piles from string (e.g. "1,3,5,7")
fn parse_piles(s: &str) -> Result<Vec<u32>> {
    let piles: Vec<u32> = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| anyhow!("Invalid pile count '{part}': {e}"))
        })
        .collect::<Result<Vec<_>>>()?;

    if piles.is_empty() || piles.iter().all(|&p| p == 0) {
        return Err(anyhow!("Starting piles must contain at least one object"));
    }
    Ok(piles)
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let piles = parse_piles(&args.piles)?;

    let mut agent = if let Some(ref input_path) = args.input {
        let state = NimAgentState::load_from_file(input_path)?;
        println!("Resuming from: {}", input_path.display());
        println!(
            "  Stored Q-values: {}",
            format_number(state.q_table.size())
        );
        NimAgent::from_state(state)
    } else {
        let mut agent = NimAgent::new(args.alpha, args.epsilon);
        if let Some(seed) = args.seed {
            agent = agent.with_seed(seed);
        }
        agent
    };

    print_section("Nim Self-Play Training");
    print_kv("Episodes", &format_number(args.episodes));
    print_kv("Alpha", &format!("{}", args.alpha));
    print_kv("Epsilon", &format!("{}", args.epsilon));
    print_kv("Piles", &format!("{piles:?}"));
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }
    println!();

    // Train in chunks so the progress bar stays responsive
    const CHUNK: usize = 1_000;
    let bar = args.progress.then(|| {
        let bar = create_training_progress(args.episodes as u64);
        bar.set_message("training");
        bar
    });

    let mut remaining = args.episodes;
    while remaining > 0 {
        let batch = remaining.min(CHUNK);
        agent.train_from(&piles, batch)?;
        remaining -= batch;
        if let Some(ref bar) = bar {
            bar.inc(batch as u64);
        }
    }
    if let Some(bar) = bar {
        bar.finish_with_message("done");
    }

    println!("\n=== Training Complete ===");
    println!(
        "Learned Q-values: {}",
        format_number(agent.q_table().size())
    );

    // Show the greedy opening move for the trained policy
    if let Some(mv) = agent.choose_move(&piles, false) {
        println!(
            "Greedy opening: take {} from pile {}",
            mv.count,
            mv.pile + 1
        );
    }

    if let Some(output_path) = args.output {
        agent.export_state().save_to_file(&output_path)?;
        println!("Agent saved to: {}", output_path.display());
    }

    Ok(())
}
