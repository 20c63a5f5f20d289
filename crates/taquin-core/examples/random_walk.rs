//! Example scrambling a board with a seeded random walk.
//!
//! This example shows how to:
//! - Create a solved board of a chosen side
//! - Walk it with random legal moves, skipping immediate backtracks
//! - Display the result and its line encoding
//!
//! The walk is driven by a seeded PCG generator, so the same arguments
//! always produce the same board.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example random_walk
//! ```
//!
//! Pick the board side and walk length:
//!
//! ```sh
//! cargo run --example random_walk -- --side 5 --steps 200
//! ```
//!
//! Reproduce a particular scramble:
//!
//! ```sh
//! cargo run --example random_walk -- --seed 7
//! ```

use clap::Parser;
use rand::{RngExt, SeedableRng};
use rand_pcg::Pcg64;
use taquin_core::{Direction, PuzzleState};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side (the classic 15-puzzle is side 4).
    #[arg(long, value_name = "SIDE", default_value_t = 4)]
    side: usize,

    /// Number of random moves to apply.
    #[arg(long, value_name = "COUNT", default_value_t = 64)]
    steps: usize,

    /// Seed for the walk.
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let state = match PuzzleState::solved(args.side) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut rng = Pcg64::seed_from_u64(args.seed);
    let scrambled = walk(state, args.steps, &mut rng);

    println!("Seed:");
    println!("  {}", args.seed);
    println!();
    println!("Walk:");
    println!("  {} steps requested, {} applied", args.steps, scrambled.move_count());
    println!();
    println!("Board:");
    print!("{scrambled}");
    println!();
    println!("Line:");
    println!("  {}", scrambled.to_line());
}

/// Applies `steps` random legal moves, never undoing the previous one.
fn walk(mut state: PuzzleState, steps: usize, rng: &mut Pcg64) -> PuzzleState {
    let mut last: Option<Direction> = None;
    for _ in 0..steps {
        let candidates: Vec<Direction> = state
            .legal_directions()
            .into_iter()
            .filter(|direction| Some(direction.opposite()) != last)
            .collect();
        let Some(&direction) = candidates.get(rng.random_range(0..candidates.len().max(1))) else {
            break;
        };
        state
            .apply(direction)
            .expect("legal_directions returned it");
        last = Some(direction);
    }
    state
}
