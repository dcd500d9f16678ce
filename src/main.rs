use clap::Parser;
use draughts_engine::agent::{Difficulty, NegamaxPlayer};
use draughts_engine::game_repr::{zobrist, Position};
use draughts_engine::orchestrator::Orchestrator;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "draughts_engine")]
#[command(about = "Engine-vs-engine international draughts match")]
struct Args {
    /// Difficulty of the White engine
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    white: Difficulty,

    /// Difficulty of the Black engine
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    black: Difficulty,

    /// The game is drawn after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Count leaf nodes of the starting position to this depth instead of playing
    #[arg(long)]
    perft: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    zobrist::init();

    if let Some(depth) = args.perft {
        let start = Instant::now();
        let nodes = Position::starting().perft_parallel(depth);
        println!("perft({}) = {} in {:?}", depth, nodes, start.elapsed());
        return;
    }

    let white = NegamaxPlayer::new(args.white, format!("White ({})", args.white.name()));
    let black = NegamaxPlayer::new(args.black, format!("Black ({})", args.black.name()));

    let mut orchestrator =
        Orchestrator::new(Box::new(white), Box::new(black)).with_max_plies(args.max_plies);
    let result = orchestrator.play();

    println!("{}", orchestrator.game().position());
    println!(
        "Result: {:?} after {} plies",
        result,
        orchestrator.game().ply_count()
    );
}
