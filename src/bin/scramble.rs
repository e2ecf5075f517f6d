use clap::Parser;
use eightpuzzle_solver::board::EightPuzzleBoard;
use rand::Rng;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random slides to apply from the goal state
    #[clap(short = 'n', long, default_value_t = 25)]
    steps: usize,

    /// Seed for the scramble; omit for a fresh random board
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let board = EightPuzzleBoard::goal().scrambled_from(args.steps, seed);

    println!(
        "Scrambled board after {} moves (seed {}):\n",
        args.steps, seed
    );
    println!("{}\n", board.render());
    println!("start string: {}", board);
}
