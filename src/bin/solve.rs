use clap::Parser;
use eightpuzzle_solver::board::EightPuzzleBoard;
use eightpuzzle_solver::report::format_table;
use eightpuzzle_solver::search::{solve, Strategy};
use eightpuzzle_solver::utils::is_solvable;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start state as a 9-character string (digits 0-8, 0 = blank),
    /// row-major from the top-left, e.g. 142375608
    start: String,

    /// Search flavors to run: bfs, ucost, greedy-h1/h2/h3,
    /// astar-h1/h2/h3, or "all"
    #[clap(default_value = "all")]
    flavors: Vec<String>,

    /// Include the full solution paths in the comparison table
    #[clap(long)]
    show_path: bool,
}

fn run(args: &Args) -> Result<(), String> {
    let start: EightPuzzleBoard = args.start.parse()?;

    let strategies: Vec<Strategy> = if args.flavors.iter().any(|f| f == "all") {
        Strategy::all()
    } else {
        args.flavors
            .iter()
            .map(|tag| Strategy::from_tag(tag))
            .collect::<Result<Vec<_>, _>>()?
    };

    let goal = EightPuzzleBoard::goal();
    if !is_solvable(&start, &goal) {
        eprintln!(
            "warning: puzzle {} is not solvable; every search will exhaust the frontier",
            start
        );
    }

    let mut results = Vec::with_capacity(strategies.len());
    for strategy in &strategies {
        println!("solving puzzle {} with {}", start, strategy);
        results.push((strategy.tag(), solve(&start, &goal, strategy)));
    }

    println!("\n{}\n", format_table(&results, args.show_path));
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(message) = run(&args) {
        eprintln!("error: {}", message);
        process::exit(2);
    }
}
