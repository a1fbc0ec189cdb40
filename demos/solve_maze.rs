use grid_maze::{Algorithm, Maze, Step, DEFAULT_COLS, DEFAULT_ROWS};

// Generates a maze, then solves it with the algorithm named by the first argument (BFS by
// default) and prints the grid before and after. An optional second argument sets a seed.
//
// Legend:
// - # wall
// - S start, E end
// - * path, o visited

fn main() {
    let mut args = std::env::args().skip(1);
    let algorithm = match args.next().map(|s| s.parse::<Algorithm>()) {
        Some(Ok(algorithm)) => algorithm,
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        None => Algorithm::Bfs,
    };
    let mut maze = match args.next().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => Maze::with_seed(DEFAULT_ROWS, DEFAULT_COLS, seed),
        None => Maze::new(DEFAULT_ROWS, DEFAULT_COLS),
    };
    let report = maze.generate_random_maze();
    println!("{}", maze.grid());
    println!("{} rooms, {} cells carved", report.rooms, report.carved);

    let mut visits = 0;
    let outcome = maze.solve_with(algorithm, |_, step| {
        if let Step::Visit(_) = step {
            visits += 1;
        }
    });
    println!("{}", maze.grid());
    match outcome.edge_count() {
        Some(edges) => println!("{algorithm}: {visits} cells visited, path of {edges} moves"),
        None => println!("{algorithm}: {visits} cells visited, no path"),
    }
}
