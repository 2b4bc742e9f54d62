use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use rusty_maze::persist;

/// Solveur de labyrinthes texte: BFS, DFS, et rendu du chemin trouvé.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path to the file containing the maze
    #[arg(short, long)]
    maze_file: PathBuf,

    /// The algorithm used for solving the maze
    #[arg(short, long, value_enum)]
    algorithm: Algorithm,

    /// The filename prefix of the output
    #[arg(short, long)]
    output: String,

    /// Whether to save the maze in a serialized format
    #[arg(short, long)]
    save_state: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Bfs,
    Dfs,
    Both,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut maze = persist::load_maze_source(&args.maze_file)?;

    if args.algorithm == Algorithm::Bfs || args.algorithm == Algorithm::Both {
        if let Some(solution) = maze.view_bfs() {
            let out_path = format!("{}_bfs.txt", args.output);
            fs::write(&out_path, solution)?;
            println!("BFS solution written to {}", out_path);
        }
    }

    if args.algorithm == Algorithm::Dfs || args.algorithm == Algorithm::Both {
        if let Some(solution) = maze.view_dfs() {
            let out_path = format!("{}_dfs.txt", args.output);
            fs::write(&out_path, solution)?;
            println!("DFS solution written to {}", out_path);
        }
    }

    if args.save_state {
        let state_path = format!("{}.{}", args.output, persist::STATE_EXTENSION);
        persist::save_maze(&maze, Path::new(&state_path))?;
        println!("Maze state saved to {}", state_path);
    }

    Ok(())
}
