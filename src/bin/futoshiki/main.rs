#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use futoshiki::puzzle::{format_solution, Grid};
use futoshiki::solve::{PuzzleSolver, SolveResult};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let grid = read_grid(options.input())?;
    println!("Puzzle:");
    print!("{}", grid);
    let result = PuzzleSolver::new(&grid)
        .model(options.model())
        .propagator(options.propagator())
        .ordering(options.ordering())
        .limit(options.limit())
        .solve()?;
    for (i, solution) in result.solutions().iter().enumerate() {
        println!();
        println!("Solution {}:", i + 1);
        println!("{}", format_solution(&grid, solution));
    }
    println!();
    let msg = match &result {
        SolveResult::Unsolvable(_) => "Puzzle is not solvable",
        SolveResult::Solved(data) if data.complete => "Puzzle solved, the solution is unique",
        SolveResult::Solved(_) => "Puzzle solved",
        SolveResult::MultipleSolutions(_) => "Puzzle has multiple solutions",
    };
    println!("{}", msg);
    println!("{}", result.stats());
    Ok(())
}

fn read_grid(path: Option<&Path>) -> Result<Grid> {
    let grid: Grid = match path {
        Some(path) => Grid::from_file(path)
            .with_context(|| format!("failed to read puzzle from \"{}\"", path.display()))?,
        None => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .context("failed to read puzzle from stdin")?;
            s.parse().context("failed to parse puzzle")?
        }
    };
    Ok(grid)
}
