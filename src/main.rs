#![allow(unused)]

mod base;
mod config;
mod engine;
mod error;
mod render;
mod utils;

use base::parse::{FilePuzzleSource, PuzzleSource};
use engine::solver::Solver;
use render::{SolveObserver, TextObserver};

fn main() -> error::Result<()> {
    let config = config::GlobalConfig::load();
    env_logger::Builder::from_default_env()
        .filter_level(config.log_level)
        .init();

    let Some(puzzle) = std::env::args().nth(1) else {
        eprintln!("usage: bimaru <puzzle-file>");
        return Ok(());
    };

    let path = utils::puzzle_path(&puzzle)?;
    let grid = FilePuzzleSource::new(path).load()?;
    println!("{}", render::draw(&grid));

    let mut solver = Solver::new(grid);
    let mut observer = TextObserver::new(config.show_grid_each_step);
    while let Some(solution) = solver.solve() {
        observer.observe(solver.grid(), &solution);
    }
    println!("No more solutions found");

    Ok(())
}
