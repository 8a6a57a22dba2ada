/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Fillwords.

Fillwords is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Fillwords is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Fillwords. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers creating levels.
//! In command-line mode, Fillwords lists the levels, generates grids, and plays a level by
//! reading the player's picks from the standard input.
//!
//! # Examples
//!
//! List the levels:
//!
//! ```text
//! $ fillwords --ls
//! Животные: Домашние, дикие и морские животные
//!     1 Домашние животные (4x4)
//!     2 Дикие животные (5x5) [locked]
//! ...
//! ```
//!
//! Generate three grids for level 2 and print some statistics:
//!
//! ```text
//! $ fillwords -l 2 -c 3 --summary
//! ```
//!
//! Generate a grid for a custom word list with a fixed seed:
//!
//! ```text
//! $ fillwords -s 5 -w КОТ,ДОМ,ЛЕС --seed 42
//! ```
//!
//! Play level 1. Enter the column and row of a cell (`0 2`), `hint`, `clear`, or `quit`:
//!
//! ```text
//! $ fillwords -l 1 --play --hint-level high
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use fillwords::game::Game;
use fillwords::generator::grid_generator::{GeneratorConfig, GridGenerator};
use fillwords::grid::{Coord, Puzzle};
use fillwords::levels::{self, HintLevel};
use fillwords::matcher::MatchOutcome;
use fillwords::progress::Progress;
use fillwords::saver::progress::SaverProgress;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate and play Fillwords grids.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// ID of the level to generate a grid for
    #[arg(short, long, group = "source")]
    level: Option<u32>,

    /// Grid size for a custom word list
    #[arg(short, long, requires = "words", group = "source")]
    size: Option<usize>,

    /// Custom word list, separated by commas
    #[arg(short, long, value_delimiter = ',', requires = "size")]
    words: Vec<String>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of grids to generate
    #[arg(
        short,
        long,
        default_value_t = 1,
        requires = "source",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,

    /// Print some statistics after generating the grids
    #[arg(long, default_value_t = false, requires = "source")]
    summary: bool,

    /// Play the grid, reading the picks from the standard input
    #[arg(short, long, default_value_t = false, requires = "source")]
    play: bool,

    /// Word list information to display while playing
    #[arg(value_enum, long, default_value_t = HintLevel::Easy)]
    hint_level: HintLevel,

    /// Directory where the progress is saved
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut store: SaverProgress = SaverProgress::new(args.data_dir.clone());
    let mut progress: Progress = Progress::load(&store)?;

    //
    // List the levels
    //
    if args.ls {
        list_levels(&progress);
        return Ok(());
    }

    let (level_id, size, words): (Option<u32>, usize, Vec<String>) = match (args.level, args.size)
    {
        (Some(id), _) => {
            let level = levels::find_level(id)
                .ok_or_else(|| format!("Unknown level {id}. Use --ls to list the levels."))?;
            if args.play && progress.is_locked(&level) {
                return Err(format!("Level {id} is locked").into());
            }
            (
                Some(id),
                level.size,
                level.words.iter().map(|w| w.to_string()).collect(),
            )
        }
        (None, Some(size)) => (None, size, args.words.clone()),
        (None, None) => return Err("Use --level, --size and --words, or --ls".into()),
    };

    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Seed = {seed}");
    let mut generator = GridGenerator::new(GeneratorConfig::default(), StdRng::seed_from_u64(seed));

    if args.play {
        let puzzle: Puzzle = generator.generate(size, words.as_slice())?;
        let mut game: Game = Game::new(puzzle, level_id);
        play(&mut game, args.hint_level)?;
        if let Some(result) = game.take_result() {
            println!(
                "Level completed! Time: {}s  Score: {}/100  {}",
                result.elapsed.as_secs(),
                result.score,
                result.stars
            );
            if let Some(id) = level_id {
                progress.record_completion(id, &result, &mut store)?;
            }
        }
        return Ok(());
    }

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut skipped: usize = 0;
    for i in 0..args.count {
        debug!("Grid {i}");
        let puzzle: Puzzle = generator.generate(size, words.as_slice())?;
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;
        skipped += puzzle.skipped().len();

        print!("{}", puzzle.grid());
        for word in puzzle.words() {
            let path: Vec<String> = word.path().iter().map(|c| c.to_string()).collect();
            println!("{}: {}", word.text(), path.join(" "));
        }
        for word in puzzle.skipped() {
            println!("{}: not placed ({:?})", word.word, word.reason);
        }
        println!();
    }

    // Print some stats
    if args.summary {
        println!(
            "
              seed = {}
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
     skipped words = {}",
            seed,
            total,
            total / args.count as f32,
            max,
            iterations / args.count as usize,
            skipped
        );
    }
    Ok(())
}

/// Print the categories and their levels.
fn list_levels(progress: &Progress) {
    for category in levels::catalog() {
        println!("{}: {}", category.name, category.description);
        for level in &category.levels {
            let status: String = if progress.is_completed(level.id) {
                match progress.get(level.id).and_then(|r| r.get_stars()) {
                    Some(stars) => format!(" {stars}"),
                    None => String::new(),
                }
            } else if progress.is_locked(level) {
                String::from(" [locked]")
            } else {
                String::new()
            };
            println!(
                "    {} {} ({}x{}){status}",
                level.id, level.name, level.size, level.size
            );
        }
    }
}

/// Print the grid with the column and row numbers. Found cells are lowercase and selected
/// cells are between brackets.
fn print_board(game: &Game) {
    let size: usize = game.grid().size();
    let header: Vec<String> = (0..size).map(|x| format!(" {x} ")).collect();
    println!("   {}", header.join(""));
    for (y, row) in game.grid().rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|c| {
                let letter: String = if c.is_found() {
                    c.letter().to_lowercase().to_string()
                } else {
                    c.letter().to_string()
                };
                if c.is_selected() {
                    format!("[{letter}]")
                } else {
                    format!(" {letter} ")
                }
            })
            .collect();
        println!("{y:>2} {}", cells.join(""));
    }
}

/// Read the player's commands until the level is completed or the input ends.
fn play(game: &mut Game, hint_level: HintLevel) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    print_board(game);
    if let Some(text) = game.progress_text(hint_level) {
        println!("{text}");
    }
    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line: String = line?;
        let line: &str = line.trim();
        match line {
            "quit" | "q" => break,
            "hint" | "h" => match game.hint() {
                Some(coord) => println!("Revealed cell {coord}"),
                None => println!("No hint available"),
            },
            "clear" | "c" => game.clear_selection(),
            _ => {
                let numbers: Vec<usize> = line
                    .split_whitespace()
                    .filter_map(|n| n.parse().ok())
                    .collect();
                if let [x, y] = numbers[..] {
                    match game.select(Coord::new(x, y)) {
                        MatchOutcome::WordFound(word) => println!("Found {word}!"),
                        MatchOutcome::Reset => println!("New selection"),
                        MatchOutcome::NoOp => println!("Cell ignored"),
                        MatchOutcome::Extended => (),
                    }
                } else {
                    println!("Enter a column and a row, `hint`, `clear`, or `quit`");
                }
            }
        }
        if game.all_words_found() {
            break;
        }
        print_board(game);
        if let Some(text) = game.progress_text(hint_level) {
            println!("{text}");
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
