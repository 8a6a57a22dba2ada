/*
grid_generator.rs

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

//! Place words along random paths in a letter grid.
//!
//! The words are placed one after the other, in the order they are provided, so that the
//! first words constrain the next ones.
//! For each word, the start cells are tried in row-major order. From the start cell, the path
//! grows one cell at a time in a randomly shuffled direction (down, right, up, left) and
//! backtracks on dead ends.
//! A path can go through a cell of a previously placed word when the letters are the same.
//!
//! A word that cannot be placed is left out of the puzzle and reported in
//! [`Puzzle::skipped`].

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::path::Path;
use crate::error::{GenerateError, Result};
use crate::grid::{Coord, Grid, PlacedWord, Puzzle, SkipReason, SkippedWord};

/// Letters used to fill the cells that no word covers.
pub const DEFAULT_ALPHABET: &str = "АБВГДЕЖЗИКЛМНОПРСТУФХЦЧШЩЫЭЮЯ";

/// Max number of search steps for placing one word. When the budget is exhausted, the word is
/// skipped. Steps are counted instead of time so that seeded generations stay reproducible.
pub const DEFAULT_MAX_STEPS: usize = 200_000;

/// Down, right, up, left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Generator parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Filler letters.
    pub alphabet: Vec<char>,

    /// Search step budget for each word.
    pub max_steps: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Working letter buffer. `None` marks an empty cell.
struct Board {
    size: usize,
    letters: Vec<Option<char>>,
}

impl Board {
    fn new(size: usize) -> Self {
        Self {
            size,
            letters: vec![None; size * size],
        }
    }

    fn get(&self, coord: Coord) -> Option<char> {
        self.letters[coord.y * self.size + coord.x]
    }

    fn set(&mut self, coord: Coord, letter: char) {
        self.letters[coord.y * self.size + coord.x] = Some(letter);
    }

    /// Whether the cell is empty or already holds the given letter.
    fn accepts(&self, coord: Coord, letter: char) -> bool {
        match self.get(coord) {
            Some(l) => l == letter,
            None => true,
        }
    }

    fn neighbor(&self, coord: Coord, (dx, dy): (isize, isize)) -> Option<Coord> {
        let x: usize = coord.x.checked_add_signed(dx)?;
        let y: usize = coord.y.checked_add_signed(dy)?;
        if x < self.size && y < self.size {
            Some(Coord::new(x, y))
        } else {
            None
        }
    }
}

/// [`GridGenerator`] object.
pub struct GridGenerator<R: Rng> {
    config: GeneratorConfig,

    /// Random source for the direction order and the filler letters.
    rng: R,

    /// Number of search steps for the current word.
    steps: usize,

    /// Number of search steps it took to generate the last grid.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last grid.
    pub duration: f32,
}

impl GridGenerator<StdRng> {
    /// Create a generator with the default configuration and a seeded random source, so that
    /// the generated grids are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GeneratorConfig::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridGenerator<R> {
    /// Create the object.
    pub fn new(config: GeneratorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            steps: 0,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Generate a `size` x `size` grid that contains the given words.
    ///
    /// # Errors
    ///
    /// The method returns an error if the size is zero, if the word list is empty, or if a
    /// word is empty. Words that do not fit are not errors: they are listed in
    /// [`Puzzle::skipped`].
    pub fn generate<S: AsRef<str>>(&mut self, size: usize, words: &[S]) -> Result<Puzzle> {
        if size == 0 {
            return Err(GenerateError::InvalidSize);
        }
        if words.is_empty() {
            return Err(GenerateError::NoWords);
        }
        if let Some(i) = words.iter().position(|w| w.as_ref().is_empty()) {
            return Err(GenerateError::EmptyWord(i));
        }
        if self.config.alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        let start: Instant = Instant::now();
        self.iteration = 0;

        let mut board: Board = Board::new(size);
        let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
        let mut skipped: Vec<SkippedWord> = Vec::new();

        for word in words {
            let word: &str = word.as_ref();
            let letters: Vec<char> = word.chars().collect();
            match self.place_word(&letters, &mut board) {
                Ok(path) => {
                    debug!("Word {word} placed at {:?}", path);
                    placed.push(PlacedWord::new(word, path));
                }
                Err(reason) => {
                    warn!("Cannot place word {word} in a {size}x{size} grid: {reason:?}");
                    skipped.push(SkippedWord {
                        word: word.to_string(),
                        reason,
                    });
                }
            }
            self.iteration += self.steps;
        }

        let letters: Vec<char> = board
            .letters
            .iter()
            .map(|l| match l {
                Some(l) => *l,
                None => self.filler(),
            })
            .collect();
        let grid: Grid = Grid::from_letters(size, &letters).ok_or(GenerateError::InvalidSize)?;

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        Ok(Puzzle::new(grid, placed, skipped))
    }

    /// Return a random filler letter.
    fn filler(&mut self) -> char {
        let i: usize = self.rng.random_range(0..self.config.alphabet.len());
        self.config.alphabet[i]
    }

    /// Find a path for the word and write its letters in the board.
    fn place_word(
        &mut self,
        word: &[char],
        board: &mut Board,
    ) -> core::result::Result<Vec<Coord>, SkipReason> {
        self.steps = 0;
        if word.len() > board.size * board.size {
            return Err(SkipReason::NoPath);
        }

        let mut path: Path = Path::new(word.len());
        for y in 0..board.size {
            for x in 0..board.size {
                let start: Coord = Coord::new(x, y);
                if !board.accepts(start, word[0]) {
                    continue;
                }
                path.clear();
                path.push(start);
                match self.find_path(word, board, &mut path) {
                    Ok(()) => {
                        for (coord, letter) in path.get().iter().zip(word) {
                            board.set(*coord, *letter);
                        }
                        return Ok(path.into_vec());
                    }
                    Err(SkipReason::BudgetExceeded) => return Err(SkipReason::BudgetExceeded),
                    Err(SkipReason::NoPath) => (),
                }
            }
        }
        Err(SkipReason::NoPath)
    }

    /// Recursively extend the path from its last cell.
    fn find_path(
        &mut self,
        word: &[char],
        board: &Board,
        path: &mut Path,
    ) -> core::result::Result<(), SkipReason> {
        if path.len() == word.len() {
            return Ok(());
        }

        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(SkipReason::BudgetExceeded);
        }

        let tail: Coord = path.get_last().ok_or(SkipReason::NoPath)?;
        let next_letter: char = word[path.len()];

        // Randomize the order in which to test the directions
        let mut directions = DIRECTIONS;
        directions.shuffle(&mut self.rng);

        for direction in directions {
            let Some(next) = board.neighbor(tail, direction) else {
                continue;
            };
            if path.contains(next) || !board.accepts(next, next_letter) {
                continue;
            }

            path.push(next);
            match self.find_path(word, board, path) {
                Ok(()) => return Ok(()),
                Err(SkipReason::BudgetExceeded) => return Err(SkipReason::BudgetExceeded),
                Err(SkipReason::NoPath) => path.pop(),
            }
        }
        Err(SkipReason::NoPath)
    }
}

/// Generate a grid with the default configuration and the thread random source.
///
/// # Errors
///
/// See [`GridGenerator::generate`].
pub fn generate<S: AsRef<str>>(size: usize, words: &[S]) -> Result<Puzzle> {
    GridGenerator::new(GeneratorConfig::default(), rand::rng()).generate(size, words)
}
