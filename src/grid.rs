/*
grid.rs

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

//! Letter grid, cells, and placed words.
//!
//! A [`Grid`] is a square matrix of [`Cell`] objects stored row by row.
//! The letters never change after generation. Only the play flags of the cells (selected,
//! found, hinted) change during a game, and only through the [`crate::matcher`] and
//! [`crate::hint`] modules: the mutating methods are crate private.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell coordinates. `x` is the column and `y` the row, both starting at 0.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Create a [`Coord`] object.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the two cells share a side (same row or same column, one step apart).
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    letter: char,

    /// The cell is part of the player's current selection.
    selected: bool,

    /// The cell belongs to a found word, or a hint revealed it.
    found: bool,

    /// A hint revealed the cell.
    hinted: bool,
}

impl Cell {
    pub(crate) fn new(coord: Coord, letter: char) -> Self {
        Self {
            coord,
            letter,
            selected: false,
            found: false,
            hinted: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn is_hinted(&self) -> bool {
        self.hinted
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Mark the cell as part of a found word. This supersedes a previous hint.
    pub(crate) fn mark_found(&mut self) {
        self.found = true;
        self.hinted = false;
    }

    /// Mark the cell as revealed by a hint.
    pub(crate) fn mark_hinted(&mut self) {
        self.found = true;
        self.hinted = true;
    }
}

/// Square letter grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,

    /// Cells, row by row.
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a [`Grid`] object from a row-major list of letters.
    ///
    /// Return None if the size is zero or if the number of letters is not `size * size`.
    pub fn from_letters(size: usize, letters: &[char]) -> Option<Self> {
        if size == 0 || letters.len() != size * size {
            return None;
        }
        let cells: Vec<Cell> = letters
            .iter()
            .enumerate()
            .map(|(i, l)| Cell::new(Coord::new(i % size, i / size), *l))
            .collect();
        Some(Self { size, cells })
    }

    /// Number of rows (and of columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinates are inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.size + coord.x)
        } else {
            None
        }
    }

    /// Return the cell at the given coordinates.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(|i| &mut self.cells[i])
    }

    /// Return the letter at the given coordinates.
    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.get(coord).map(|c| c.letter)
    }

    /// Iterate over all the cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Read the letters along the given path.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn read_path(&self, path: &[Coord]) -> String {
        path.iter().filter_map(|c| self.letter(*c)).collect()
    }

    pub(crate) fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.letter.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Word placed in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    text: String,

    /// Cells that hold the word letters, in reading order.
    path: Vec<Coord>,

    /// Whether all the cells are on the same row.
    /// Only informative, the path gives the real layout.
    horizontal: bool,

    found: bool,
}

impl PlacedWord {
    /// Create a [`PlacedWord`] object.
    pub fn new(text: &str, path: Vec<Coord>) -> Self {
        let horizontal: bool = path.windows(2).all(|w| w[0].y == w[1].y);
        Self {
            text: text.to_string(),
            path,
            horizontal,
            found: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Return the first cell of the path.
    pub fn start(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    pub(crate) fn mark_found(&mut self) {
        self.found = true;
    }
}

/// Reason why the generator could not place a word.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No start cell leads to a complete path.
    NoPath,

    /// The search for this word used up its step budget.
    BudgetExceeded,
}

/// Word that the generator left out of the puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkippedWord {
    pub word: String,
    pub reason: SkipReason,
}

/// Generated puzzle: the grid, the words that were placed, and the words that were not.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<PlacedWord>,
    skipped: Vec<SkippedWord>,
}

impl Puzzle {
    /// Create a [`Puzzle`] object.
    pub fn new(grid: Grid, words: Vec<PlacedWord>, skipped: Vec<SkippedWord>) -> Self {
        Self {
            grid,
            words,
            skipped,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed words, in the order they were given to the generator.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Words that could not be placed.
    pub fn skipped(&self) -> &[SkippedWord] {
        &self.skipped
    }

    /// Texts of the words already found.
    pub fn found_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.found)
            .map(|w| w.text.as_str())
            .collect()
    }

    /// Number of words already found.
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    /// Whether the player found all the words.
    pub fn all_words_found(&self) -> bool {
        self.words.iter().all(|w| w.found)
    }

    /// Whether a word still to be found goes through the given cell.
    pub fn is_needed(&self, coord: Coord) -> bool {
        self.words
            .iter()
            .any(|w| !w.found && w.path.contains(&coord))
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Grid, &mut Vec<PlacedWord>) {
        (&mut self.grid, &mut self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_four_way() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(1, 0)));
        assert!(c.is_adjacent(Coord::new(2, 1)));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
        assert!(!c.is_adjacent(Coord::new(1, 1)));
        assert!(!c.is_adjacent(Coord::new(3, 1)));
    }

    #[test]
    fn grid_reads_paths_row_major() {
        let grid = Grid::from_letters(2, &['А', 'Б', 'В', 'Г']).unwrap();

        assert_eq!(grid.letter(Coord::new(1, 0)), Some('Б'));
        assert_eq!(grid.letter(Coord::new(0, 1)), Some('В'));
        assert_eq!(grid.letter(Coord::new(2, 0)), None);
        assert_eq!(
            grid.read_path(&[Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]),
            "АВГ"
        );
        assert_eq!(grid.to_string(), "А Б\nВ Г\n");
    }

    #[test]
    fn grid_rejects_wrong_letter_count() {
        assert!(Grid::from_letters(2, &['А', 'Б', 'В']).is_none());
    }

    #[test]
    fn placed_word_orientation_follows_path() {
        let row = PlacedWord::new("КОТ", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]);
        let bent = PlacedWord::new("КОТ", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]);

        assert!(row.is_horizontal());
        assert!(!bent.is_horizontal());
        assert_eq!(bent.start(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn found_flag_overrides_hint() {
        let mut cell = Cell::new(Coord::new(0, 0), 'К');
        cell.mark_hinted();
        assert!(cell.is_found() && cell.is_hinted());
        cell.mark_found();
        assert!(cell.is_found() && !cell.is_hinted());
    }
}
