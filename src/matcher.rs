/*
matcher.rs

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

//! Manage the player's cell selection.
//!
//! The player builds a word by picking adjacent cells one after the other.
//! Picking a cell that is not next to the last selected cell starts a new selection.
//! After each pick, the letters of the selection, in the order the cells were picked, are
//! compared to the words still to be found.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Puzzle};

/// Shortest word that the matcher tries to recognize.
pub const MIN_WORD_LEN: usize = 3;

/// Result of a cell pick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The cell was added to the selection.
    Extended,

    /// The cell was not adjacent to the last selected cell and starts a new selection.
    Reset,

    /// The selection spells the given word, which is now found.
    WordFound(String),

    /// The pick was ignored.
    NoOp,
}

/// Current selection.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SelectionMatcher {
    /// Selected cells, in the order the player picked them.
    selection: Vec<Coord>,
}

impl SelectionMatcher {
    /// Create a [`SelectionMatcher`] object.
    pub fn new() -> Self {
        Self {
            selection: Vec::new(),
        }
    }

    /// Return the selected cells.
    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    /// Drop the current selection.
    pub fn clear(&mut self, puzzle: &mut Puzzle) {
        self.selection.clear();
        puzzle.grid_mut().clear_selection();
    }

    /// Process a cell that the player picked.
    ///
    /// Picking a found cell is a [`MatchOutcome::NoOp`], unless a word still to be found goes
    /// through that cell (crossing words, or a letter revealed by a hint).
    pub fn select(&mut self, puzzle: &mut Puzzle, coord: Coord) -> MatchOutcome {
        if puzzle.all_words_found() {
            return MatchOutcome::NoOp;
        }
        match puzzle.grid().get(coord) {
            None => return MatchOutcome::NoOp,
            // A found cell is still available when another word goes through it
            Some(cell) if cell.is_found() && !puzzle.is_needed(coord) => {
                return MatchOutcome::NoOp;
            }
            Some(_) => (),
        }

        let outcome: MatchOutcome = match self.selection.last().copied() {
            Some(last) if !last.is_adjacent(coord) => {
                self.clear(puzzle);
                MatchOutcome::Reset
            }
            _ => MatchOutcome::Extended,
        };
        self.selection.push(coord);
        if let Some(cell) = puzzle.grid_mut().get_mut(coord) {
            cell.set_selected(true);
        }

        if outcome == MatchOutcome::Extended
            && let Some(word) = self.check_word(puzzle)
        {
            return MatchOutcome::WordFound(word);
        }
        outcome
    }

    /// Compare the selection to the words still to be found, and commit the first match.
    fn check_word(&mut self, puzzle: &mut Puzzle) -> Option<String> {
        if self.selection.len() < MIN_WORD_LEN {
            return None;
        }
        let spelled: String = puzzle.grid().read_path(&self.selection);
        debug!("Selection {:?} spells {spelled}", self.selection);

        let (grid, words) = puzzle.parts_mut();
        let word = words
            .iter_mut()
            .find(|w| !w.is_found() && w.text() == spelled)?;
        word.mark_found();
        for coord in word.path() {
            if let Some(cell) = grid.get_mut(*coord) {
                cell.mark_found();
            }
        }
        debug!("Word {spelled} found");

        self.clear(puzzle);
        Some(spelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, PlacedWord};

    /// К О Т
    /// Д О М
    /// Ы Р Ь
    fn puzzle() -> Puzzle {
        let letters: Vec<char> = "КОТДОМЫРЬ".chars().collect();
        let grid = Grid::from_letters(3, &letters).unwrap();
        let words = vec![
            PlacedWord::new("КОТ", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]),
            PlacedWord::new("ДОМ", vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]),
        ];
        Puzzle::new(grid, words, Vec::new())
    }

    #[test]
    fn word_is_found_in_pick_order() {
        let mut puzzle = puzzle();
        let mut matcher = SelectionMatcher::new();

        assert_eq!(matcher.select(&mut puzzle, Coord::new(0, 0)), MatchOutcome::Extended);
        assert_eq!(matcher.select(&mut puzzle, Coord::new(1, 0)), MatchOutcome::Extended);
        assert!(puzzle.grid().get(Coord::new(1, 0)).unwrap().is_selected());
        assert_eq!(
            matcher.select(&mut puzzle, Coord::new(2, 0)),
            MatchOutcome::WordFound("КОТ".to_string())
        );

        assert!(matcher.selection().is_empty());
        assert!(puzzle.words()[0].is_found());
        assert_eq!(puzzle.found_words(), vec!["КОТ"]);
        for x in 0..3 {
            let cell = puzzle.grid().get(Coord::new(x, 0)).unwrap();
            assert!(cell.is_found());
            assert!(!cell.is_selected());
        }
    }

    #[test]
    fn non_adjacent_pick_starts_a_new_selection() {
        let mut puzzle = puzzle();
        let mut matcher = SelectionMatcher::new();

        matcher.select(&mut puzzle, Coord::new(0, 0));
        assert_eq!(matcher.select(&mut puzzle, Coord::new(1, 1)), MatchOutcome::Reset);
        assert_eq!(matcher.selection(), &[Coord::new(1, 1)]);
        assert!(!puzzle.grid().get(Coord::new(0, 0)).unwrap().is_selected());
    }

    #[test]
    fn reverse_order_does_not_match() {
        let mut puzzle = puzzle();
        let mut matcher = SelectionMatcher::new();

        matcher.select(&mut puzzle, Coord::new(2, 0));
        matcher.select(&mut puzzle, Coord::new(1, 0));
        assert_eq!(matcher.select(&mut puzzle, Coord::new(0, 0)), MatchOutcome::Extended);
        assert!(!puzzle.words()[0].is_found());
    }

    #[test]
    fn found_cells_are_ignored() {
        let mut puzzle = puzzle();
        let mut matcher = SelectionMatcher::new();

        for x in 0..3 {
            matcher.select(&mut puzzle, Coord::new(x, 0));
        }
        for x in 0..3 {
            assert_eq!(matcher.select(&mut puzzle, Coord::new(x, 0)), MatchOutcome::NoOp);
        }
        assert!(matcher.selection().is_empty());
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut puzzle = puzzle();
        let mut matcher = SelectionMatcher::new();

        matcher.select(&mut puzzle, Coord::new(0, 0));
        assert_eq!(matcher.select(&mut puzzle, Coord::new(3, 0)), MatchOutcome::NoOp);
        assert_eq!(matcher.selection(), &[Coord::new(0, 0)]);
    }

    #[test]
    fn short_selection_never_matches() {
        let letters: Vec<char> = "ЯЩЩЩ".chars().collect();
        let grid = Grid::from_letters(2, &letters).unwrap();
        let words = vec![PlacedWord::new("Я", vec![Coord::new(0, 0)])];
        let mut puzzle = Puzzle::new(grid, words, Vec::new());
        let mut matcher = SelectionMatcher::new();

        assert_eq!(matcher.select(&mut puzzle, Coord::new(0, 0)), MatchOutcome::Extended);
        assert!(!puzzle.all_words_found());
    }

    #[test]
    fn completed_puzzle_ignores_picks() {
        let mut puzzle = puzzle();
        let mut matcher = SelectionMatcher::new();

        for y in 0..2 {
            for x in 0..3 {
                matcher.select(&mut puzzle, Coord::new(x, y));
            }
        }
        assert!(puzzle.all_words_found());

        let before = puzzle.clone();
        assert_eq!(matcher.select(&mut puzzle, Coord::new(0, 2)), MatchOutcome::NoOp);
        assert_eq!(puzzle, before);
        assert!(matcher.selection().is_empty());
    }

    #[test]
    fn found_cell_shared_with_an_unfound_word_stays_selectable() {
        // К О Т
        // Щ Щ О
        // Щ Щ К
        let letters: Vec<char> = "КОТЩЩОЩЩК".chars().collect();
        let grid = Grid::from_letters(3, &letters).unwrap();
        let words = vec![
            PlacedWord::new("КОТ", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]),
            PlacedWord::new("ТОК", vec![Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)]),
        ];
        let mut puzzle = Puzzle::new(grid, words, Vec::new());
        let mut matcher = SelectionMatcher::new();

        for x in 0..3 {
            matcher.select(&mut puzzle, Coord::new(x, 0));
        }
        assert_eq!(matcher.select(&mut puzzle, Coord::new(2, 0)), MatchOutcome::Extended);
        matcher.select(&mut puzzle, Coord::new(2, 1));
        assert_eq!(
            matcher.select(&mut puzzle, Coord::new(2, 2)),
            MatchOutcome::WordFound("ТОК".to_string())
        );
        assert!(puzzle.all_words_found());
    }
}
