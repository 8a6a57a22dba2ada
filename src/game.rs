/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the puzzle of one level, the player's selection, and the game timer.
//! When the player finds the last word, the game computes the [`LevelResult`] once; after that,
//! the game ignores the player's picks and hint requests.

use log::debug;
use std::time::{Duration, Instant};

use crate::grid::{Coord, Grid, PlacedWord, Puzzle};
use crate::hint;
use crate::levels::HintLevel;
use crate::matcher::{MatchOutcome, SelectionMatcher};
use crate::scoring::LevelResult;

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Level identifier, when the puzzle comes from the catalog.
    level_id: Option<u32>,

    puzzle: Puzzle,

    matcher: SelectionMatcher,

    /// Number of hints the player used.
    hints_used: usize,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// Result, set when the last word is found.
    result: Option<LevelResult>,

    /// Whether [`Game::take_result`] already returned the result.
    result_taken: bool,
}

impl Game {
    /// Create a [`Game`] object and start the timer.
    ///
    /// A puzzle without any placed word is completed right away.
    pub fn new(puzzle: Puzzle, level_id: Option<u32>) -> Self {
        let mut game = Self {
            level_id,
            puzzle,
            matcher: SelectionMatcher::new(),
            hints_used: 0,
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
            result: None,
            result_taken: false,
        };
        game.check_completion();
        game
    }

    pub fn level_id(&self) -> Option<u32> {
        self.level_id
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    pub fn words(&self) -> &[PlacedWord] {
        self.puzzle.words()
    }

    pub fn found_words(&self) -> Vec<&str> {
        self.puzzle.found_words()
    }

    /// Whether the player found all the words.
    pub fn all_words_found(&self) -> bool {
        self.puzzle.all_words_found()
    }

    /// Return the selected cells.
    pub fn selection(&self) -> &[Coord] {
        self.matcher.selection()
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Process a cell that the player picked.
    pub fn select(&mut self, coord: Coord) -> MatchOutcome {
        if self.paused || self.result.is_some() {
            return MatchOutcome::NoOp;
        }
        let outcome: MatchOutcome = self.matcher.select(&mut self.puzzle, coord);
        if matches!(outcome, MatchOutcome::WordFound(_)) {
            self.check_completion();
        }
        outcome
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.matcher.clear(&mut self.puzzle);
    }

    /// Reveal one cell of the first word still to be found.
    pub fn hint(&mut self) -> Option<Coord> {
        if self.paused || self.result.is_some() {
            return None;
        }
        let coord: Option<Coord> = hint::hint(&mut self.puzzle);
        if coord.is_some() {
            self.hints_used += 1;
        }
        coord
    }

    /// Compute the result when the last word is found.
    fn check_completion(&mut self) {
        if self.result.is_none() && self.puzzle.all_words_found() {
            let result: LevelResult = LevelResult::from_elapsed(self.get_duration());
            debug!(
                "Level completed in {}s: {} stars, score {}",
                result.elapsed.as_secs(),
                result.stars.count(),
                result.score
            );
            self.result = Some(result);
        }
    }

    /// Return the level result the first time it is called after the last word is found.
    /// Later calls return None.
    pub fn take_result(&mut self) -> Option<LevelResult> {
        if self.result_taken {
            return None;
        }
        let result: Option<LevelResult> = self.result;
        self.result_taken = result.is_some();
        result
    }

    /// Return the level result, if the level is completed.
    pub fn get_result(&self) -> Option<LevelResult> {
        self.result
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration.
    pub fn get_duration(&self) -> Duration {
        match self.result {
            Some(r) => r.elapsed,
            None => match self.pause_duration {
                Some(d) => d,
                None => self.start_time.elapsed(),
            },
        }
    }

    /// Return the word list information to display for the given hint level.
    pub fn progress_text(&self, hint_level: HintLevel) -> Option<String> {
        match hint_level {
            HintLevel::None => None,
            HintLevel::Easy => Some(format!(
                "Words found: {} of {}",
                self.puzzle.found_count(),
                self.puzzle.words().len()
            )),
            HintLevel::High => {
                let lines: Vec<String> = self
                    .puzzle
                    .words()
                    .iter()
                    .map(|w| {
                        let mark: &str = if w.is_found() { "x" } else { " " };
                        format!("[{mark}] {}", w.text())
                    })
                    .collect();
                Some(lines.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid_generator::GridGenerator;
    use crate::scoring::Stars;
    use std::thread;

    fn game() -> Game {
        let letters: Vec<char> = "КОТДОМЫРЬ".chars().collect();
        let grid = Grid::from_letters(3, &letters).unwrap();
        let words = vec![
            PlacedWord::new("КОТ", vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]),
            PlacedWord::new("ДОМ", vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)]),
        ];
        Game::new(Puzzle::new(grid, words, Vec::new()), Some(1))
    }

    fn find_row(game: &mut Game, y: usize) -> MatchOutcome {
        game.select(Coord::new(0, y));
        game.select(Coord::new(1, y));
        game.select(Coord::new(2, y))
    }

    #[test]
    fn result_is_emitted_once() {
        let mut game = game();

        find_row(&mut game, 0);
        assert_eq!(game.take_result(), None);
        assert_eq!(find_row(&mut game, 1), MatchOutcome::WordFound("ДОМ".to_string()));

        let result = game.take_result().unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(game.take_result(), None);
        assert_eq!(game.get_result(), Some(result));
        assert_eq!(game.get_duration(), result.elapsed);
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut game = game();
        find_row(&mut game, 0);
        find_row(&mut game, 1);

        assert_eq!(game.select(Coord::new(0, 2)), MatchOutcome::NoOp);
        assert_eq!(game.hint(), None);
        assert!(game.selection().is_empty());
        assert_eq!(game.hints_used(), 0);
    }

    #[test]
    fn paused_game_ignores_input() {
        let mut game = game();
        game.pause();

        assert_eq!(game.select(Coord::new(0, 0)), MatchOutcome::NoOp);
        assert_eq!(game.hint(), None);

        game.resume();
        assert_eq!(game.select(Coord::new(0, 0)), MatchOutcome::Extended);
        assert_eq!(game.hint(), Some(Coord::new(0, 0)));
        assert_eq!(game.hints_used(), 1);
    }

    #[test]
    fn second_pause_keeps_the_played_time() {
        let mut game = game();
        game.pause();
        let played: Duration = game.get_duration();
        thread::sleep(Duration::from_millis(60));
        game.pause();
        assert_eq!(game.get_duration(), played);
        thread::sleep(Duration::from_millis(60));
        game.resume();

        assert!(game.get_duration() < Duration::from_millis(50));
    }

    #[test]
    fn puzzle_without_words_is_completed() {
        let puzzle = GridGenerator::seeded(0).generate(1, &["КОТ"]).unwrap();
        assert!(puzzle.words().is_empty());
        assert_eq!(puzzle.skipped().len(), 1);

        let mut game = Game::new(puzzle, None);
        assert_eq!(game.select(Coord::new(0, 0)), MatchOutcome::NoOp);
        let result = game.take_result().unwrap();
        assert_eq!(result.stars, Stars::Three);
        assert_eq!(game.take_result(), None);
    }

    #[test]
    fn progress_text_follows_hint_level() {
        let mut game = game();
        find_row(&mut game, 0);

        assert_eq!(game.progress_text(HintLevel::None), None);
        assert_eq!(
            game.progress_text(HintLevel::Easy).unwrap(),
            "Words found: 1 of 2"
        );
        assert_eq!(
            game.progress_text(HintLevel::High).unwrap(),
            "[x] КОТ\n[ ] ДОМ"
        );
    }
}
