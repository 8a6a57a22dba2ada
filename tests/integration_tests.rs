// Integration tests: generate a grid, play it through the public API, and record the result.

use std::collections::HashSet;
use std::time::Duration;

use fillwords::game::Game;
use fillwords::generator::grid_generator::{DEFAULT_ALPHABET, GridGenerator};
use fillwords::grid::{Coord, Puzzle};
use fillwords::hint::hint;
use fillwords::levels;
use fillwords::matcher::{MatchOutcome, SelectionMatcher};
use fillwords::progress::{MemoryStore, Progress, ProgressStore};
use fillwords::scoring::{LevelResult, Stars};

/// Pick all the cells of a path and return the last outcome.
fn select_path(matcher: &mut SelectionMatcher, puzzle: &mut Puzzle, path: &[Coord]) -> MatchOutcome {
    let mut outcome = MatchOutcome::NoOp;
    for coord in path {
        outcome = matcher.select(puzzle, *coord);
    }
    outcome
}

mod generation {
    use super::*;

    #[test]
    fn cat_is_placed_and_grid_is_filled() {
        for seed in 0..50 {
            let puzzle = GridGenerator::seeded(seed).generate(4, &["КОТ"]).unwrap();

            assert_eq!(puzzle.words().len(), 1);
            assert!(puzzle.skipped().is_empty());
            let word = &puzzle.words()[0];
            assert_eq!(puzzle.grid().read_path(word.path()), "КОТ");

            let path: HashSet<Coord> = word.path().iter().copied().collect();
            assert_eq!(path.len(), 3);
            for cell in puzzle.grid().cells() {
                if !path.contains(&cell.coord()) {
                    assert!(DEFAULT_ALPHABET.contains(cell.letter()));
                }
            }
        }
    }

    #[test]
    fn catalog_levels_generate() {
        for level in levels::levels() {
            let puzzle = GridGenerator::seeded(9).generate(level.size, level.words).unwrap();
            assert_eq!(
                puzzle.words().len() + puzzle.skipped().len(),
                level.words.len(),
                "level {}",
                level.id
            );
            assert_eq!(puzzle.grid().cells().count(), level.size * level.size);
        }
    }

    #[test]
    fn word_longer_than_the_grid_is_reported() {
        let puzzle = GridGenerator::seeded(5)
            .generate(3, &["КОТ", "АБВГДЕЖЗИК"])
            .unwrap();

        assert_eq!(puzzle.words().len(), 1);
        assert_eq!(puzzle.skipped().len(), 1);
        assert_eq!(puzzle.skipped()[0].word, "АБВГДЕЖЗИК");
    }
}

mod matching {
    use super::*;

    #[test]
    fn cat_is_found_in_path_order_only() {
        for seed in 0..20 {
            let mut puzzle = GridGenerator::seeded(seed).generate(4, &["КОТ"]).unwrap();
            let mut matcher = SelectionMatcher::new();
            let path: Vec<Coord> = puzzle.words()[0].path().to_vec();

            // Reverse order spells ТОК
            let reversed: Vec<Coord> = path.iter().rev().copied().collect();
            assert_ne!(
                select_path(&mut matcher, &mut puzzle, &reversed),
                MatchOutcome::WordFound("КОТ".to_string())
            );
            assert!(!puzzle.all_words_found());
            matcher.clear(&mut puzzle);

            assert_eq!(
                select_path(&mut matcher, &mut puzzle, &path),
                MatchOutcome::WordFound("КОТ".to_string())
            );
            assert!(puzzle.all_words_found());

            // Found cells cannot be picked again
            for coord in &path {
                assert_eq!(matcher.select(&mut puzzle, *coord), MatchOutcome::NoOp);
            }
        }
    }

    #[test]
    fn selection_never_holds_non_adjacent_cells() {
        let mut puzzle = GridGenerator::seeded(3).generate(5, &["ЛЕВ", "ТИГР", "ВОЛК"]).unwrap();
        let mut matcher = SelectionMatcher::new();
        let picks = [(0, 0), (0, 1), (2, 1), (2, 2), (4, 4), (3, 4), (0, 0), (1, 0)];

        for (x, y) in picks {
            matcher.select(&mut puzzle, Coord::new(x, y));
            for pair in matcher.selection().windows(2) {
                assert!(pair[0].is_adjacent(pair[1]));
            }
        }
    }

    #[test]
    fn all_words_of_a_level_can_be_found() {
        let level = levels::find_level(2).unwrap();
        let puzzle = GridGenerator::seeded(21).generate(level.size, level.words).unwrap();
        let paths: Vec<Vec<Coord>> = puzzle.words().iter().map(|w| w.path().to_vec()).collect();
        let mut game = Game::new(puzzle, Some(level.id));

        for path in &paths {
            let mut outcome = MatchOutcome::NoOp;
            for coord in path {
                outcome = game.select(*coord);
            }
            assert!(matches!(outcome, MatchOutcome::WordFound(_)));
        }
        assert!(game.all_words_found());
        assert_eq!(game.found_words().len(), paths.len());

        let result = game.take_result().unwrap();
        assert_eq!(result.stars, Stars::Three);
        assert_eq!(game.take_result(), None);
    }
}

mod hints {
    use super::*;

    #[test]
    fn hint_reveals_one_cell_of_the_word() {
        let mut puzzle = GridGenerator::seeded(8).generate(4, &["КОТ"]).unwrap();
        let path: Vec<Coord> = puzzle.words()[0].path().to_vec();

        assert_eq!(hint(&mut puzzle), Some(path[0]));
        let found: Vec<Coord> = puzzle
            .grid()
            .cells()
            .filter(|c| c.is_found())
            .map(|c| c.coord())
            .collect();
        assert_eq!(found, vec![path[0]]);
        assert!(!puzzle.all_words_found());

        let mut matcher = SelectionMatcher::new();
        select_path(&mut matcher, &mut puzzle, &path);
        assert!(puzzle.all_words_found());

        let before = puzzle.clone();
        assert_eq!(hint(&mut puzzle), None);
        assert_eq!(puzzle, before);
    }
}

mod progress {
    use super::*;

    #[test]
    fn completed_level_is_recorded_and_unlocks_the_next() {
        let mut store = MemoryStore::new();
        let mut progress = Progress::load(&store).unwrap();
        let result = LevelResult::from_elapsed(Duration::from_secs(25));

        progress.record_completion(4, &result, &mut store).unwrap();

        let saved = store.load().unwrap();
        let record = saved.get(&4).unwrap();
        assert!(record.completed);
        assert_eq!((record.score, record.time, record.stars), (100, 25, 3));
        assert!(!progress.is_locked(&levels::find_level(5).unwrap()));
        assert!(progress.is_locked(&levels::find_level(6).unwrap()));
    }
}
