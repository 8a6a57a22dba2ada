/*
hint.rs

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

//! Reveal one letter of a word that the player has not found yet.
//!
//! The front end decides when a hint is allowed (after a rewarded ad in the mobile game).

use log::debug;

use crate::grid::{Coord, Puzzle};

/// Reveal the first hidden cell of the first word still to be found, and return its
/// coordinates.
///
/// Words are tried in list order and cells in path order. When all the cells of a word are
/// already revealed, the next word is tried.
/// Return None, without changing anything, when there is no cell left to reveal.
pub fn hint(puzzle: &mut Puzzle) -> Option<Coord> {
    let (grid, words) = puzzle.parts_mut();
    let coord: Coord = words
        .iter()
        .filter(|w| !w.is_found())
        .flat_map(|w| w.path().iter())
        .find(|c| grid.get(**c).is_some_and(|cell| !cell.is_found()))
        .copied()?;

    if let Some(cell) = grid.get_mut(coord) {
        cell.mark_hinted();
    }
    debug!("Hint: revealed cell {coord}");
    Some(coord)
}
