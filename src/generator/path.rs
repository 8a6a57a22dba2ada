/*
path.rs

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

//! Path being built for a word.

use std::collections::HashSet;

use crate::grid::Coord;

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Coord>,

    /// Cells already in the path.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coord>,
}

impl Path {
    /// Create a [`Path`] object for a word of the given length.
    pub fn new(word_len: usize) -> Self {
        Self {
            path: Vec::with_capacity(word_len),
            visited: HashSet::with_capacity(word_len),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, coord: Coord) {
        self.path.push(coord);
        self.visited.insert(coord);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) {
        if let Some(c) = self.path.pop() {
            self.visited.remove(&c);
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &[Coord] {
        &self.path
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Consume the object and return the ordered list of cells.
    pub fn into_vec(self) -> Vec<Coord> {
        self.path
    }
}
