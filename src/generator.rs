/*
generator.rs

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

//! Generate the letter grid of a level.
//!
//! To play, a grid must be created from the level size and word list.
//! You create the grid by creating a [`grid_generator::GridGenerator`] object and by using its
//! [`grid_generator::GridGenerator::generate`] method, which returns a
//! [`crate::grid::Puzzle`] object.
//!
//! The generator takes the random source as a parameter.
//! Use [`grid_generator::GridGenerator::seeded`] for reproducible grids, or
//! [`grid_generator::generate`] for a grid built from the thread random source.
//!
//! While searching for the path of a word, the generator stores the cells in a
//! [`path::Path`] object.

pub mod grid_generator;
pub mod path;
