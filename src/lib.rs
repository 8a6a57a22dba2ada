/*
lib.rs

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

//! Fillwords game engine.
//!
//! The engine builds a letter grid in which words are hidden along paths of adjacent cells,
//! and then checks the cells that the player picks to detect the words:
//!
//! * [`generator`] builds the [`grid::Puzzle`] for a grid size and a word list.
//! * [`matcher`] follows the player's selection and detects the found words.
//! * [`hint`] reveals one letter of a word still to be found.
//! * [`game`] ties everything together for one level, with the timer and the final
//!   [`scoring::LevelResult`].
//!
//! The [`levels`] catalog, the [`progress`] records, and the [`saver`] module are used by the
//! front end around the engine.

pub mod error;
pub mod game;
pub mod generator;
pub mod grid;
pub mod hint;
pub mod levels;
pub mod matcher;
pub mod progress;
pub mod saver;
pub mod scoring;
