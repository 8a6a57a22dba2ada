/*
levels.rs

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

//! Built-in level catalog.
//!
//! Levels are grouped in categories. Each level provides the grid size and the word list
//! that the [`crate::generator`] uses to build the grid.
//! The first level of each category is unlocked from the start; the other levels are unlocked
//! when the player completes the previous level (see [`crate::progress`]).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the word list the front end shows during a game.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default,
)]
pub enum HintLevel {
    /// Nothing.
    None,

    /// Only the number of words found so far.
    #[default]
    Easy,

    /// The full word list, with the found words marked.
    High,
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HintLevel::None => write!(f, "none"),
            HintLevel::Easy => write!(f, "easy"),
            HintLevel::High => write!(f, "high"),
        }
    }
}

/// Level definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,

    /// Number of rows and columns in the grid.
    pub size: usize,

    /// Words to place, in placement order.
    pub words: &'static [&'static str],

    /// Whether the level is locked before the player makes any progress.
    pub initially_locked: bool,
}

/// Group of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub levels: Vec<Level>,
}

fn level(
    id: u32,
    name: &'static str,
    category: &'static str,
    size: usize,
    words: &'static [&'static str],
    initially_locked: bool,
) -> Level {
    Level {
        id,
        name,
        category,
        size,
        words,
        initially_locked,
    }
}

/// Return the list of categories and their levels.
pub fn catalog() -> Vec<Category> {
    // For developers: add your new levels to this list. Level IDs must be consecutive so that
    // completing a level unlocks the next one.
    vec![
        Category {
            id: 1,
            name: "Животные",
            description: "Домашние, дикие и морские животные",
            levels: vec![
                level(1, "Домашние животные", "Животные", 4, &["КОТ", "СОБАКА", "ПОПУГАЙ"], false),
                level(2, "Дикие животные", "Животные", 5, &["ЛЕВ", "ТИГР", "ВОЛК"], true),
                level(3, "Морские животные", "Животные", 5, &["КИТ", "ДЕЛЬФИН", "АКУЛА"], true),
            ],
        },
        Category {
            id: 2,
            name: "Еда",
            description: "Фрукты, овощи и напитки",
            levels: vec![
                level(4, "Фрукты", "Еда", 5, &["ЯБЛОКО", "ГРУША", "СЛИВА"], false),
                level(5, "Овощи", "Еда", 5, &["МОРКОВЬ", "ОГУРЕЦ", "ЛУК"], true),
                level(6, "Напитки", "Еда", 4, &["ЧАЙ", "КОФЕ", "СОК"], true),
            ],
        },
        Category {
            id: 3,
            name: "Природа",
            description: "Растения, цветы и деревья",
            levels: vec![
                level(7, "Растения", "Природа", 4, &["РОЗА", "ТЮЛЬПАН", "ПАПОРОТНИК"], false),
                level(8, "Цветы", "Природа", 5, &["РОМАШКА", "ЛИЛИЯ", "ГВОЗДИКА"], true),
                level(9, "Деревья", "Природа", 5, &["ДУБ", "БЕРЕЗА", "СОСНА"], true),
            ],
        },
    ]
}

/// Return all the levels, ordered by ID.
pub fn levels() -> Vec<Level> {
    let mut levels: Vec<Level> = catalog().into_iter().flat_map(|c| c.levels).collect();
    levels.sort_by_key(|l| l.id);
    levels
}

/// Return the level with the given ID.
pub fn find_level(id: u32) -> Option<Level> {
    levels().into_iter().find(|l| l.id == id)
}
