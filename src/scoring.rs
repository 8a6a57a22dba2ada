/*
scoring.rs

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

//! Compute the stars and the score of a completed level from the time it took.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use strum_macros::FromRepr;

/// Score for a three-star level.
pub const MAX_SCORE: u32 = 100;

/// Under this many seconds, the level gets three stars.
const THREE_STARS_SEC: u64 = 30;

/// Under this many seconds, the level gets two stars.
const TWO_STARS_SEC: u64 = 60;

/// Number of stars.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[repr(u8)]
pub enum Stars {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Stars {
    /// Return the stars for a level completed in the given time.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let secs: u64 = elapsed.as_secs();
        if secs < THREE_STARS_SEC {
            Stars::Three
        } else if secs < TWO_STARS_SEC {
            Stars::Two
        } else {
            Stars::One
        }
    }

    /// Return the score for these stars, as a share of [`MAX_SCORE`].
    pub fn score(&self) -> u32 {
        match self {
            Stars::Three => MAX_SCORE,
            Stars::Two => MAX_SCORE * 7 / 10,
            Stars::One => MAX_SCORE * 4 / 10,
        }
    }

    pub fn count(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let count: usize = self.count() as usize;
        write!(f, "{}{}", "★".repeat(count), "☆".repeat(3 - count))
    }
}

/// Result of a completed level.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct LevelResult {
    /// How long it took to find all the words.
    pub elapsed: Duration,

    pub stars: Stars,

    pub score: u32,
}

impl LevelResult {
    /// Create a [`LevelResult`] object for a level completed in the given time.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let stars: Stars = Stars::from_elapsed(elapsed);
        Self {
            elapsed,
            stars,
            score: stars.score(),
        }
    }
}
