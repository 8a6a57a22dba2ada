/*
progress.rs

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

//! Manage the player's progress through the levels.
//!
//! The main object, [`Progress`], maintains a [`ProgressRecord`] for each level the player
//! completed or unlocked.
//! The engine never saves anything by itself: the front end records the [`LevelResult`] of a
//! completed level, and then hands the records to a [`ProgressStore`].
//! See the [`crate::saver::progress`] module for a store that saves the records in a JSON file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;

use crate::levels::Level;
use crate::scoring::{LevelResult, Stars};

/// Progress for one level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub completed: bool,
    pub locked: bool,
    pub score: u32,

    /// Time, in seconds, it took to complete the level.
    pub time: u64,

    /// Number of stars (0 when the level has not been completed).
    pub stars: u8,

    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Create a record for a level that is unlocked but not completed.
    pub fn unlocked() -> Self {
        Self {
            completed: false,
            locked: false,
            score: 0,
            time: 0,
            stars: 0,
            completed_at: None,
        }
    }

    /// Create a record for a completed level.
    pub fn completed(result: &LevelResult) -> Self {
        Self {
            completed: true,
            locked: false,
            score: result.score,
            time: result.elapsed.as_secs(),
            stars: result.stars.count(),
            completed_at: Some(Utc::now()),
        }
    }

    /// Return the stars of a completed level.
    pub fn get_stars(&self) -> Option<Stars> {
        Stars::from_repr(self.stars)
    }
}

/// Storage for the progress records, provided by the front end (local file, cloud, ...).
pub trait ProgressStore {
    /// Return all the saved records, indexed by level ID.
    fn load(&self) -> Result<BTreeMap<u32, ProgressRecord>, Box<dyn Error>>;

    /// Save the record of one level.
    fn save_level_progress(
        &mut self,
        level_id: u32,
        record: &ProgressRecord,
    ) -> Result<(), Box<dyn Error>>;
}

/// Store that keeps the records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<u32, ProgressRecord>,
}

impl MemoryStore {
    /// Create a [`MemoryStore`] object.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<BTreeMap<u32, ProgressRecord>, Box<dyn Error>> {
        Ok(self.records.clone())
    }

    fn save_level_progress(
        &mut self,
        level_id: u32,
        record: &ProgressRecord,
    ) -> Result<(), Box<dyn Error>> {
        self.records.insert(level_id, record.clone());
        Ok(())
    }
}

/// Progress records for all the levels.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    records: BTreeMap<u32, ProgressRecord>,
}

impl Progress {
    /// Create an empty [`Progress`] object.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Load the records from the given store.
    pub fn load(store: &dyn ProgressStore) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            records: store.load()?,
        })
    }

    /// Return the record of a level.
    pub fn get(&self, level_id: u32) -> Option<&ProgressRecord> {
        self.records.get(&level_id)
    }

    /// Whether the player can play the level.
    pub fn is_locked(&self, level: &Level) -> bool {
        match self.records.get(&level.id) {
            Some(r) => r.locked,
            None => level.initially_locked,
        }
    }

    /// Whether the player completed the level.
    pub fn is_completed(&self, level_id: u32) -> bool {
        self.records.get(&level_id).is_some_and(|r| r.completed)
    }

    /// Record the result of a completed level, unlock the next level, and save both records.
    ///
    /// A new result replaces the previous one.
    pub fn record_completion(
        &mut self,
        level_id: u32,
        result: &LevelResult,
        store: &mut dyn ProgressStore,
    ) -> Result<(), Box<dyn Error>> {
        let record: ProgressRecord = ProgressRecord::completed(result);
        store.save_level_progress(level_id, &record)?;
        self.records.insert(level_id, record);

        let next_id: u32 = level_id + 1;
        if !self.records.contains_key(&next_id) {
            let next: ProgressRecord = ProgressRecord::unlocked();
            store.save_level_progress(next_id, &next)?;
            self.records.insert(next_id, next);
        }
        Ok(())
    }

    /// Sum of the scores of the completed levels.
    pub fn total_score(&self) -> u32 {
        self.records
            .values()
            .filter(|r| r.completed)
            .map(|r| r.score)
            .sum()
    }
}
