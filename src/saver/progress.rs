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

//! Save and restore the player's progress.
//!
//! The saved object is the map of the [`ProgressRecord`] objects, indexed by level ID, in JSON
//! format by using [`serde`].

use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::progress::{ProgressRecord, ProgressStore};

/// Object to save and restore the progress records.
pub struct SaverProgress {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverProgress {
    /// Create a [`SaverProgress`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the progress must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("progress.json");
        debug!("Progress file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Save all the records, replacing the file content.
    fn save_all(&self, records: &BTreeMap<u32, ProgressRecord>) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the progress file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

impl ProgressStore for SaverProgress {
    /// Return the saved records, or an empty map if the progress file does not exist.
    fn load(&self) -> Result<BTreeMap<u32, ProgressRecord>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(BTreeMap::new()),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let records: BTreeMap<u32, ProgressRecord> = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn save_level_progress(
        &mut self,
        level_id: u32,
        record: &ProgressRecord,
    ) -> Result<(), Box<dyn Error>> {
        let mut records: BTreeMap<u32, ProgressRecord> = self.load()?;
        records.insert(level_id, record.clone());
        debug!("Saving progress for level {level_id}");
        self.save_all(&records)
    }
}
