/*
error.rs

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

//! Errors raised when the input of the grid generator is not valid.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("The grid size must be at least 1")]
    InvalidSize,
    #[error("The word list is empty")]
    NoWords,
    #[error("Word number {0} is empty")]
    EmptyWord(usize),
    #[error("The filler alphabet is empty")]
    EmptyAlphabet,
}

pub type Result<T> = core::result::Result<T, GenerateError>;
