// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Score of a completed match and its text form.
use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Reason a score could not be built or parsed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ScoreError {
    /// The player name was empty.
    #[error("score name must not be empty")]
    EmptyName,
    /// The player name contained a tab or line break.
    #[error("score name must not contain tabs or line breaks")]
    InvalidName,
    /// The line had no tab between name and value.
    #[error("score line has no tab separating name and value")]
    MissingSeparator,
    /// The value was not an integer.
    #[error("invalid score value: {0}")]
    InvalidValue(#[from] ParseIntError),
}

/// A named score. Formats as a single `NAME<TAB>VALUE` line and parses back from it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Score {
    name: String,
    value: i32,
}

impl Score {
    /// Construct a score. Fails if the name is empty or could not be written on one line.
    pub fn new(name: impl Into<String>, value: i32) -> Result<Self, ScoreError> {
        let name = name.into();
        if name.is_empty() {
            Err(ScoreError::EmptyName)
        } else if name.contains(|c: char| c == '\t' || c == '\n' || c == '\r') {
            Err(ScoreError::InvalidName)
        } else {
            Ok(Self { name, value })
        }
    }

    /// Name of the player who set the score.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The score itself.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.value)
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let mut parts = line.rsplitn(2, '\t');
        let value = parts.next().unwrap_or_default();
        let name = parts.next().ok_or(ScoreError::MissingSeparator)?;
        Score::new(name, value.trim().parse()?)
    }
}
