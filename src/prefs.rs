// Copyright 2025 Fernando Borretti
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

use std::fs::read_to_string;
use std::fs::write;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::types::deck_type::DeckType;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct Preferences {
    /// The deck used when a command does not name one.
    pub selected_deck: DeckType,
    /// Whether to ask the user to concentrate before each guess.
    pub show_concentration_prompt: bool,
    pub has_seen_help: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            selected_deck: DeckType::Zener,
            show_concentration_prompt: true,
            has_seen_help: false,
        }
    }
}

pub trait PreferencesStore {
    fn load(&self) -> Fallible<Preferences>;

    fn save(&self, prefs: &Preferences) -> Fallible<()>;
}

/// Preferences kept in a TOML file. A missing file reads as the defaults.
pub struct PreferencesFile {
    path: PathBuf,
}

impl PreferencesFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferencesStore for PreferencesFile {
    fn load(&self) -> Fallible<Preferences> {
        if !self.path.exists() {
            log::debug!("No preferences at {:?}, using defaults.", self.path);
            return Ok(Preferences::default());
        }
        let content = read_to_string(&self.path)?;
        let prefs: Preferences = toml::from_str(&content)?;
        log::debug!("Loaded preferences from {:?}.", self.path);
        Ok(prefs)
    }

    fn save(&self, prefs: &Preferences) -> Fallible<()> {
        let content = toml::to_string(prefs)?;
        write(&self.path, content)?;
        log::debug!("Saved preferences to {:?}.", self.path);
        Ok(())
    }
}
