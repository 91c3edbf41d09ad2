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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::prefs::Preferences;
use crate::prefs::PreferencesStore;
use crate::types::deck_type::DeckType;

pub fn update_prefs(
    directory: Option<String>,
    deck: Option<DeckType>,
    concentration_prompt: Option<bool>,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let prefs = apply(&coll.prefs, deck, concentration_prompt)?;
    println!("selected_deck = {}", prefs.selected_deck);
    println!("show_concentration_prompt = {}", prefs.show_concentration_prompt);
    Ok(())
}

/// Apply the given changes, if any, and return the resulting preferences.
fn apply(
    store: &impl PreferencesStore,
    deck: Option<DeckType>,
    concentration_prompt: Option<bool>,
) -> Fallible<Preferences> {
    let mut prefs = store.load()?;
    if deck.is_none() && concentration_prompt.is_none() {
        return Ok(prefs);
    }
    if let Some(deck) = deck {
        prefs.selected_deck = deck;
    }
    if let Some(show) = concentration_prompt {
        prefs.show_concentration_prompt = show;
    }
    store.save(&prefs)?;
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::prefs::PreferencesFile;

    #[test]
    fn test_show_does_not_write() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("preferences.toml");
        let store = PreferencesFile::new(path.clone());
        assert_eq!(apply(&store, None, None)?, Preferences::default());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_update() -> Fallible<()> {
        let dir = tempdir()?;
        let store = PreferencesFile::new(dir.path().join("preferences.toml"));
        apply(&store, Some(DeckType::Rws), None)?;
        let prefs = apply(&store, None, Some(false))?;
        assert_eq!(prefs.selected_deck, DeckType::Rws);
        assert!(!prefs.show_concentration_prompt);
        assert_eq!(store.load()?, prefs);
        Ok(())
    }
}
