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
use crate::deck::cards;
use crate::deck::chance_accuracy;
use crate::deck::suits;
use crate::error::Fallible;
use crate::prefs::PreferencesStore;
use crate::types::deck_type::DeckType;

pub fn list_cards(directory: Option<String>, deck: Option<DeckType>) -> Fallible<()> {
    let deck_type = match deck {
        Some(deck_type) => deck_type,
        None => Collection::new(directory)?.prefs.load()?.selected_deck,
    };
    print!("{}", render_deck(deck_type));
    Ok(())
}

fn render_deck(deck_type: DeckType) -> String {
    let deck = cards(deck_type);
    let mut out = format!(
        "{deck_type}: {} cards, chance accuracy {:.2}%\n",
        deck.len(),
        chance_accuracy(deck_type)
    );
    for suit in suits(deck_type) {
        out.push_str(&format!("{} ({})\n", suit.name, suit.id));
        for card in deck.iter().filter(|card| card.suit == suit.id) {
            match card.number {
                Some(number) => out.push_str(&format!("  {number}: {}\n", card.name)),
                None => {}
            }
        }
    }
    out
}
