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

use serde::Serialize;

use crate::stats::chronological;
use crate::stats::percentage;
use crate::stats::streak::best_run;
use crate::stats::streak::current_run;
use crate::types::deck_type::DeckType;
use crate::types::guess::GuessRecord;

/// Summary statistics for one deck.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub deck_type: DeckType,
    pub total_guesses: usize,
    pub exact_matches: usize,
    pub suit_matches: usize,
    pub number_matches: usize,
    /// Exact-match rate, as a percentage.
    pub accuracy: f64,
    pub suit_accuracy: f64,
    pub number_accuracy: f64,
    pub best_streak: usize,
    pub current_streak: usize,
}

/// Compute the summary for `deck_type`, ignoring records of other decks.
pub fn calculate_deck_stats(records: &[GuessRecord], deck_type: DeckType) -> DeckStats {
    let deck_records: Vec<&GuessRecord> = chronological(
        records
            .iter()
            .filter(|record| record.deck_type() == deck_type),
    );

    let total_guesses = deck_records.len();
    let exact_matches = deck_records.iter().filter(|r| r.exact_match()).count();
    let suit_matches = deck_records.iter().filter(|r| r.suit_match()).count();
    let number_matches = deck_records.iter().filter(|r| r.number_match()).count();

    DeckStats {
        deck_type,
        total_guesses,
        exact_matches,
        suit_matches,
        number_matches,
        accuracy: percentage(exact_matches, total_guesses),
        suit_accuracy: percentage(suit_matches, total_guesses),
        number_accuracy: percentage(number_matches, total_guesses),
        best_streak: best_run(&deck_records),
        current_streak: current_run(&deck_records),
    }
}
