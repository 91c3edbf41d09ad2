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

//! Per-card, per-suit and per-number accuracy rankings.
//!
//! Each ranking is sorted by descending accuracy. Entities with equal
//! accuracy are ordered by their key (suit, then number) so the output does
//! not depend on the order of the input.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stats::Tally;
use crate::types::guess::GuessRecord;

/// Stands in for the number of a card from a suit-only deck.
pub const SUIT_ONLY: &str = "suit-only";

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CardAccuracy {
    /// `<suit>-<number>`, or `<suit>-suit-only`.
    pub card_id: String,
    pub card_name: String,
    pub attempts: usize,
    pub successes: usize,
    pub accuracy: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SuitAccuracy {
    pub suit: String,
    pub attempts: usize,
    pub successes: usize,
    pub accuracy: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NumberAccuracy {
    pub number: String,
    pub attempts: usize,
    pub successes: usize,
    pub accuracy: f64,
}

/// Exact-match accuracy for every drawn card.
pub fn calculate_card_accuracy(records: &[GuessRecord]) -> Vec<CardAccuracy> {
    rank(
        records,
        |record| Some((record.actual_suit(), record.actual_number())),
        GuessRecord::exact_match,
    )
    .into_iter()
    .map(|((suit, number), tally)| {
        let (card_id, card_name) = match number {
            Some(number) => (format!("{suit}-{number}"), format!("{number} of {suit}")),
            None => (format!("{suit}-{SUIT_ONLY}"), suit.to_string()),
        };
        CardAccuracy {
            card_id,
            card_name,
            attempts: tally.attempts,
            successes: tally.successes,
            accuracy: tally.accuracy(),
        }
    })
    .collect()
}

/// Suit-match accuracy for every drawn suit.
pub fn calculate_suit_accuracy(records: &[GuessRecord]) -> Vec<SuitAccuracy> {
    rank(
        records,
        |record| Some(record.actual_suit()),
        GuessRecord::suit_match,
    )
    .into_iter()
    .map(|(suit, tally)| SuitAccuracy {
        suit: suit.to_string(),
        attempts: tally.attempts,
        successes: tally.successes,
        accuracy: tally.accuracy(),
    })
    .collect()
}

/// Number-match accuracy for every drawn number. Suit-only guesses are
/// skipped.
pub fn calculate_number_accuracy(records: &[GuessRecord]) -> Vec<NumberAccuracy> {
    rank(records, GuessRecord::actual_number, GuessRecord::number_match)
        .into_iter()
        .map(|(number, tally)| NumberAccuracy {
            number: number.to_string(),
            attempts: tally.attempts,
            successes: tally.successes,
            accuracy: tally.accuracy(),
        })
        .collect()
}

/// Group records by `key`, skipping those without one, and tally `success`
/// within each group. Groups come out best first.
fn rank<'a, K: Ord>(
    records: &'a [GuessRecord],
    key: impl Fn(&'a GuessRecord) -> Option<K>,
    success: impl Fn(&GuessRecord) -> bool,
) -> Vec<(K, Tally)> {
    let mut groups: BTreeMap<K, Tally> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            groups.entry(k).or_default().record(success(record));
        }
    }
    let mut ranked: Vec<(K, Tally)> = groups.into_iter().collect();
    // Stable, so ties keep key order.
    ranked.sort_by(|(_, a), (_, b)| b.accuracy().total_cmp(&a.accuracy()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::playing_card;
    use crate::stats::fixtures::zener;

    #[test]
    fn test_empty() {
        assert!(calculate_card_accuracy(&[]).is_empty());
        assert!(calculate_suit_accuracy(&[]).is_empty());
        assert!(calculate_number_accuracy(&[]).is_empty());
    }

    #[test]
    fn test_card_accuracy() {
        let records = vec![
            playing_card(1000, "hearts", "Ace", true, true),
            playing_card(2000, "hearts", "Ace", true, false),
            playing_card(3000, "spades", "King", true, true),
            playing_card(4000, "clubs", "2", false, false),
        ];
        let cards = calculate_card_accuracy(&records);
        assert_eq!(
            cards,
            vec![
                CardAccuracy {
                    card_id: "spades-King".to_string(),
                    card_name: "King of spades".to_string(),
                    attempts: 1,
                    successes: 1,
                    accuracy: 100.0,
                },
                CardAccuracy {
                    card_id: "hearts-Ace".to_string(),
                    card_name: "Ace of hearts".to_string(),
                    attempts: 2,
                    successes: 1,
                    accuracy: 50.0,
                },
                CardAccuracy {
                    card_id: "clubs-2".to_string(),
                    card_name: "2 of clubs".to_string(),
                    attempts: 1,
                    successes: 0,
                    accuracy: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_card_accuracy_suit_only() {
        let records = vec![
            zener(1000, "circle", true),
            zener(2000, "circle", false),
            zener(3000, "circle", false),
        ];
        let cards = calculate_card_accuracy(&records);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card_id, "circle-suit-only");
        assert_eq!(cards[0].card_name, "circle");
        assert_eq!(cards[0].attempts, 3);
        assert_eq!(cards[0].accuracy, 33.33);
    }

    #[test]
    fn test_suit_accuracy_uses_suit_match() {
        let records = vec![
            playing_card(1000, "hearts", "Ace", true, false),
            playing_card(2000, "hearts", "2", true, false),
            playing_card(3000, "diamonds", "3", false, true),
            zener(4000, "star", true),
        ];
        let suits = calculate_suit_accuracy(&records);
        let summary: Vec<(&str, usize, f64)> = suits
            .iter()
            .map(|s| (s.suit.as_str(), s.attempts, s.accuracy))
            .collect();
        // hearts and star tie at 100; key order puts hearts first.
        assert_eq!(
            summary,
            vec![("hearts", 2, 100.0), ("star", 1, 100.0), ("diamonds", 1, 0.0)]
        );
    }

    #[test]
    fn test_number_accuracy_skips_suit_only() {
        let records = vec![
            playing_card(1000, "hearts", "Queen", false, true),
            playing_card(2000, "spades", "Queen", false, false),
            playing_card(3000, "spades", "7", true, true),
            zener(4000, "star", true),
            zener(5000, "waves", false),
        ];
        let numbers = calculate_number_accuracy(&records);
        assert_eq!(
            numbers,
            vec![
                NumberAccuracy {
                    number: "7".to_string(),
                    attempts: 1,
                    successes: 1,
                    accuracy: 100.0,
                },
                NumberAccuracy {
                    number: "Queen".to_string(),
                    attempts: 2,
                    successes: 1,
                    accuracy: 50.0,
                },
            ]
        );
    }

    #[test]
    fn test_sorted_descending() {
        let records = vec![
            playing_card(1000, "hearts", "2", false, false),
            playing_card(2000, "hearts", "3", true, true),
            playing_card(3000, "hearts", "4", true, true),
            playing_card(4000, "hearts", "4", false, false),
        ];
        let cards = calculate_card_accuracy(&records);
        let accuracies: Vec<f64> = cards.iter().map(|c| c.accuracy).collect();
        assert_eq!(accuracies, vec![100.0, 50.0, 0.0]);
    }
}
