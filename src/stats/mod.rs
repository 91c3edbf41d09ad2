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

//! Accuracy statistics derived from a log of guess records.
//!
//! Every function here is a pure computation over a borrowed slice: the input
//! is never reordered or mutated, and empty or sparse input degrades to zeros,
//! empty lists or a single-point series instead of failing. The only inputs
//! that depend on the outside world (the time zone used to bucket timestamps,
//! and "now" for date-range filtering) are explicit parameters.

pub mod accuracy;
pub mod format;
pub mod heatmap;
pub mod progress;
pub mod streak;
pub mod summary;

use crate::types::guess::GuessRecord;

/// Round a percentage to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `100 * part / whole`, rounded, or zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

/// Attempts and successes within one group of records.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub(crate) struct Tally {
    pub attempts: usize,
    pub successes: usize,
}

impl Tally {
    pub fn record(&mut self, success: bool) {
        self.attempts += 1;
        if success {
            self.successes += 1;
        }
    }

    pub fn accuracy(&self) -> f64 {
        percentage(self.successes, self.attempts)
    }
}

/// A stably sorted view of the records, oldest first.
pub(crate) fn chronological<'a>(
    records: impl IntoIterator<Item = &'a GuessRecord>,
) -> Vec<&'a GuessRecord> {
    let mut sorted: Vec<&GuessRecord> = records.into_iter().collect();
    sorted.sort_by_key(|record| record.timestamp());
    sorted
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::deck_type::DeckType;
    use crate::types::guess::Guess;
    use crate::types::guess::GuessRecord;
    use crate::types::guess_id::GuessId;
    use crate::types::timestamp::Timestamp;

    /// A playing-card guess at `millis` with the given match flags.
    pub fn playing(millis: i64, suit_match: bool, number_match: bool) -> GuessRecord {
        playing_card(millis, "hearts", "Ace", suit_match, number_match)
    }

    pub fn playing_card(
        millis: i64,
        suit: &str,
        number: &str,
        suit_match: bool,
        number_match: bool,
    ) -> GuessRecord {
        let guess = Guess::SuitAndNumber {
            guessed_suit: suit.to_string(),
            guessed_number: number.to_string(),
            actual_suit: suit.to_string(),
            actual_number: number.to_string(),
            suit_match,
            number_match,
        };
        record(millis, DeckType::Playing, guess)
    }

    /// A playing-card guess that is either an exact hit or a total miss.
    pub fn hit(millis: i64, exact: bool) -> GuessRecord {
        playing(millis, exact, exact)
    }

    pub fn zener(millis: i64, suit: &str, suit_match: bool) -> GuessRecord {
        let guess = Guess::SuitOnly {
            guessed_suit: suit.to_string(),
            actual_suit: suit.to_string(),
            suit_match,
        };
        record(millis, DeckType::Zener, guess)
    }

    fn record(millis: i64, deck_type: DeckType, guess: Guess) -> GuessRecord {
        let timestamp = Timestamp::from_millis(millis).unwrap();
        GuessRecord::new(GuessId::generate(), timestamp, deck_type, guess).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::hit;
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 5), 100.0);
    }

    #[test]
    fn test_chronological_does_not_touch_input() {
        let records = vec![hit(3000, true), hit(1000, false), hit(2000, true)];
        let before = records.clone();
        let sorted = chronological(&records);
        let order: Vec<i64> = sorted.iter().map(|r| r.timestamp().as_millis()).collect();
        assert_eq!(order, vec![1000, 2000, 3000]);
        assert_eq!(records, before);
    }
}
