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

use crate::stats::chronological;
use crate::types::guess::GuessRecord;

/// The longest run of consecutive exact matches, in chronological order.
pub fn calculate_best_streak(records: &[GuessRecord]) -> usize {
    best_run(&chronological(records))
}

/// The run of exact matches ending at the most recent record.
pub fn calculate_current_streak(records: &[GuessRecord]) -> usize {
    current_run(&chronological(records))
}

pub(crate) fn best_run(sorted: &[&GuessRecord]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for record in sorted {
        if record.exact_match() {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

pub(crate) fn current_run(sorted: &[&GuessRecord]) -> usize {
    sorted
        .iter()
        .rev()
        .take_while(|record| record.exact_match())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::hit;

    #[test]
    fn test_empty() {
        assert_eq!(calculate_best_streak(&[]), 0);
        assert_eq!(calculate_current_streak(&[]), 0);
    }

    #[test]
    fn test_best_streak() {
        let records = vec![
            hit(1000, true),
            hit(2000, true),
            hit(3000, false),
            hit(4000, true),
            hit(5000, true),
            hit(6000, true),
            hit(7000, false),
        ];
        assert_eq!(calculate_best_streak(&records), 3);
    }

    #[test]
    fn test_best_streak_running_to_the_end() {
        let records = vec![hit(1000, false), hit(2000, true), hit(3000, true)];
        assert_eq!(calculate_best_streak(&records), 2);
    }

    #[test]
    fn test_best_streak_sorts_by_timestamp() {
        // In input order the hits are not adjacent, chronologically they are.
        let records = vec![
            hit(1000, true),
            hit(5000, false),
            hit(2000, true),
            hit(3000, true),
        ];
        assert_eq!(calculate_best_streak(&records), 3);
    }

    #[test]
    fn test_current_streak() {
        let records = vec![hit(1000, false), hit(2000, true), hit(3000, true)];
        assert_eq!(calculate_current_streak(&records), 2);
    }

    #[test]
    fn test_current_streak_any_input_order() {
        let records = vec![hit(3000, true), hit(1000, false), hit(2000, true)];
        let before = records.clone();
        assert_eq!(calculate_current_streak(&records), 2);
        assert_eq!(records, before);
    }

    #[test]
    fn test_current_streak_latest_miss() {
        let records = vec![hit(1000, true), hit(2000, true), hit(3000, false)];
        assert_eq!(calculate_current_streak(&records), 0);
    }

    #[test]
    fn test_best_is_at_least_current() {
        let cases = vec![
            vec![hit(1, true)],
            vec![hit(1, false), hit(2, true)],
            vec![hit(1, true), hit(2, false), hit(3, true), hit(4, true)],
            vec![hit(4, true), hit(3, true), hit(2, true), hit(1, false)],
        ];
        for records in cases {
            assert!(calculate_best_streak(&records) >= calculate_current_streak(&records));
        }
    }
}
