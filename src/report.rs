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

use std::time::Instant;

use chrono::Local;
use chrono::TimeZone;
use serde::Serialize;

use crate::db::GuessRepository;
use crate::deck::chance_accuracy;
use crate::error::Fallible;
use crate::stats::accuracy::CardAccuracy;
use crate::stats::accuracy::NumberAccuracy;
use crate::stats::accuracy::SuitAccuracy;
use crate::stats::accuracy::calculate_card_accuracy;
use crate::stats::accuracy::calculate_number_accuracy;
use crate::stats::accuracy::calculate_suit_accuracy;
use crate::stats::heatmap::DEFAULT_MIN_DATA_POINTS;
use crate::stats::heatmap::HeatMapData;
use crate::stats::heatmap::TimeSlot;
use crate::stats::heatmap::calculate_heat_map_data_in;
use crate::stats::heatmap::get_best_time_slot;
use crate::stats::progress::DEFAULT_WINDOW_SIZE;
use crate::stats::progress::ProgressDataPoint;
use crate::stats::progress::TimeRange;
use crate::stats::progress::calculate_progress_data_in;
use crate::stats::summary::DeckStats;
use crate::stats::summary::calculate_deck_stats;
use crate::types::deck_type::DeckType;
use crate::types::guess::GuessRecord;
use crate::types::timestamp::Timestamp;

/// Every statistics view, computed from one snapshot of the guess log.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// `None` when the report covers all decks.
    pub deck_type: Option<DeckType>,
    pub range: TimeRange,
    pub total_guesses: usize,
    /// Only present for single-deck reports.
    pub deck_stats: Option<DeckStats>,
    /// Accuracy expected from chance alone, for single-deck reports.
    pub chance_accuracy: Option<f64>,
    pub heat_map: Vec<HeatMapData>,
    pub best_time_slot: Option<TimeSlot>,
    pub card_accuracy: Vec<CardAccuracy>,
    pub suit_accuracy: Vec<SuitAccuracy>,
    pub number_accuracy: Vec<NumberAccuracy>,
    pub progress: Vec<ProgressDataPoint>,
}

impl StatsReport {
    /// Load the guesses for `deck_type` (or all of them) and compute the
    /// report in local time.
    pub fn compute(
        repo: &impl GuessRepository,
        deck_type: Option<DeckType>,
        range: TimeRange,
        now: Timestamp,
    ) -> Fallible<Self> {
        let records = match deck_type {
            Some(deck_type) => repo.guesses_for_deck(deck_type)?,
            None => repo.all_guesses()?,
        };
        Ok(Self::from_records_in(&records, deck_type, range, now, &Local))
    }

    /// Compute the report from records already in memory. The time range
    /// only narrows the progress series; the other views cover every record.
    pub fn from_records_in<Tz: TimeZone>(
        records: &[GuessRecord],
        deck_type: Option<DeckType>,
        range: TimeRange,
        now: Timestamp,
        tz: &Tz,
    ) -> Self {
        let start = Instant::now();
        let heat_map = calculate_heat_map_data_in(records, DEFAULT_MIN_DATA_POINTS, tz);
        let best_time_slot = get_best_time_slot(&heat_map);
        let report = Self {
            deck_type,
            range,
            total_guesses: records.len(),
            deck_stats: deck_type.map(|deck_type| calculate_deck_stats(records, deck_type)),
            chance_accuracy: deck_type.map(chance_accuracy),
            heat_map,
            best_time_slot,
            card_accuracy: calculate_card_accuracy(records),
            suit_accuracy: calculate_suit_accuracy(records),
            number_accuracy: calculate_number_accuracy(records),
            progress: calculate_progress_data_in(
                records,
                DEFAULT_WINDOW_SIZE,
                range.days(),
                now,
                tz,
            ),
        };
        let duration = start.elapsed().as_millis();
        log::debug!(
            "Computed report over {} guesses in {duration}ms.",
            records.len()
        );
        report
    }
}
