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

use std::collections::BTreeMap;

use chrono::Local;
use chrono::TimeZone;
use serde::Serialize;

use crate::stats::Tally;
use crate::types::guess::GuessRecord;

/// Slots with fewer guesses than this are too noisy to report.
pub const DEFAULT_MIN_DATA_POINTS: usize = 3;

/// Accuracy within one (day of week, hour of day) slot.
#[derive(Serialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HeatMapData {
    /// 0 = Sunday through 6 = Saturday.
    pub day: u32,
    /// 0 through 23.
    pub hour: u32,
    pub count: usize,
    pub accuracy: f64,
}

#[derive(Serialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day: u32,
    pub hour: u32,
    pub accuracy: f64,
}

/// Bucket exact-match accuracy by local day of week and hour of day.
pub fn calculate_heat_map_data(
    records: &[GuessRecord],
    min_data_points: usize,
) -> Vec<HeatMapData> {
    calculate_heat_map_data_in(records, min_data_points, &Local)
}

/// Like [`calculate_heat_map_data`], with timestamps read in `tz`.
///
/// Slots with fewer than `min_data_points` guesses are dropped rather than
/// reported as empty, so the output is sparse. It is ordered by day, then
/// hour.
pub fn calculate_heat_map_data_in<Tz: TimeZone>(
    records: &[GuessRecord],
    min_data_points: usize,
    tz: &Tz,
) -> Vec<HeatMapData> {
    let mut slots: BTreeMap<(u32, u32), Tally> = BTreeMap::new();
    for record in records {
        let slot = record.timestamp().weekday_hour_in(tz);
        slots.entry(slot).or_default().record(record.exact_match());
    }
    slots
        .into_iter()
        .filter(|(_, tally)| tally.attempts >= min_data_points)
        .map(|((day, hour), tally)| HeatMapData {
            day,
            hour,
            count: tally.attempts,
            accuracy: tally.accuracy(),
        })
        .collect()
}

/// The slot with the highest accuracy. On ties the first slot in the input
/// wins, which for heat map output is the earliest in the week.
pub fn get_best_time_slot(heat_map: &[HeatMapData]) -> Option<TimeSlot> {
    let mut best: Option<&HeatMapData> = None;
    for cell in heat_map {
        match best {
            Some(current) if cell.accuracy <= current.accuracy => {}
            _ => best = Some(cell),
        }
    }
    best.map(|cell| TimeSlot {
        day: cell.day,
        hour: cell.hour,
        accuracy: cell.accuracy,
    })
}
