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

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::Local;
use chrono::TimeZone;
use clap::ValueEnum;
use serde::Serialize;

use crate::stats::chronological;
use crate::stats::percentage;
use crate::types::date::Date;
use crate::types::guess::GuessRecord;
use crate::types::timestamp::Timestamp;

/// Number of guesses in the rolling window.
pub const DEFAULT_WINDOW_SIZE: usize = 20;

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDataPoint {
    /// The day of the last guess in the window.
    pub date: Date,
    /// Exact-match accuracy over the window.
    pub accuracy: f64,
    /// Guesses from the start of the series up to and including this point.
    pub guess_count: usize,
}

/// How far back a progress series reaches.
#[derive(ValueEnum, Serialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TimeRange {
    #[value(name = "7d")]
    #[serde(rename = "7d")]
    Week,
    #[value(name = "30d")]
    #[serde(rename = "30d")]
    Month,
    #[value(name = "90d")]
    #[serde(rename = "90d")]
    Quarter,
    #[default]
    #[value(name = "all")]
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    /// The number of days to look back, where zero means no limit.
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::All => 0,
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::All => write!(f, "all time"),
            range => write!(f, "last {} days", range.days()),
        }
    }
}

/// Rolling exact-match accuracy over time, with dates in local time.
pub fn calculate_progress_data(
    records: &[GuessRecord],
    window_size: usize,
    days: u32,
    now: Timestamp,
) -> Vec<ProgressDataPoint> {
    calculate_progress_data_in(records, window_size, days, now, &Local)
}

/// Like [`calculate_progress_data`], with calendar days taken in `tz`.
///
/// When `days` is positive, guesses older than `days` calendar days before
/// `now` are ignored. With fewer guesses than `window_size` the series is a
/// single point covering all of them. Otherwise there is one point per guess
/// from the `window_size`-th onwards, each covering the `window_size` guesses
/// ending there. A `window_size` of zero is treated as one.
pub fn calculate_progress_data_in<Tz: TimeZone>(
    records: &[GuessRecord],
    window_size: usize,
    days: u32,
    now: Timestamp,
    tz: &Tz,
) -> Vec<ProgressDataPoint> {
    let window_size = window_size.max(1);
    let cutoff = (days > 0).then(|| now.days_before_in(days, tz));
    let sorted: Vec<&GuessRecord> = chronological(
        records
            .iter()
            .filter(|record| cutoff.is_none_or(|cutoff| record.timestamp() >= cutoff)),
    );

    let Some(last) = sorted.last() else {
        return Vec::new();
    };

    if sorted.len() < window_size {
        let exact = sorted.iter().filter(|r| r.exact_match()).count();
        return vec![ProgressDataPoint {
            date: last.timestamp().date_in(tz),
            accuracy: percentage(exact, sorted.len()),
            guess_count: sorted.len(),
        }];
    }

    let mut points = Vec::with_capacity(sorted.len() - window_size + 1);
    let mut hits = 0;
    for (i, record) in sorted.iter().enumerate() {
        if record.exact_match() {
            hits += 1;
        }
        if i >= window_size && sorted[i - window_size].exact_match() {
            hits -= 1;
        }
        if i + 1 >= window_size {
            points.push(ProgressDataPoint {
                date: record.timestamp().date_in(tz),
                accuracy: percentage(hits, window_size),
                guess_count: i + 1,
            });
        }
    }
    points
}
