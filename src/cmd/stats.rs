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

use clap::ValueEnum;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::report::StatsReport;
use crate::stats::format::format_day_name;
use crate::stats::format::format_time_slot;
use crate::stats::progress::TimeRange;
use crate::types::deck_type::DeckType;
use crate::types::timestamp::Timestamp;

/// Rows shown per accuracy ranking in text output.
const TOP: usize = 5;

#[derive(ValueEnum, Clone, Copy)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(
    directory: Option<String>,
    deck: Option<DeckType>,
    range: TimeRange,
    format: StatsFormat,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let report = StatsReport::compute(&coll.db, deck, range, Timestamp::now())?;
    match format {
        StatsFormat::Text => {
            print!("{}", render_text(&report));
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&report)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

fn render_text(report: &StatsReport) -> String {
    let mut out = match report.deck_type {
        Some(deck_type) => format!("Deck: {deck_type}\n"),
        None => "Deck: all\n".to_string(),
    };
    out.push_str(&format!("Guesses: {}\n", report.total_guesses));
    if report.total_guesses == 0 {
        out.push_str("No guesses yet.\n");
        return out;
    }

    if let Some(stats) = &report.deck_stats {
        out.push_str(&format!(
            "Accuracy: {}% exact, {}% suit, {}% number\n",
            stats.accuracy, stats.suit_accuracy, stats.number_accuracy
        ));
        if let Some(chance) = report.chance_accuracy {
            out.push_str(&format!("Chance: {chance:.2}%\n"));
        }
        out.push_str(&format!(
            "Streaks: best {}, current {}\n",
            stats.best_streak, stats.current_streak
        ));
    }

    match &report.best_time_slot {
        Some(slot) => out.push_str(&format!(
            "Best time: {} at {} ({}%)\n",
            format_day_name(slot.day),
            format_time_slot(slot.hour),
            slot.accuracy
        )),
        None => out.push_str("Best time: not enough data\n"),
    }

    out.push_str("Top cards:\n");
    for card in report.card_accuracy.iter().take(TOP) {
        out.push_str(&ranking_line(
            &card.card_name,
            card.accuracy,
            card.successes,
            card.attempts,
        ));
    }
    out.push_str("Top suits:\n");
    for suit in report.suit_accuracy.iter().take(TOP) {
        out.push_str(&ranking_line(
            &suit.suit,
            suit.accuracy,
            suit.successes,
            suit.attempts,
        ));
    }
    if !report.number_accuracy.is_empty() {
        out.push_str("Top numbers:\n");
        for number in report.number_accuracy.iter().take(TOP) {
            out.push_str(&ranking_line(
                &number.number,
                number.accuracy,
                number.successes,
                number.attempts,
            ));
        }
    }

    out.push_str(&format!("Progress ({}):\n", report.range));
    match report.progress.last() {
        Some(point) => out.push_str(&format!(
            "  {} points, latest {}% on {} after {} guesses\n",
            report.progress.len(),
            point.accuracy,
            point.date,
            point.guess_count
        )),
        None => out.push_str("  no guesses in range\n"),
    }
    out
}

fn ranking_line(label: &str, accuracy: f64, successes: usize, attempts: usize) -> String {
    format!("  {label}: {accuracy}% ({successes}/{attempts})\n")
}
