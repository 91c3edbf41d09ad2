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

use clap::Parser;

use crate::cmd::cards::list_cards;
use crate::cmd::guess::make_guess;
use crate::cmd::prefs::update_prefs;
use crate::cmd::prune::prune_guesses;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;
use crate::stats::progress::TimeRange;
use crate::types::deck_type::DeckType;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Guess a card, then draw one and record the outcome.
    Guess {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// The deck to draw from. Defaults to the selected deck.
        #[arg(long)]
        deck: Option<DeckType>,
        /// The guessed suit, e.g. `star` or `hearts`.
        #[arg(long)]
        suit: String,
        /// The guessed number. Required for every deck except zener.
        #[arg(long)]
        number: Option<String>,
    },
    /// Print accuracy statistics.
    Stats {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// Restrict the statistics to one deck.
        #[arg(long)]
        deck: Option<DeckType>,
        /// How far back the progress series reaches.
        #[arg(long, value_enum, default_value_t = TimeRange::All)]
        range: TimeRange,
        /// The output format.
        #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// List the cards in a deck.
    Cards {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// The deck to list. Defaults to the selected deck.
        #[arg(long)]
        deck: Option<DeckType>,
    },
    /// Delete old guesses.
    Prune {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// Delete guesses made more than this many days ago.
        #[arg(long)]
        older_than_days: u32,
    },
    /// Show or change preferences.
    Prefs {
        /// Optional path to the data directory.
        directory: Option<String>,
        /// Select the default deck.
        #[arg(long)]
        deck: Option<DeckType>,
        /// Whether to show the concentration prompt before guessing.
        #[arg(long)]
        concentration_prompt: Option<bool>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Guess {
            directory,
            deck,
            suit,
            number,
        } => make_guess(directory, deck, suit, number),
        Command::Stats {
            directory,
            deck,
            range,
            format,
        } => print_stats(directory, deck, range, format),
        Command::Cards { directory, deck } => list_cards(directory, deck),
        Command::Prune {
            directory,
            older_than_days,
        } => prune_guesses(directory, older_than_days),
        Command::Prefs {
            directory,
            deck,
            concentration_prompt,
        } => update_prefs(directory, deck, concentration_prompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_positional() {
        let cli = Command::try_parse_from(["telepathy", "stats", "/tmp/data", "--range", "7d"]);
        match cli {
            Ok(Command::Stats {
                directory, range, ..
            }) => {
                assert_eq!(directory.as_deref(), Some("/tmp/data"));
                assert_eq!(range, TimeRange::Week);
            }
            _ => panic!("expected the stats command"),
        }
        assert!(Command::try_parse_from(["telepathy", "stats", "--directory", "/tmp"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Command::try_parse_from(["telepathy", "prefs"]);
        match cli {
            Ok(Command::Prefs {
                directory,
                deck,
                concentration_prompt,
            }) => {
                assert_eq!(directory, None);
                assert_eq!(deck, None);
                assert_eq!(concentration_prompt, None);
            }
            _ => panic!("expected the prefs command"),
        }
        let cli = Command::try_parse_from([
            "telepathy",
            "guess",
            "--deck",
            "playing",
            "--suit",
            "hearts",
            "--number",
            "Ace",
        ]);
        match cli {
            Ok(Command::Guess {
                directory,
                deck,
                suit,
                number,
            }) => {
                assert_eq!(directory, None);
                assert_eq!(deck, Some(DeckType::Playing));
                assert_eq!(suit, "hearts");
                assert_eq!(number.as_deref(), Some("Ace"));
            }
            _ => panic!("expected the guess command"),
        }
    }
}
