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

use rand::CryptoRng;
use rand::Rng;
use rand::rngs::OsRng;

use crate::collection::Collection;
use crate::db::GuessRepository;
use crate::deck::Card;
use crate::deck::CardChoice;
use crate::deck::cards;
use crate::draw::draw_card_with;
use crate::error::Fallible;
use crate::prefs::PreferencesStore;
use crate::types::deck_type::DeckType;
use crate::types::guess::GuessRecord;
use crate::types::timestamp::Timestamp;

const HELP: &str = "\
Welcome to telepathy.

Decks:
  zener    5 symbols, suit only. Chance accuracy 20%.
  playing  52 cards, 4 suits of 13 ranks. Chance accuracy about 1.9%.
  rws      Rider-Waite-Smith tarot: 22 major arcana plus wands, cups,
           swords and pentacles. Chance accuracy about 1.3%.
  thoth    Thoth tarot: as rws, with disks for pentacles and
           princess/prince for page/knight. Chance accuracy about 1.3%.

Results:
  An exact match gets the suit and the number right (just the suit for
  zener). A partial match gets one of the two. Accuracy counts exact
  matches only, and a streak is a run of consecutive exact matches.
  `telepathy stats` shows when you guess best and how your rolling
  accuracy changes. Wait for 50 to 100 guesses before reading much into
  it.

Practice:
  Find a quiet place and take a few deep breaths. Go with your first
  impression. Start with zener, then move to larger decks.
";

pub fn make_guess(
    directory: Option<String>,
    deck: Option<DeckType>,
    suit: String,
    number: Option<String>,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    if let Some(help) = first_run_help(&coll.prefs)? {
        println!("{help}");
    }
    let prefs = coll.prefs.load()?;
    let deck_type = deck.unwrap_or(prefs.selected_deck);
    if prefs.show_concentration_prompt {
        println!("Concentrate on the {deck_type} deck...");
    }
    let (record, card) = record_guess(
        &coll,
        deck_type,
        &suit,
        number.as_deref(),
        &mut OsRng,
        Timestamp::now(),
    )?;
    println!("The card was: {}.", card.name);
    println!("{}", describe(&record));
    Ok(())
}

/// The help text, the first time only.
fn first_run_help(store: &impl PreferencesStore) -> Fallible<Option<&'static str>> {
    let mut prefs = store.load()?;
    if prefs.has_seen_help {
        return Ok(None);
    }
    prefs.has_seen_help = true;
    store.save(&prefs)?;
    Ok(Some(HELP))
}

/// Validate the choice, draw a card after it is fixed, and store the outcome.
pub fn record_guess<R: Rng + CryptoRng>(
    coll: &Collection,
    deck_type: DeckType,
    suit: &str,
    number: Option<&str>,
    rng: &mut R,
    now: Timestamp,
) -> Fallible<(GuessRecord, &'static Card)> {
    let choice = CardChoice::new(deck_type, suit, number)?;
    let card = draw_card_with(rng, cards(deck_type))?;
    let record = GuessRecord::reveal(&choice, card, now)?;
    coll.db.save_guess(&record)?;
    Ok((record, card))
}

fn describe(record: &GuessRecord) -> &'static str {
    if record.exact_match() {
        "Exact match!"
    } else if record.suit_match() {
        "Suit match."
    } else if record.guessed_number().is_some() && record.number_match() {
        "Number match."
    } else {
        "Miss."
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    use super::*;
    use crate::prefs::PreferencesFile;

    #[test]
    fn test_record_guess() -> Fallible<()> {
        let dir = tempdir()?;
        let coll = Collection::new(Some(dir.path().display().to_string()))?;
        let mut rng = StdRng::seed_from_u64(42);
        let now = Timestamp::from_millis(1_700_000_000_000)?;
        let (record, card) = record_guess(
            &coll,
            DeckType::Playing,
            "spades",
            Some("Queen"),
            &mut rng,
            now,
        )?;
        assert_eq!(record.timestamp(), now);
        assert_eq!(record.actual_suit(), card.suit);
        assert_eq!(record.actual_number(), card.number);
        assert_eq!(record.guessed_suit(), "spades");
        assert_eq!(coll.db.all_guesses()?, vec![record]);
        Ok(())
    }

    #[test]
    fn test_invalid_choice_is_not_recorded() -> Fallible<()> {
        let dir = tempdir()?;
        let coll = Collection::new(Some(dir.path().display().to_string()))?;
        let mut rng = StdRng::seed_from_u64(42);
        let now = Timestamp::from_millis(1_700_000_000_000)?;
        assert!(record_guess(&coll, DeckType::Zener, "star", Some("3"), &mut rng, now).is_err());
        assert!(record_guess(&coll, DeckType::Rws, "disks", Some("Ace"), &mut rng, now).is_err());
        assert_eq!(coll.db.guess_count(None)?, 0);
        Ok(())
    }

    #[test]
    fn test_help_shown_once() -> Fallible<()> {
        let dir = tempdir()?;
        let store = PreferencesFile::new(dir.path().join("preferences.toml"));
        let help = first_run_help(&store)?.unwrap();
        for deck in DeckType::ALL {
            assert!(help.contains(&format!("  {deck} ")));
        }
        assert!(help.contains("exact match"));
        assert!(help.contains("streak"));
        assert!(help.contains("Chance accuracy 20%"));
        assert!(store.load()?.has_seen_help);
        assert_eq!(first_run_help(&store)?, None);
        Ok(())
    }

    #[test]
    fn test_non_existent_directory() {
        let result = make_guess(
            Some("./derpherp".to_string()),
            None,
            "star".to_string(),
            None,
        );
        assert!(result.is_err());
    }
}
