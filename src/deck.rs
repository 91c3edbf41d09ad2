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

//! The card catalog: every suit, number and card of the four decks.

use std::sync::LazyLock;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::deck_type::DeckType;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Suit {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Card {
    pub id: String,
    pub deck_type: DeckType,
    pub suit: &'static str,
    /// Absent for suit-only decks.
    pub number: Option<&'static str>,
    pub name: String,
}

const fn suit(id: &'static str, name: &'static str) -> Suit {
    Suit { id, name }
}

const ZENER_SUITS: [Suit; 5] = [
    suit("circle", "Circle"),
    suit("cross", "Cross"),
    suit("waves", "Waves"),
    suit("square", "Square"),
    suit("star", "Star"),
];

const RWS_SUITS: [Suit; 5] = [
    suit("major", "Major Arcana"),
    suit("wands", "Wands"),
    suit("cups", "Cups"),
    suit("swords", "Swords"),
    suit("pentacles", "Pentacles"),
];

const THOTH_SUITS: [Suit; 5] = [
    suit("major", "Major Arcana"),
    suit("wands", "Wands"),
    suit("cups", "Cups"),
    suit("swords", "Swords"),
    suit("disks", "Disks"),
];

const PLAYING_SUITS: [Suit; 4] = [
    suit("hearts", "Hearts"),
    suit("diamonds", "Diamonds"),
    suit("clubs", "Clubs"),
    suit("spades", "Spades"),
];

const RWS_MAJOR_ARCANA: [&str; 22] = [
    "0. The Fool",
    "I. The Magician",
    "II. The High Priestess",
    "III. The Empress",
    "IV. The Emperor",
    "V. The Hierophant",
    "VI. The Lovers",
    "VII. The Chariot",
    "VIII. Strength",
    "IX. The Hermit",
    "X. Wheel of Fortune",
    "XI. Justice",
    "XII. The Hanged Man",
    "XIII. Death",
    "XIV. Temperance",
    "XV. The Devil",
    "XVI. The Tower",
    "XVII. The Star",
    "XVIII. The Moon",
    "XIX. The Sun",
    "XX. Judgement",
    "XXI. The World",
];

const THOTH_MAJOR_ARCANA: [&str; 22] = [
    "0. The Fool",
    "I. The Magus",
    "II. The Priestess",
    "III. The Empress",
    "IV. The Emperor",
    "V. The Hierophant",
    "VI. The Lovers",
    "VII. The Chariot",
    "VIII. Adjustment",
    "IX. The Hermit",
    "X. Fortune",
    "XI. Lust",
    "XII. The Hanged Man",
    "XIII. Death",
    "XIV. Art",
    "XV. The Devil",
    "XVI. The Tower",
    "XVII. The Star",
    "XVIII. The Moon",
    "XIX. The Sun",
    "XX. The Aeon",
    "XXI. The Universe",
];

const MAJOR_NUMBERS: [&str; 22] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21",
];

const RWS_MINOR_NUMBERS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

const THOTH_MINOR_NUMBERS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Princess",
    "Prince", "Queen", "Knight",
];

const PLAYING_NUMBERS: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

static ZENER_CARDS: LazyLock<Vec<Card>> = LazyLock::new(|| {
    ZENER_SUITS
        .iter()
        .map(|s| Card {
            id: format!("zener-{}", s.id),
            deck_type: DeckType::Zener,
            suit: s.id,
            number: None,
            name: s.name.to_string(),
        })
        .collect()
});

static RWS_CARDS: LazyLock<Vec<Card>> = LazyLock::new(|| {
    tarot_cards(
        DeckType::Rws,
        &RWS_MAJOR_ARCANA,
        &RWS_SUITS[1..],
        &RWS_MINOR_NUMBERS,
    )
});

static THOTH_CARDS: LazyLock<Vec<Card>> = LazyLock::new(|| {
    tarot_cards(
        DeckType::Thoth,
        &THOTH_MAJOR_ARCANA,
        &THOTH_SUITS[1..],
        &THOTH_MINOR_NUMBERS,
    )
});

static PLAYING_CARDS: LazyLock<Vec<Card>> =
    LazyLock::new(|| numbered_cards(DeckType::Playing, &PLAYING_SUITS, &PLAYING_NUMBERS));

fn tarot_cards(
    deck_type: DeckType,
    major_arcana: &[&'static str; 22],
    minor_suits: &[Suit],
    minor_numbers: &[&'static str],
) -> Vec<Card> {
    let mut cards: Vec<Card> = major_arcana
        .iter()
        .zip(MAJOR_NUMBERS)
        .map(|(name, number)| Card {
            id: format!("{deck_type}-major-{number}"),
            deck_type,
            suit: "major",
            number: Some(number),
            name: name.to_string(),
        })
        .collect();
    cards.extend(numbered_cards(deck_type, minor_suits, minor_numbers));
    cards
}

fn numbered_cards(deck_type: DeckType, suits: &[Suit], numbers: &[&'static str]) -> Vec<Card> {
    suits
        .iter()
        .flat_map(|s| {
            numbers.iter().map(move |number| Card {
                id: format!("{deck_type}-{}-{}", s.id, number.to_lowercase()),
                deck_type,
                suit: s.id,
                number: Some(*number),
                name: format!("{number} of {}", s.name),
            })
        })
        .collect()
}

/// Every card in the deck.
pub fn cards(deck_type: DeckType) -> &'static [Card] {
    match deck_type {
        DeckType::Zener => &ZENER_CARDS,
        DeckType::Rws => &RWS_CARDS,
        DeckType::Thoth => &THOTH_CARDS,
        DeckType::Playing => &PLAYING_CARDS,
    }
}

pub fn suits(deck_type: DeckType) -> &'static [Suit] {
    match deck_type {
        DeckType::Zener => &ZENER_SUITS,
        DeckType::Rws => &RWS_SUITS,
        DeckType::Thoth => &THOTH_SUITS,
        DeckType::Playing => &PLAYING_SUITS,
    }
}

/// The numbers available within one suit, in catalog order. Empty for
/// suit-only decks and unknown suits.
pub fn numbers_for_suit(deck_type: DeckType, suit: &str) -> Vec<&'static str> {
    cards(deck_type)
        .iter()
        .filter(|card| card.suit == suit)
        .filter_map(|card| card.number)
        .collect()
}

pub fn find_card(deck_type: DeckType, suit: &str, number: Option<&str>) -> Option<&'static Card> {
    cards(deck_type)
        .iter()
        .find(|card| card.suit == suit && card.number == number)
}

/// The exact-match rate expected from pure guessing, as a percentage.
pub fn chance_accuracy(deck_type: DeckType) -> f64 {
    100.0 / cards(deck_type).len() as f64
}

/// A user's guess, validated against the catalog.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CardChoice {
    deck_type: DeckType,
    suit: String,
    number: Option<String>,
}

impl CardChoice {
    pub fn new(deck_type: DeckType, suit: &str, number: Option<&str>) -> Fallible<Self> {
        if !suits(deck_type).iter().any(|s| s.id == suit) {
            return fail(format!("unknown suit '{suit}' for the {deck_type} deck."));
        }
        match (deck_type.has_numbers(), number) {
            (false, Some(_)) => {
                return fail(format!("the {deck_type} deck has no numbers."));
            }
            (true, None) => {
                return fail(format!("the {deck_type} deck requires a number."));
            }
            _ => {}
        }
        if find_card(deck_type, suit, number).is_none() {
            return fail(format!(
                "no card '{}' in suit '{suit}' of the {deck_type} deck.",
                number.unwrap_or_default()
            ));
        }
        Ok(Self {
            deck_type,
            suit: suit.to_string(),
            number: number.map(str::to_string),
        })
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    pub fn suit(&self) -> &str {
        &self.suit
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_sizes() {
        assert_eq!(cards(DeckType::Zener).len(), 5);
        assert_eq!(cards(DeckType::Rws).len(), 78);
        assert_eq!(cards(DeckType::Thoth).len(), 78);
        assert_eq!(cards(DeckType::Playing).len(), 52);
    }

    #[test]
    fn test_zener_cards_have_no_numbers() {
        assert!(cards(DeckType::Zener).iter().all(|c| c.number.is_none()));
        assert!(numbers_for_suit(DeckType::Zener, "circle").is_empty());
    }

    #[test]
    fn test_card_ids_and_names() {
        let card = find_card(DeckType::Playing, "hearts", Some("Ace")).unwrap();
        assert_eq!(card.id, "playing-hearts-ace");
        assert_eq!(card.name, "Ace of Hearts");

        let card = find_card(DeckType::Thoth, "major", Some("11")).unwrap();
        assert_eq!(card.id, "thoth-major-11");
        assert_eq!(card.name, "XI. Lust");

        let card = find_card(DeckType::Rws, "pentacles", Some("Page")).unwrap();
        assert_eq!(card.id, "rws-pentacles-page");
        assert_eq!(card.name, "Page of Pentacles");

        let card = find_card(DeckType::Zener, "waves", None).unwrap();
        assert_eq!(card.id, "zener-waves");
        assert_eq!(card.name, "Waves");
    }

    #[test]
    fn test_numbers_for_suit() {
        assert_eq!(numbers_for_suit(DeckType::Rws, "major").len(), 22);
        assert_eq!(
            numbers_for_suit(DeckType::Thoth, "disks")[10..],
            ["Princess", "Prince", "Queen", "Knight"]
        );
        assert!(numbers_for_suit(DeckType::Playing, "major").is_empty());
    }

    #[test]
    fn test_chance_accuracy() {
        assert_eq!(chance_accuracy(DeckType::Zener), 20.0);
        assert!((chance_accuracy(DeckType::Playing) - 1.923).abs() < 0.001);
    }

    #[test]
    fn test_card_choice() -> Fallible<()> {
        let choice = CardChoice::new(DeckType::Playing, "spades", Some("Queen"))?;
        assert_eq!(choice.suit(), "spades");
        assert_eq!(choice.number(), Some("Queen"));
        assert!(CardChoice::new(DeckType::Zener, "star", None).is_ok());

        assert!(CardChoice::new(DeckType::Zener, "star", Some("1")).is_err());
        assert!(CardChoice::new(DeckType::Playing, "spades", None).is_err());
        assert!(CardChoice::new(DeckType::Playing, "cups", Some("Ace")).is_err());
        assert!(CardChoice::new(DeckType::Playing, "spades", Some("Page")).is_err());
        Ok(())
    }
}
