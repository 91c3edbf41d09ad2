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

use crate::deck::Card;
use crate::deck::CardChoice;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::deck_type::DeckType;
use crate::types::guess_id::GuessId;
use crate::types::timestamp::Timestamp;

/// What was guessed and what was drawn. The match flags are computed once,
/// when the card is revealed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Guess {
    /// A guess in a deck whose cards have no numbers.
    SuitOnly {
        guessed_suit: String,
        actual_suit: String,
        suit_match: bool,
    },
    SuitAndNumber {
        guessed_suit: String,
        guessed_number: String,
        actual_suit: String,
        actual_number: String,
        suit_match: bool,
        number_match: bool,
    },
}

impl Guess {
    /// Compare a choice against the drawn card.
    pub fn reveal(choice: &CardChoice, actual: &Card) -> Fallible<Self> {
        let suit_match = choice.suit() == actual.suit;
        match (choice.number(), actual.number) {
            (None, None) => Ok(Guess::SuitOnly {
                guessed_suit: choice.suit().to_string(),
                actual_suit: actual.suit.to_string(),
                suit_match,
            }),
            (Some(guessed), Some(drawn)) => Ok(Guess::SuitAndNumber {
                guessed_suit: choice.suit().to_string(),
                guessed_number: guessed.to_string(),
                actual_suit: actual.suit.to_string(),
                actual_number: drawn.to_string(),
                suit_match,
                number_match: guessed == drawn,
            }),
            _ => fail("guess and drawn card disagree on whether the deck is numbered."),
        }
    }
}

/// One completed guess-and-reveal event.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GuessRecord {
    id: GuessId,
    timestamp: Timestamp,
    deck_type: DeckType,
    guess: Guess,
}

impl GuessRecord {
    /// Build a record, rejecting a guess whose shape does not fit the deck: a
    /// number on a suit-only deck, or a missing number on a numbered one.
    pub fn new(
        id: GuessId,
        timestamp: Timestamp,
        deck_type: DeckType,
        guess: Guess,
    ) -> Fallible<Self> {
        let numbered = matches!(guess, Guess::SuitAndNumber { .. });
        if numbered != deck_type.has_numbers() {
            return fail(format!(
                "guess {id} does not match the shape of the {deck_type} deck."
            ));
        }
        Ok(Self {
            id,
            timestamp,
            deck_type,
            guess,
        })
    }

    /// Record the outcome of drawing `actual` against the user's `choice`.
    pub fn reveal(choice: &CardChoice, actual: &Card, timestamp: Timestamp) -> Fallible<Self> {
        if choice.deck_type() != actual.deck_type {
            return fail("guess and drawn card come from different decks.");
        }
        let guess = Guess::reveal(choice, actual)?;
        Self::new(GuessId::generate(), timestamp, actual.deck_type, guess)
    }

    pub fn id(&self) -> GuessId {
        self.id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    pub fn guessed_suit(&self) -> &str {
        match &self.guess {
            Guess::SuitOnly { guessed_suit, .. } => guessed_suit,
            Guess::SuitAndNumber { guessed_suit, .. } => guessed_suit,
        }
    }

    pub fn guessed_number(&self) -> Option<&str> {
        match &self.guess {
            Guess::SuitOnly { .. } => None,
            Guess::SuitAndNumber { guessed_number, .. } => Some(guessed_number),
        }
    }

    pub fn actual_suit(&self) -> &str {
        match &self.guess {
            Guess::SuitOnly { actual_suit, .. } => actual_suit,
            Guess::SuitAndNumber { actual_suit, .. } => actual_suit,
        }
    }

    pub fn actual_number(&self) -> Option<&str> {
        match &self.guess {
            Guess::SuitOnly { .. } => None,
            Guess::SuitAndNumber { actual_number, .. } => Some(actual_number),
        }
    }

    pub fn suit_match(&self) -> bool {
        match &self.guess {
            Guess::SuitOnly { suit_match, .. } => *suit_match,
            Guess::SuitAndNumber { suit_match, .. } => *suit_match,
        }
    }

    /// A suit-only guess has nothing to get wrong on the number axis, so it
    /// counts as a number match.
    pub fn number_match(&self) -> bool {
        match &self.guess {
            Guess::SuitOnly { .. } => true,
            Guess::SuitAndNumber { number_match, .. } => *number_match,
        }
    }

    pub fn exact_match(&self) -> bool {
        self.suit_match() && self.number_match()
    }
}
