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

use crate::deck::Card;
use crate::error::Fallible;
use crate::error::fail;

/// Draw a card uniformly at random using the operating system's CSPRNG. The
/// draw never sees the user's guess.
pub fn draw_card(cards: &[Card]) -> Fallible<&Card> {
    draw_card_with(&mut OsRng, cards)
}

pub fn draw_card_with<'a, R: Rng + CryptoRng>(
    rng: &mut R,
    cards: &'a [Card],
) -> Fallible<&'a Card> {
    if cards.is_empty() {
        return fail("cannot draw from an empty set of cards.");
    }
    let index = rng.gen_range(0..cards.len());
    log::debug!("Drew card {index} of {}.", cards.len());
    Ok(&cards[index])
}
