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
use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// The four decks a user can practice with.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum DeckType {
    /// Zener cards: five symbols, no numbers.
    Zener,
    /// Rider-Waite-Smith tarot.
    Rws,
    /// Thoth tarot.
    Thoth,
    /// Standard 52-card playing deck.
    Playing,
}

impl DeckType {
    pub const ALL: [DeckType; 4] = [
        DeckType::Zener,
        DeckType::Rws,
        DeckType::Thoth,
        DeckType::Playing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeckType::Zener => "zener",
            DeckType::Rws => "rws",
            DeckType::Thoth => "thoth",
            DeckType::Playing => "playing",
        }
    }

    /// Whether cards in this deck carry a number in addition to a suit.
    pub fn has_numbers(&self) -> bool {
        match self {
            DeckType::Zener => false,
            DeckType::Rws | DeckType::Thoth | DeckType::Playing => true,
        }
    }
}

impl Display for DeckType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for DeckType {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "zener" => Ok(DeckType::Zener),
            "rws" => Ok(DeckType::Rws),
            "thoth" => Ok(DeckType::Thoth),
            "playing" => Ok(DeckType::Playing),
            _ => fail(format!("Invalid deck type: {}", value)),
        }
    }
}

impl ToSql for DeckType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for DeckType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        DeckType::try_from(string.as_str()).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        for deck in DeckType::ALL {
            assert_eq!(DeckType::try_from(deck.as_str()).unwrap(), deck);
        }
        assert!(DeckType::try_from("tarot").is_err());
    }

    #[test]
    fn test_only_zener_is_suit_only() {
        assert!(!DeckType::Zener.has_numbers());
        assert!(DeckType::Rws.has_numbers());
        assert!(DeckType::Thoth.has_numbers());
        assert!(DeckType::Playing.has_numbers());
    }
}
