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

use rusqlite::Connection;
use rusqlite::Row;
use rusqlite::ToSql;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::deck_type::DeckType;
use crate::types::guess::Guess;
use crate::types::guess::GuessRecord;
use crate::types::guess_id::GuessId;
use crate::types::timestamp::Timestamp;

/// Where guess records come from. The statistics code only ever reads.
pub trait GuessRepository {
    fn save_guess(&self, record: &GuessRecord) -> Fallible<()>;

    /// Every record, newest first.
    fn all_guesses(&self) -> Fallible<Vec<GuessRecord>>;

    /// Every record for one deck, newest first.
    fn guesses_for_deck(&self, deck_type: DeckType) -> Fallible<Vec<GuessRecord>>;
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating schema in {database_path}.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Number of stored guesses, optionally for one deck.
    pub fn guess_count(&self, deck_type: Option<DeckType>) -> Fallible<usize> {
        let count: i64 = match deck_type {
            Some(deck_type) => self.conn.query_row(
                "select count(*) from guesses where deck_type = ?;",
                [deck_type],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("select count(*) from guesses;", [], |row| row.get(0))?,
        };
        Ok(count as usize)
    }

    /// Delete guesses made before `cutoff`. Returns how many were deleted.
    pub fn delete_guesses_before(&self, cutoff: Timestamp) -> Fallible<usize> {
        let deleted = self
            .conn
            .execute("delete from guesses where timestamp < ?;", [cutoff])?;
        log::info!("Deleted {deleted} guesses older than {}.", cutoff.as_millis());
        Ok(deleted)
    }

    /// Delete every guess.
    pub fn clear(&self) -> Fallible<()> {
        self.conn.execute_batch("delete from guesses;")?;
        Ok(())
    }

    fn query_guesses(&self, sql: &str, params: &[&dyn ToSql]) -> Fallible<Vec<GuessRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let row = GuessRow::read(row)?;
            records.push(row.into_record()?);
        }
        log::debug!("Loaded {} guesses.", records.len());
        Ok(records)
    }
}

impl GuessRepository for Database {
    fn save_guess(&self, record: &GuessRecord) -> Fallible<()> {
        log::debug!("Saving guess {}.", record.id());
        let row = GuessRow::from_record(record);
        let sql = "insert into guesses (id, timestamp, deck_type, guessed_suit, guessed_number, actual_suit, actual_number, suit_match, number_match, exact_match) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);";
        self.conn.execute(
            sql,
            (
                row.id,
                row.timestamp,
                row.deck_type,
                &row.guessed_suit,
                &row.guessed_number,
                &row.actual_suit,
                &row.actual_number,
                row.suit_match,
                row.number_match,
                row.exact_match,
            ),
        )?;
        Ok(())
    }

    fn all_guesses(&self) -> Fallible<Vec<GuessRecord>> {
        self.query_guesses("select * from guesses order by timestamp desc;", &[])
    }

    fn guesses_for_deck(&self, deck_type: DeckType) -> Fallible<Vec<GuessRecord>> {
        self.query_guesses(
            "select * from guesses where deck_type = ? order by timestamp desc;",
            &[&deck_type],
        )
    }
}

/// A record as it is laid out in the `guesses` table.
struct GuessRow {
    id: GuessId,
    timestamp: Timestamp,
    deck_type: DeckType,
    guessed_suit: String,
    guessed_number: Option<String>,
    actual_suit: String,
    actual_number: Option<String>,
    suit_match: bool,
    number_match: bool,
    exact_match: bool,
}

impl GuessRow {
    fn read(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            timestamp: row.get("timestamp")?,
            deck_type: row.get("deck_type")?,
            guessed_suit: row.get("guessed_suit")?,
            guessed_number: row.get("guessed_number")?,
            actual_suit: row.get("actual_suit")?,
            actual_number: row.get("actual_number")?,
            suit_match: row.get("suit_match")?,
            number_match: row.get("number_match")?,
            exact_match: row.get("exact_match")?,
        })
    }

    fn from_record(record: &GuessRecord) -> Self {
        Self {
            id: record.id(),
            timestamp: record.timestamp(),
            deck_type: record.deck_type(),
            guessed_suit: record.guessed_suit().to_string(),
            guessed_number: record.guessed_number().map(str::to_string),
            actual_suit: record.actual_suit().to_string(),
            actual_number: record.actual_number().map(str::to_string),
            suit_match: record.suit_match(),
            number_match: record.number_match(),
            exact_match: record.exact_match(),
        }
    }

    /// Rows that break the record invariants are rejected rather than
    /// repaired.
    fn into_record(self) -> Fallible<GuessRecord> {
        let guess = match (self.guessed_number, self.actual_number) {
            (None, None) => Guess::SuitOnly {
                guessed_suit: self.guessed_suit,
                actual_suit: self.actual_suit,
                suit_match: self.suit_match,
            },
            (Some(guessed_number), Some(actual_number)) => Guess::SuitAndNumber {
                guessed_suit: self.guessed_suit,
                guessed_number,
                actual_suit: self.actual_suit,
                actual_number,
                suit_match: self.suit_match,
                number_match: self.number_match,
            },
            _ => {
                return fail(format!(
                    "guess {} has a number on only one side.",
                    self.id
                ));
            }
        };
        let record = GuessRecord::new(self.id, self.timestamp, self.deck_type, guess)?;
        if record.exact_match() != self.exact_match {
            return fail(format!(
                "guess {} has an exact_match flag inconsistent with its suit and number flags.",
                self.id
            ));
        }
        Ok(record)
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["guesses"], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::deck::CardChoice;
    use crate::deck::find_card;

    fn temp_db() -> Fallible<(tempfile::TempDir, Database)> {
        let dir = tempdir()?;
        let path = dir.path().join("telepathy.db");
        let db = Database::new(path.to_str().unwrap())?;
        Ok((dir, db))
    }

    fn reveal(
        deck_type: DeckType,
        suit: &str,
        number: Option<&str>,
        actual: (&str, Option<&str>),
        millis: i64,
    ) -> Fallible<GuessRecord> {
        let choice = CardChoice::new(deck_type, suit, number)?;
        let card = find_card(deck_type, actual.0, actual.1).unwrap();
        GuessRecord::reveal(&choice, card, Timestamp::from_millis(millis)?)
    }

    #[test]
    fn test_round_trip() -> Fallible<()> {
        let (_dir, db) = temp_db()?;
        let zener = reveal(DeckType::Zener, "star", None, ("star", None), 1000)?;
        let playing = reveal(
            DeckType::Playing,
            "hearts",
            Some("Ace"),
            ("hearts", Some("King")),
            2000,
        )?;
        db.save_guess(&zener)?;
        db.save_guess(&playing)?;

        let all = db.all_guesses()?;
        assert_eq!(all, vec![playing.clone(), zener.clone()]);
        assert_eq!(db.guesses_for_deck(DeckType::Zener)?, vec![zener]);
        assert_eq!(db.guesses_for_deck(DeckType::Playing)?, vec![playing]);
        assert!(db.guesses_for_deck(DeckType::Rws)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_reopen_keeps_data() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("telepathy.db");
        let path = path.to_str().unwrap();
        {
            let db = Database::new(path)?;
            db.save_guess(&reveal(DeckType::Zener, "cross", None, ("waves", None), 1)?)?;
        }
        let db = Database::new(path)?;
        assert_eq!(db.guess_count(None)?, 1);
        Ok(())
    }

    #[test]
    fn test_counts_prune_clear() -> Fallible<()> {
        let (_dir, db) = temp_db()?;
        for millis in [1000, 2000, 3000] {
            db.save_guess(&reveal(DeckType::Zener, "star", None, ("circle", None), millis)?)?;
        }
        db.save_guess(&reveal(
            DeckType::Rws,
            "major",
            Some("0"),
            ("major", Some("0")),
            4000,
        )?)?;
        assert_eq!(db.guess_count(None)?, 4);
        assert_eq!(db.guess_count(Some(DeckType::Zener))?, 3);

        let deleted = db.delete_guesses_before(Timestamp::from_millis(2500)?)?;
        assert_eq!(deleted, 2);
        assert_eq!(db.guess_count(None)?, 2);

        db.clear()?;
        assert_eq!(db.guess_count(None)?, 0);
        Ok(())
    }

    #[test]
    fn test_rejects_inconsistent_rows() -> Fallible<()> {
        let (_dir, db) = temp_db()?;
        let sql = "insert into guesses (id, timestamp, deck_type, guessed_suit, guessed_number, actual_suit, actual_number, suit_match, number_match, exact_match) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);";
        // A zener guess carrying numbers.
        db.conn.execute(
            sql,
            (
                GuessId::generate(),
                1000,
                "zener",
                "star",
                Some("1"),
                "star",
                Some("1"),
                true,
                true,
                true,
            ),
        )?;
        assert!(db.all_guesses().is_err());

        db.clear()?;
        // An exact match whose number does not match.
        db.conn.execute(
            sql,
            (
                GuessId::generate(),
                1000,
                "playing",
                "hearts",
                Some("Ace"),
                "hearts",
                Some("2"),
                true,
                false,
                true,
            ),
        )?;
        assert!(db.all_guesses().is_err());
        Ok(())
    }
}
