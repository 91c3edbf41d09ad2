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

use chrono::DateTime;
use chrono::Datelike;
use chrono::Days;
use chrono::NaiveDateTime;
use chrono::Offset;
use chrono::TimeDelta;
use chrono::TimeZone;
use chrono::Timelike;
use chrono::Utc;
use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::date::Date;

/// An instant, stored as milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(ts: DateTime<Utc>) -> Self {
        Self(ts)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_millis(millis: i64) -> Fallible<Self> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| ErrorReport::new(format!("timestamp out of range: {millis}")))
    }

    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn date_in<Tz: TimeZone>(self, tz: &Tz) -> Date {
        Date::new(self.0.with_timezone(tz).date_naive())
    }

    /// The (day of week, hour of day) of this instant in `tz`. Days count
    /// from Sunday = 0.
    pub fn weekday_hour_in<Tz: TimeZone>(self, tz: &Tz) -> (u32, u32) {
        let ts = self.0.with_timezone(tz);
        (ts.weekday().num_days_from_sunday(), ts.hour())
    }

    /// The same wall-clock time `days` calendar days earlier in `tz`.
    ///
    /// A wall-clock time repeated by a DST fall-back resolves to its earlier
    /// instant. One skipped by a spring-forward resolves to the instant just
    /// past the gap. Results before the representable range saturate.
    pub fn days_before_in<Tz: TimeZone>(self, days: u32, tz: &Tz) -> Self {
        let local = self.0.with_timezone(tz).naive_local();
        local
            .checked_sub_days(Days::new(u64::from(days)))
            .and_then(|shifted| resolve_local(shifted, tz))
            .map(Self)
            .unwrap_or(Self(DateTime::<Utc>::MIN_UTC))
    }
}

fn resolve_local<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Some(ts) = tz.from_local_datetime(&local).earliest() {
        return Some(ts.with_timezone(&Utc));
    }
    // Inside a gap: read the time with the offset in force before the gap.
    let before = local.checked_sub_days(Days::new(1))?;
    let offset = tz.offset_from_utc_datetime(&before).fix();
    let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(Utc.from_utc_datetime(&utc))
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_millis()))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let millis: i64 = FromSql::column_result(value)?;
        Timestamp::from_millis(millis).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.as_millis())
    }
}
