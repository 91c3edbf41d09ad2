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

use chrono::Local;
use chrono::TimeZone;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::timestamp::Timestamp;

pub fn prune_guesses(directory: Option<String>, older_than_days: u32) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let deleted = prune_before(&coll, older_than_days, Timestamp::now(), &Local)?;
    println!("Deleted {deleted} guesses.");
    Ok(())
}

/// Delete guesses made more than `days` calendar days before `now` in `tz`.
pub fn prune_before<Tz: TimeZone>(
    coll: &Collection,
    days: u32,
    now: Timestamp,
    tz: &Tz,
) -> Fallible<usize> {
    if days == 0 {
        return fail("--older-than-days must be at least 1.");
    }
    coll.db.delete_guesses_before(now.days_before_in(days, tz))
}
