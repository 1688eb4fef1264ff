// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::window::century_window;

/// Reference date from which all cycles are counted. It's a Thursday and any
/// Thursday would do. AIRAC was introduced in 1964, so everything before is
/// academic.
const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1901, 1, 10) {
    Some(date) => date,
    None => panic!("epoch should be a valid date"),
};

/// An AIRAC cycle.
///
/// The Aeronautical Information Regulation And Control (AIRAC) cycle governs
/// the publication schedule of aeronautical information. Cycles don't overlap
/// and each begins on a Thursday (UTC) with a duration of 28 days. Within its
/// year, a cycle is known by its [identifier] `YYoo`, the two-digit year
/// followed by the cycle's [ordinal].
///
/// # Examples
///
/// ```
/// use airac::Cycle;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 5, 1).expect("date should be valid");
/// let cycle = Cycle::from_date(date);
///
/// assert_eq!(cycle.identifier(), "2304");
/// assert_eq!(
///     cycle.effective_date(),
///     NaiveDate::from_ymd_opt(2023, 4, 20).expect("date should be valid")
/// );
/// ```
///
/// [identifier]: Cycle::identifier
/// [ordinal]: Cycle::ordinal
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cycle {
    // number of cycles since the epoch
    serial: i32,
}

impl Cycle {
    /// The duration of each cycle in days as defined by ICAO.
    pub const DURATION_DAYS: i64 = 28;

    /// Returns the cycle of the current UTC date.
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Returns the cycle of the clock's current date.
    pub fn now_with(clock: &impl Clock) -> Self {
        Self::from_date(clock.today())
    }

    /// Returns the cycle that contains the date.
    pub fn from_date(date: NaiveDate) -> Self {
        let days = date.signed_duration_since(EPOCH).num_days();

        // floor the division so dates before the epoch fall in the right cycle
        Self {
            serial: days.div_euclid(Self::DURATION_DAYS) as i32,
        }
    }

    /// Returns the cycle that contains the date-time's date in UTC.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_date(datetime.naive_utc().date())
    }

    /// Returns the cycle that contains the date-time, which is taken to be UTC.
    pub fn from_naive_datetime(datetime: NaiveDateTime) -> Self {
        Self::from_date(datetime.date())
    }

    /// Parses the cycle from its identifier.
    ///
    /// The two-digit year of the identifier is placed into the current
    /// century. See [`window`](crate::window) for the caveats and use
    /// [`parse_with`](Self::parse_with) to expand the year differently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the identifier isn't a number and
    /// [`Error::OrdinalOutOfRange`] if the year has no cycle with the
    /// identifier's ordinal.
    pub fn parse(identifier: &str) -> Result<Self, Error> {
        Self::parse_at(identifier, &SystemClock)
    }

    /// Parses the cycle from its identifier with the year placed into the
    /// clock's current century.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_at(identifier: &str, clock: &impl Clock) -> Result<Self, Error> {
        Self::parse_with(identifier, |yy| century_window(yy, clock))
    }

    /// Parses the cycle from its identifier and expands the two-digit year
    /// with `expand_year`.
    ///
    /// The identifier is split into year and ordinal by its two low-order
    /// digits. Identifiers with more than four digits are accepted, e.g.
    /// `12345` is the 45th cycle of the year expanded from 123, which then
    /// fails as no year has that many cycles.
    ///
    /// ```
    /// use airac::Cycle;
    ///
    /// # fn main() -> Result<(), airac::Error> {
    /// let cycle = Cycle::parse_with("9913", |yy| 1900 + yy as i32)?;
    /// assert_eq!(cycle.year(), 1999);
    /// #     Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with<F>(identifier: &str, expand_year: F) -> Result<Self, Error>
    where
        F: FnOnce(u32) -> i32,
    {
        let value = parse_number(identifier)?;
        let (yy, ordinal) = (value / 100, value % 100);
        let year = expand_year(yy);

        trace!("cycle {identifier}: year {year}, ordinal {ordinal}");

        // the last cycle of the previous year tells how many cycles precede
        // the year
        let previous_year_end = year
            .checked_sub(1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31))
            .ok_or_else(|| out_of_range(year, ordinal))?;
        let serial = Self::from_date(previous_year_end).serial + ordinal as i32;

        match effective_date_of(serial) {
            Some(date) if date.year() == year => Ok(Self { serial }),
            _ => Err(out_of_range(year, ordinal)),
        }
    }

    /// The first day of the cycle.
    ///
    /// The effective date is always a Thursday.
    ///
    /// # Panics
    ///
    /// Panics if the cycle starts before [`NaiveDate::MIN`], which is the
    /// case for the cycle of the earliest supported dates.
    pub fn effective_date(&self) -> NaiveDate {
        EPOCH + TimeDelta::days(i64::from(self.serial) * Self::DURATION_DAYS)
    }

    /// The first day after the cycle, which is the effective date of the
    /// [next](Self::next) cycle.
    ///
    /// # Panics
    ///
    /// Panics if the date is after [`NaiveDate::MAX`], which is the case for
    /// the cycle of the latest supported dates.
    pub fn expiry_date(&self) -> NaiveDate {
        self.next().effective_date()
    }

    /// The year of the effective date to which the cycle belongs.
    ///
    /// # Panics
    ///
    /// Panics if the [effective date](Self::effective_date) is out of range.
    pub fn year(&self) -> i32 {
        self.effective_date().year()
    }

    /// The position of the cycle within its year, starting with 1.
    ///
    /// Most years have 13 cycles but some have 14.
    ///
    /// # Panics
    ///
    /// Panics if the [effective date](Self::effective_date) is out of range.
    pub fn ordinal(&self) -> u8 {
        let day_of_year = self.effective_date().ordinal();
        ((day_of_year - 1) / Self::DURATION_DAYS as u32 + 1) as u8
    }

    /// The identifier in the format `YYoo`.
    ///
    /// The century is lost, thus cycles 100 years apart share the same
    /// identifier.
    ///
    /// # Panics
    ///
    /// Panics if the [effective date](Self::effective_date) is out of range.
    pub fn identifier(&self) -> String {
        self.to_string()
    }

    /// Returns the following cycle.
    pub fn next(&self) -> Self {
        Self {
            serial: self.serial + 1,
        }
    }

    /// Returns the preceding cycle.
    pub fn previous(&self) -> Self {
        Self {
            serial: self.serial - 1,
        }
    }

    /// Returns `true` if the date is within this cycle.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Returns the number of cycles that become effective in the year.
    ///
    /// Returns `None` if the year is out of the supported date range.
    pub fn cycles_in_year(year: i32) -> Option<u8> {
        // the last cycle of a year starts on or before December 31 but no
        // earlier than December 4
        NaiveDate::from_ymd_opt(year, 12, 31).map(|date| Self::from_date(date).ordinal())
    }
}

fn effective_date_of(serial: i32) -> Option<NaiveDate> {
    TimeDelta::try_days(i64::from(serial) * Cycle::DURATION_DAYS)
        .and_then(|delta| EPOCH.checked_add_signed(delta))
}

fn parse_number(identifier: &str) -> Result<u32, Error> {
    let invalid = || {
        debug!("rejecting cycle identifier \"{identifier}\": not a number");
        Error::InvalidFormat {
            identifier: identifier.to_owned(),
        }
    };

    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // too many digits overflow
    identifier.parse().map_err(|_| invalid())
}

fn out_of_range(year: i32, ordinal: u32) -> Error {
    debug!("rejecting cycle {ordinal} of {year}: no such cycle");
    Error::OrdinalOutOfRange { year, ordinal }
}

impl From<NaiveDate> for Cycle {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Cycle {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl FromStr for Cycle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cycle {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.year().rem_euclid(100), self.ordinal())
    }
}

impl fmt::Debug for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("identifier", &self.identifier())
            .field("effective_date", &self.effective_date())
            .finish()
    }
}

// The identifier is ambiguous across centuries, so a cycle is stored by its
// effective date.
#[cfg(feature = "serde")]
impl Serialize for Cycle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.effective_date().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Cycle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NaiveDate::deserialize(deserializer).map(Self::from_date)
    }
}
