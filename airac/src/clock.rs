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

//! Sources of the current date.
//!
//! Everything that depends on "now" takes a [`Clock`], so callers (and tests)
//! can pin the date instead of reading the system time.

use chrono::{NaiveDate, Utc};

/// A source of the current UTC date.
pub trait Clock {
    /// Returns today's date in UTC.
    fn today(&self) -> NaiveDate;
}

/// Reads the system time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock that is stopped at a date.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        self.as_ref().today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stopped() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 20).expect("date should be valid");
        let clock = FixedClock(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn boxed_clock() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 31).expect("date should be valid");
        let clock: Box<dyn Clock> = Box::new(FixedClock(date));

        assert_eq!(clock.today(), date);
    }

    #[test]
    fn system_clock_reads_utc_date() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();

        // the date may roll over at midnight between the reads
        assert!(before <= today && today <= after);
    }
}
