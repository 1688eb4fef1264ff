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

//! Two-digit year expansion.
//!
//! Cycle identifiers carry only the last two digits of the year. The parser
//! needs the full year back, which is ambiguous across centuries. The default
//! rule places the year into the current century without any pivot, e.g. `99`
//! read in 2100 becomes 2199. Callers close to a century turnover should pass
//! their own rule to [`Cycle::parse_with`].
//!
//! [`Cycle::parse_with`]: crate::Cycle::parse_with

use chrono::Datelike;

use crate::clock::Clock;

/// Expands a two-digit year into the century of the clock's current year.
///
/// The two-digit year is added as is, so values above 99 (from identifiers
/// with more than four digits) spill into the next centuries.
///
/// ```
/// use airac::clock::FixedClock;
/// use airac::window::century_window;
/// use chrono::NaiveDate;
///
/// let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).expect("date should be valid"));
/// assert_eq!(century_window(23, &clock), 2023);
/// assert_eq!(century_window(99, &clock), 2099);
/// ```
pub fn century_window(two_digit_year: u32, clock: &impl Clock) -> i32 {
    let century = clock.today().year().div_euclid(100);
    let yy = i32::try_from(two_digit_year).unwrap_or(i32::MAX);
    century.saturating_mul(100).saturating_add(yy)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;

    fn clock(year: i32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(year, 6, 1).expect("date should be valid"))
    }

    #[test]
    fn current_century() {
        assert_eq!(century_window(0, &clock(2026)), 2000);
        assert_eq!(century_window(23, &clock(2026)), 2023);
        assert_eq!(century_window(99, &clock(2001)), 2099);
    }

    #[test]
    fn no_pivot_at_century_boundary() {
        assert_eq!(century_window(99, &clock(2100)), 2199);
        assert_eq!(century_window(1, &clock(2099)), 2001);
    }

    #[test]
    fn long_year_part_spills_over() {
        assert_eq!(century_window(123, &clock(2026)), 2123);
    }
}
