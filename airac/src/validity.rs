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

use std::cmp::Ordering;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::Cycle;

/// The state of a cycle at some date.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum CycleValidity {
    /// The cycle was superseded by a later one.
    Expired,
    /// The date is within the cycle.
    Current,
    /// The cycle is not yet effective.
    Upcoming,
}

impl Cycle {
    /// Returns the validity of the cycle at the date.
    pub fn validity_at(&self, date: NaiveDate) -> CycleValidity {
        match Cycle::from_date(date).cmp(self) {
            Ordering::Less => CycleValidity::Upcoming,
            Ordering::Equal => CycleValidity::Current,
            Ordering::Greater => CycleValidity::Expired,
        }
    }

    /// Returns the validity of the cycle at the clock's current date.
    pub fn validity(&self, clock: &impl Clock) -> CycleValidity {
        self.validity_at(clock.today())
    }

    /// Returns the validity of the cycle today (UTC).
    ///
    /// Navigation data of an [expired](CycleValidity::Expired) cycle must not
    /// be used for navigation.
    pub fn now_valid(&self) -> CycleValidity {
        self.validity(&SystemClock)
    }
}
