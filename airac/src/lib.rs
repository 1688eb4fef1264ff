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

//! AIRAC cycle calculation.
//!
//! Aeronautical information is published on a fixed schedule of 28-day
//! cycles, the AIRAC cycles. This crate finds the [`Cycle`] of any date and
//! parses cycles from their identifier like `2304`, the fourth cycle of 2023.
//!
//! # Examples
//!
//! Lets find the cycle that is effective today and check a navigation
//! database's cycle against it:
//!
//! ```
//! use airac::{Cycle, CycleValidity};
//!
//! # fn main() -> Result<(), airac::Error> {
//! let current = Cycle::now();
//! println!("cycle {current} is effective since {}", current.effective_date());
//!
//! // a database published for the 13th cycle of 2023
//! let cycle: Cycle = "2313".parse()?;
//! assert_eq!(cycle.now_valid(), CycleValidity::Expired);
//! #     Ok(())
//! # }
//! ```
//!
//! Everything that depends on the current date also accepts a [`Clock`],
//! which allows to fix the date:
//!
//! ```
//! use airac::clock::FixedClock;
//! use airac::Cycle;
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), airac::Error> {
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2020, 12, 31).expect("date should be valid"));
//!
//! assert_eq!(Cycle::now_with(&clock).identifier(), "2014");
//! assert_eq!(Cycle::parse_at("2014", &clock)?, Cycle::now_with(&clock));
//! #     Ok(())
//! # }
//! ```
//!
//! [`Clock`]: crate::clock::Clock

mod cycle;
mod error;
mod validity;

pub mod clock;
pub mod window;

pub use cycle::Cycle;
pub use error::Error;
pub use validity::CycleValidity;
