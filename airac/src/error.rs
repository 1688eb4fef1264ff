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

use std::error;
use std::fmt;

/// Errors returned when parsing a cycle from its identifier.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The identifier is not a non-negative decimal number.
    InvalidFormat { identifier: String },
    /// The year has no cycle with this ordinal.
    OrdinalOutOfRange { year: i32, ordinal: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { identifier } => {
                write!(f, "cycle identifier should be a number but is \"{identifier}\"")
            }
            Self::OrdinalOutOfRange { year, ordinal } => {
                write!(f, "{year} does not have {ordinal} cycles")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::InvalidFormat {
            identifier: String::from("Garbage"),
        };
        assert_eq!(
            err.to_string(),
            "cycle identifier should be a number but is \"Garbage\""
        );

        let err = Error::OrdinalOutOfRange {
            year: 2023,
            ordinal: 14,
        };
        assert_eq!(err.to_string(), "2023 does not have 14 cycles");
    }
}
