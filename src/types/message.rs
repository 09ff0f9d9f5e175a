// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display line numbers for the message areas.
//!
//! The thermostat has two message areas: a user message area with two lines
//! and a price message area with four.

use std::fmt;

use crate::error::ValueError;

/// Line of the user message area (0-1).
///
/// # Examples
///
/// ```
/// use radiotherm_lib::types::UserMessageLine;
///
/// let line = UserMessageLine::new(1).unwrap();
/// assert_eq!(line.value(), 1);
/// assert!(UserMessageLine::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UserMessageLine(u8);

impl UserMessageLine {
    /// Highest valid line number.
    pub const MAX: u8 = 1;

    /// Creates a line number.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` exceeds 1.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the line number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for UserMessageLine {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for UserMessageLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line of the price message area (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PriceMessageLine(u8);

impl PriceMessageLine {
    /// Highest valid line number.
    pub const MAX: u8 = 3;

    /// Creates a line number.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` exceeds 3.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the line number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PriceMessageLine {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PriceMessageLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_line_range() {
        assert!(UserMessageLine::new(0).is_ok());
        assert!(UserMessageLine::new(1).is_ok());
        assert_eq!(
            UserMessageLine::new(2),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn price_line_range() {
        for v in 0..=3 {
            assert_eq!(PriceMessageLine::new(v).unwrap().value(), v);
        }
        assert!(PriceMessageLine::new(4).is_err());
    }

    #[test]
    fn line_try_from() {
        let line: PriceMessageLine = 2u8.try_into().unwrap();
        assert_eq!(line.to_string(), "2");

        let result: Result<UserMessageLine, _> = 5u8.try_into();
        assert!(result.is_err());
    }
}
