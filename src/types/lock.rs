// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keypad lock levels.

use std::fmt;

use crate::error::ValueError;

/// Restriction level of the thermostat's own keypad (`lock_mode`).
///
/// | Code | Level | Effect |
/// |------|-------|--------|
/// | 0 | Unlocked | All controls available |
/// | 1 | Partial | Set points adjustable, mode locked |
/// | 2 | Full | Keypad disabled |
/// | 3 | Utility | Locked by the utility provider |
///
/// Any level can be requested from any other; the appliance decides whether
/// to accept the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockMode {
    /// No restriction.
    #[default]
    Unlocked,
    /// Partial lock.
    Partial,
    /// Full lock.
    Full,
    /// Utility lock.
    Utility,
}

impl LockMode {
    /// Returns the numeric code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unlocked => 0,
            Self::Partial => 1,
            Self::Full => 2,
            Self::Utility => 3,
        }
    }
}

impl fmt::Display for LockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unlocked => "Unlocked",
            Self::Partial => "Partial",
            Self::Full => "Full",
            Self::Utility => "Utility",
        };
        write!(f, "{name} ({})", self.code())
    }
}

impl TryFrom<u8> for LockMode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unlocked),
            1 => Ok(Self::Partial),
            2 => Ok(Self::Full),
            3 => Ok(Self::Utility),
            other => Err(ValueError::InvalidLockMode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_mode_codes() {
        for code in 0..=3 {
            assert_eq!(LockMode::try_from(code).unwrap().code(), code);
        }
        assert_eq!(LockMode::try_from(4), Err(ValueError::InvalidLockMode(4)));
    }

    #[test]
    fn lock_mode_display() {
        assert_eq!(LockMode::Full.to_string(), "Full (2)");
        assert_eq!(LockMode::default().to_string(), "Unlocked (0)");
    }
}
