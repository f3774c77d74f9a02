use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Duty cycle applied to the conveyor motor driver.
/// The firmware writes it straight to an 8 bit timer, so the valid
/// state space is 0-255 inclusive.
///
/// ```
/// use common::physical::Pwm;
/// let pwm = Pwm::try_from(150i64).expect("Failed to get Pwm representation");
/// assert_eq!(pwm.value(), 150);
/// ```
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pwm {
    value: u8,
}

/// Represents errors in creating or using the `Pwm` type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PwmError {
    /// The `Pwm` was trying to be created with a negative value or a value
    /// above what the motor driver accepts.
    #[error("Pwm value {0} outside of valid state space 0-255!")]
    OutOfValidStateSpace(i64),
}

impl Pwm {
    /// Belt stopped.
    pub const STOPPED: Pwm = Pwm { value: 0 };

    /// Full speed.
    pub const MAX: Pwm = Pwm { value: u8::MAX };

    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    /// Get the underlying duty cycle value.
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl TryFrom<i64> for Pwm {
    type Error = PwmError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self::new)
            .map_err(|_| PwmError::OutOfValidStateSpace(value))
    }
}

impl From<Pwm> for u8 {
    fn from(pwm: Pwm) -> Self {
        pwm.value
    }
}

impl Display for Pwm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Pwm: {}/255>", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_range() {
        assert_eq!(Pwm::try_from(-1i64), Err(PwmError::OutOfValidStateSpace(-1)));
        assert_eq!(Pwm::try_from(256i64), Err(PwmError::OutOfValidStateSpace(256)));

        for raw in 0..=255i64 {
            let pwm = Pwm::try_from(raw).expect("Failed to get valid Pwm representation.");
            assert_eq!(pwm.value() as i64, raw);
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(Pwm::STOPPED.value(), 0);
        assert_eq!(Pwm::MAX.value(), 255);
        assert_eq!(Pwm::default(), Pwm::STOPPED);
    }
}
