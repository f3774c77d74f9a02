use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{physical::Pwm, servo::ServoCode};

/// Separates the two fields of every line on the wire.
pub const FIELD_SEPARATOR: char = '_';

/// Terminates every line on the wire.
pub const LINE_TERMINATOR: char = '\n';

/// Snapshot reported by the firmware roughly every 100 ms.
/// Travels as `"<rpm>_<obstacle>\n"`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SensorReport {
    /// Belt motor speed, truncated to an integer by the firmware.
    pub rpm: i32,

    /// Whether the IR obstacle sensor currently sees an object.
    pub obstacle: bool,
}

/// Represents a snapshot of the target belt state. Sent from the host to
/// the firmware as `"<pwm>_<code>\n"`.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ServoCommand {
    /// Duty cycle for the belt motor.
    pub pwm: Pwm,

    /// Bin the servo should route to.
    pub code: ServoCode,
}

/// Represents errors in decoding a line received from the firmware.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PacketError {
    #[error("Line has no content.")]
    Empty,

    #[error("Expected two '_' separated fields, got '{0}'.")]
    WrongFieldCount(String),

    #[error("Field '{0}' is not an integer.")]
    NotAnInteger(String),

    #[error("Obstacle state must be 0 or 1, got {0}.")]
    InvalidObstacleState(i64),
}

impl SensorReport {
    /// Decode one line as received from the port. Returns `None` for empty or
    /// malformed lines, the firmware interleaves boot noise with reports and
    /// none of that is worth surfacing.
    pub fn parse_line(line: &str) -> Option<Self> {
        line.parse().ok()
    }
}

impl FromStr for SensorReport {
    type Err = PacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(PacketError::Empty);
        }

        let mut fields = line.split(FIELD_SEPARATOR);
        let (rpm, obstacle) = match (fields.next(), fields.next(), fields.next()) {
            (Some(rpm), Some(obstacle), None) => (rpm, obstacle),
            _ => return Err(PacketError::WrongFieldCount(line.to_string())),
        };

        let rpm: i32 = rpm
            .trim()
            .parse()
            .map_err(|_| PacketError::NotAnInteger(rpm.to_string()))?;
        let obstacle: i64 = obstacle
            .trim()
            .parse()
            .map_err(|_| PacketError::NotAnInteger(obstacle.to_string()))?;
        let obstacle = match obstacle {
            0 => false,
            1 => true,
            other => return Err(PacketError::InvalidObstacleState(other)),
        };

        Ok(Self { rpm, obstacle })
    }
}

impl ServoCommand {
    /// Belt stopped, servo at home. Asserted whenever the link is (re)opened
    /// or about to close.
    pub const SAFE: ServoCommand = ServoCommand {
        pwm: Pwm::STOPPED,
        code: ServoCode::Unknown,
    };

    pub fn new(pwm: Pwm, code: ServoCode) -> Self {
        Self { pwm, code }
    }

    pub fn with_pwm(self, pwm: Pwm) -> Self {
        Self { pwm, ..self }
    }

    pub fn with_code(self, code: ServoCode) -> Self {
        Self { code, ..self }
    }

    /// Encode into the exact bytes written to the port, terminator included.
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}",
            self.pwm.value(),
            FIELD_SEPARATOR,
            self.code.wire_value(),
            LINE_TERMINATOR
        )
    }
}

impl Display for ServoCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ServoCommand: pwm={}, code={})", self.pwm.value(), self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        assert_eq!(
            SensorReport::parse_line("123_1\n"),
            Some(SensorReport {
                rpm: 123,
                obstacle: true
            })
        );
        assert_eq!(
            SensorReport::parse_line("0_0\r\n"),
            Some(SensorReport {
                rpm: 0,
                obstacle: false
            })
        );
    }

    #[test]
    fn test_parse_rejects_noise() {
        assert_eq!(SensorReport::parse_line("bad_data\n"), None);
        assert_eq!(SensorReport::parse_line("\n"), None);
        assert_eq!(SensorReport::parse_line(""), None);
        assert_eq!(SensorReport::parse_line("12_1_4\n"), None);
        assert_eq!(SensorReport::parse_line("120\n"), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SensorReport>(), Err(PacketError::Empty));
        assert_eq!(
            "12_3".parse::<SensorReport>(),
            Err(PacketError::InvalidObstacleState(3))
        );
        assert_eq!(
            "x_1".parse::<SensorReport>(),
            Err(PacketError::NotAnInteger("x".into()))
        );
    }

    #[test]
    fn test_encode_command() {
        let command = ServoCommand::new(Pwm::new(150), ServoCode::RED);
        assert_eq!(command.encode(), "150_0\n");

        assert_eq!(ServoCommand::SAFE.encode(), "0_9\n");

        let command = ServoCommand::new(Pwm::MAX, ServoCode::LARGE);
        assert_eq!(command.encode(), "255_2\n");
    }

    #[test]
    fn test_builders_keep_other_field() {
        let command = ServoCommand::new(Pwm::new(80), ServoCode::SQUARE);
        assert_eq!(command.with_pwm(Pwm::new(90)).code, ServoCode::SQUARE);
        assert_eq!(command.with_code(ServoCode::GREEN).pwm, Pwm::new(80));
    }
}
