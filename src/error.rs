use core::fmt::{Display, Formatter};

use thiserror::Error;

/// Names one of the four BCD fields of a timecode
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TimecodeField {
    Frames,
    Seconds,
    Minutes,
    Hours,
}

impl Display for TimecodeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TimecodeField::Frames => "frames",
            TimecodeField::Seconds => "seconds",
            TimecodeField::Minutes => "minutes",
            TimecodeField::Hours => "hours",
        };
        f.write_str(name)
    }
}

/// Reasons a framed timecode is rejected when strict BCD checking is enabled.
///
/// A missing sync word is never an error, it just means no frame has been found yet.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Error)]
pub enum TimecodeError {
    /// A units or tens digit is not a decimal digit of the field.
    #[error("{field} digit {digit} is above {max}")]
    DigitOutOfRange { field: TimecodeField, digit: u8, max: u8 },
    /// A decoded field is at or above its limit.
    #[error("{field} value {value} is out of range (limit {limit})")]
    FieldOutOfRange { field: TimecodeField, value: u8, limit: u8 },
    /// Frame numbers skipped by drop-frame counting.
    #[error("frame {frames} does not exist in minute {minutes} of drop-frame timecode")]
    DroppedFrameNumber { minutes: u8, frames: u8 },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_messages() {
        let err = TimecodeError::FieldOutOfRange { field: TimecodeField::Seconds, value: 75, limit: 60 };
        assert_eq!(err.to_string(), "seconds value 75 is out of range (limit 60)");
        let err = TimecodeError::DigitOutOfRange { field: TimecodeField::Frames, digit: 12, max: 9 };
        assert_eq!(err.to_string(), "frames digit 12 is above 9");
    }
}
