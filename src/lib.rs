#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Frame synchronizer for SMPTE 12-M linear timecode.
//!
//! Bits that were already demodulated from the biphase-mark signal are pushed one after
//! another into a [`FrameSynchronizer`]. Every time the most recent 80 bits end with the LTC
//! sync word, the BCD fields are decoded and a [`DecodedFrame`] is handed back, carrying the
//! timecode, its label (`HH:MM:SS:FF`, or `HH:MM:SS;FF` for drop-frame) and a time span.
//!
//! ## Cargo Features
//!
//! - `decode_ltc`: the frame synchronizer (default).
//! - `encode_ltc`: building 80-bit frames from a [`Timecode`] (default).
//! - `std`: [`std::time::Instant`] as a timestamp type (default).
//! - `serde`: `Serialize`/`Deserialize` for timecodes and configuration.

extern crate alloc;

use core::fmt::{Display, Formatter};

pub mod error;
pub mod ltc_frame;
#[cfg(feature = "decode_ltc")]
pub mod ltc_decoder;
pub mod timestamp;

pub use error::{TimecodeError, TimecodeField};
#[cfg(feature = "decode_ltc")]
pub use ltc_decoder::{
    config::{BcdPolicy, DecoderConfig},
    DecodedFrame, FrameSynchronizer, Frames, SynchronizerStats,
};
pub use timestamp::{BitSample, Timestamp};

/// A timecode read from one LTC frame
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timecode {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
    /// Bit 10 of the frame. Displayed with `;` before the frame count
    pub drop_frame: bool,
    /// Bit 11 of the frame. Decoded but not interpreted
    pub color_frame: bool,
}

impl Timecode {
    pub fn new(hours: u8, minutes: u8, seconds: u8, frames: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
            drop_frame: false,
            color_frame: false,
        }
    }

    pub fn with_drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame;
        self
    }

    pub fn with_color_frame(mut self, color_frame: bool) -> Self {
        self.color_frame = color_frame;
        self
    }

    /// Separator between seconds and frames in the label
    fn separator(&self) -> char {
        if self.drop_frame {
            ';'
        } else {
            ':'
        }
    }

    /// Checks that every field is a legal value at the given rate.
    ///
    /// Under [`FramesPerSecond::ThirtyDrop`] the frame numbers 0 and 1 do not exist in the first
    /// second of a minute, except for every tenth minute.
    pub fn validate(&self, frames_per_second: FramesPerSecond) -> Result<(), TimecodeError> {
        Self::check_limit(TimecodeField::Hours, self.hours, 24)?;
        Self::check_limit(TimecodeField::Minutes, self.minutes, 60)?;
        Self::check_limit(TimecodeField::Seconds, self.seconds, 60)?;
        Self::check_limit(TimecodeField::Frames, self.frames, frames_per_second.frame_count())?;
        if frames_per_second.is_drop_frame() && self.is_dropped_frame_number() {
            return Err(TimecodeError::DroppedFrameNumber {
                minutes: self.minutes,
                frames: self.frames,
            });
        }
        Ok(())
    }

    fn check_limit(field: TimecodeField, value: u8, limit: u8) -> Result<(), TimecodeError> {
        if value >= limit {
            Err(TimecodeError::FieldOutOfRange { field, value, limit })
        } else {
            Ok(())
        }
    }

    fn is_dropped_frame_number(&self) -> bool {
        self.seconds == 0 && self.frames < 2 && self.minutes % 10 != 0
    }

    /// Advances the timecode by one frame. Hours wrap around after 23.
    ///
    /// A field at or above its limit carries into the next one, so out-of-range timecodes
    /// settle back into range.
    pub fn add_frame(&mut self, frames_per_second: FramesPerSecond) {
        self.frames = self.frames.saturating_add(1);
        if self.frames >= frames_per_second.frame_count() {
            self.frames = 0;
            self.seconds = self.seconds.saturating_add(1);
        }
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes = self.minutes.saturating_add(1);
        }
        if self.minutes >= 60 {
            self.minutes = 0;
            self.hours = self.hours.saturating_add(1);
        }
        if self.hours >= 24 {
            self.hours = 0;
        }
        if frames_per_second.is_drop_frame() && self.is_dropped_frame_number() {
            self.frames = 2;
        }
    }
}

impl Display for Timecode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}{}{:02}", self.hours, self.minutes, self.seconds, self.separator(), self.frames)
    }
}

/// Frame rates carried by LTC
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FramesPerSecond {
    TwentyFour,
    TwentyFive,
    Thirty,
    /// 29.97 fps drop-frame
    ThirtyDrop,
}

impl FramesPerSecond {
    /// Number of frame numbers in one second of timecode
    pub fn frame_count(&self) -> u8 {
        match self {
            FramesPerSecond::TwentyFour => 24,
            FramesPerSecond::TwentyFive => 25,
            FramesPerSecond::Thirty | FramesPerSecond::ThirtyDrop => 30,
        }
    }

    pub fn is_drop_frame(&self) -> bool {
        matches!(self, FramesPerSecond::ThirtyDrop)
    }

    /// Frames per second of real time
    pub fn nominal_rate(&self) -> f32 {
        match self {
            FramesPerSecond::TwentyFour => 24.0,
            FramesPerSecond::TwentyFive => 25.0,
            FramesPerSecond::Thirty => 30.0,
            FramesPerSecond::ThirtyDrop => 29.97,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::FramesPerSecond::{ThirtyDrop, TwentyFive, TwentyFour};

    #[test]
    fn test_display() {
        assert_eq!(Timecode::new(1, 23, 45, 12).to_string(), "01:23:45:12");
        assert_eq!(Timecode::new(1, 23, 45, 12).with_drop_frame(true).to_string(), "01:23:45;12");
        assert_eq!(Timecode::new(0, 0, 0, 0).with_color_frame(true).to_string(), "00:00:00:00");
        assert_eq!(Timecode::new(29, 79, 79, 39).to_string(), "29:79:79:39");
    }

    #[test]
    fn test_add_frame() {
        let mut tc = Timecode::new(0, 0, 0, 23);
        tc.add_frame(TwentyFour);
        assert_eq!(tc, Timecode::new(0, 0, 1, 0));

        let mut tc = Timecode::new(0, 59, 59, 24);
        tc.add_frame(TwentyFive);
        assert_eq!(tc, Timecode::new(1, 0, 0, 0));

        let mut tc = Timecode::new(23, 59, 59, 24);
        tc.add_frame(TwentyFive);
        assert_eq!(tc, Timecode::new(0, 0, 0, 0));
    }

    #[test]
    fn test_add_frame_out_of_range() {
        let mut tc = Timecode::new(0, 0, 0, 255);
        tc.add_frame(TwentyFive);
        assert_eq!(tc, Timecode::new(0, 0, 1, 0));

        let mut tc = Timecode::new(255, 255, 255, 24);
        tc.add_frame(TwentyFive);
        assert_eq!(tc, Timecode::new(0, 0, 0, 0));

        let mut tc = Timecode::new(30, 0, 0, 0);
        tc.add_frame(TwentyFour);
        assert_eq!(tc, Timecode::new(0, 0, 0, 1));
    }

    #[test]
    fn test_add_frame_drop_frame() {
        let mut tc = Timecode::new(0, 0, 59, 29).with_drop_frame(true);
        tc.add_frame(ThirtyDrop);
        assert_eq!(tc, Timecode::new(0, 1, 0, 2).with_drop_frame(true));

        let mut tc = Timecode::new(0, 9, 59, 29).with_drop_frame(true);
        tc.add_frame(ThirtyDrop);
        assert_eq!(tc, Timecode::new(0, 10, 0, 0).with_drop_frame(true));
    }

    #[test]
    fn test_validate() {
        assert_eq!(Timecode::new(23, 59, 59, 24).validate(TwentyFive), Ok(()));
        assert_eq!(
            Timecode::new(1, 2, 3, 25).validate(TwentyFive),
            Err(TimecodeError::FieldOutOfRange { field: TimecodeField::Frames, value: 25, limit: 25 })
        );
        assert_eq!(
            Timecode::new(24, 0, 0, 0).validate(TwentyFive),
            Err(TimecodeError::FieldOutOfRange { field: TimecodeField::Hours, value: 24, limit: 24 })
        );
        assert_eq!(
            Timecode::new(0, 61, 0, 0).validate(TwentyFour),
            Err(TimecodeError::FieldOutOfRange { field: TimecodeField::Minutes, value: 61, limit: 60 })
        );
        assert_eq!(
            Timecode::new(0, 1, 0, 1).validate(ThirtyDrop),
            Err(TimecodeError::DroppedFrameNumber { minutes: 1, frames: 1 })
        );
        assert_eq!(Timecode::new(0, 10, 0, 0).validate(ThirtyDrop), Ok(()));
    }

    #[test]
    fn test_frames_per_second() {
        assert_eq!(ThirtyDrop.frame_count(), 30);
        assert!(ThirtyDrop.is_drop_frame());
        assert!(!TwentyFour.is_drop_frame());
        assert_eq!(TwentyFive.nominal_rate(), 25.0);
    }
}
