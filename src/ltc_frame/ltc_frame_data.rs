use core::fmt::{Debug, Display, Formatter};
use core::ops::Range;

use intbits::Bits;

use crate::error::{TimecodeError, TimecodeField};
use crate::Timecode;

///Contains the bits 0..64 of a LtcFrame, everything but the SyncWord
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LtcFrameData {
    data: u64,
}

impl LtcFrameData {
    ///bit range ltc-definition for frame-units
    const BIT_RANGE_FRAME_UNITS: Range<u64> = 0..4;
    ///bit range ltc-definition for frame-tens
    const BIT_RANGE_FRAME_TENS: Range<u64> = 8..10;
    ///bit range ltc-definition for second-units
    const BIT_RANGE_SECOND_UNITS: Range<u64> = 16..20;
    ///bit range ltc-definition for second-tens
    const BIT_RANGE_SECOND_TENS: Range<u64> = 24..27;
    ///bit range ltc-definition for minute-units
    const BIT_RANGE_MINUTE_UNITS: Range<u64> = 32..36;
    ///bit range ltc-definition for minute-tens
    const BIT_RANGE_MINUTE_TENS: Range<u64> = 40..43;
    ///bit range ltc-definition for hour-units
    const BIT_RANGE_HOUR_UNITS: Range<u64> = 48..52;
    ///bit range ltc-definition for hour-tens
    const BIT_RANGE_HOUR_TENS: Range<u64> = 56..58;
    ///bit ltc-definition for the drop-frame flag
    const BIT_DROP_FRAME: u64 = 10;
    ///bit ltc-definition for the color-frame flag
    const BIT_COLOR_FRAME: u64 = 11;

    /// Highest decimal digit each tens sub-field may hold in (frames, seconds, minutes, hours)
    const MAX_TENS: [u8; 4] = [2, 5, 5, 2];

    pub(crate) fn new_raw(data: u64) -> Self {
        Self { data }
    }

    /// The raw 64 bits, bit 0 being the first one on the wire
    pub fn raw(&self) -> u64 {
        self.data
    }

    ///Helper function (with type convertion)
    fn get_bits(&self, range: Range<u64>) -> u8 {
        self.data.bits(range) as u8
    }

    /// Returns (units, tens) for a field without combining them
    fn get_digits(&self, field: TimecodeField) -> (u8, u8) {
        let (units, tens) = match field {
            TimecodeField::Frames => (Self::BIT_RANGE_FRAME_UNITS, Self::BIT_RANGE_FRAME_TENS),
            TimecodeField::Seconds => (Self::BIT_RANGE_SECOND_UNITS, Self::BIT_RANGE_SECOND_TENS),
            TimecodeField::Minutes => (Self::BIT_RANGE_MINUTE_UNITS, Self::BIT_RANGE_MINUTE_TENS),
            TimecodeField::Hours => (Self::BIT_RANGE_HOUR_UNITS, Self::BIT_RANGE_HOUR_TENS),
        };
        (self.get_bits(units), self.get_bits(tens))
    }

    /// Units + 10 * tens. Digits above 9 are not corrected
    fn get_field(&self, field: TimecodeField) -> u8 {
        let (units, tens) = self.get_digits(field);
        units + 10 * tens
    }

    /// Returns the number of frames in the LtcFrameData
    pub fn get_frames(&self) -> u8 {
        self.get_field(TimecodeField::Frames)
    }
    /// Returns the number of seconds in the LtcFrameData
    pub fn get_seconds(&self) -> u8 {
        self.get_field(TimecodeField::Seconds)
    }
    /// Returns the number of minutes in the LtcFrameData
    pub fn get_minutes(&self) -> u8 {
        self.get_field(TimecodeField::Minutes)
    }
    /// Returns the number of hours in the LtcFrameData
    pub fn get_hours(&self) -> u8 {
        self.get_field(TimecodeField::Hours)
    }
    pub fn drop_frame(&self) -> bool {
        self.data.bit(Self::BIT_DROP_FRAME)
    }
    pub fn color_frame(&self) -> bool {
        self.data.bit(Self::BIT_COLOR_FRAME)
    }

    /// Checks that every BCD sub-field holds a decimal digit its field can use
    pub fn validate_digits(&self) -> Result<(), TimecodeError> {
        let fields = [TimecodeField::Frames, TimecodeField::Seconds, TimecodeField::Minutes, TimecodeField::Hours];
        for (field, max_tens) in fields.into_iter().zip(Self::MAX_TENS) {
            let (units, tens) = self.get_digits(field);
            if units > 9 {
                return Err(TimecodeError::DigitOutOfRange { field, digit: units, max: 9 });
            }
            if tens > max_tens {
                return Err(TimecodeError::DigitOutOfRange { field, digit: tens, max: max_tens });
            }
        }
        Ok(())
    }

    pub fn to_timecode(&self) -> Timecode {
        Timecode::new(self.get_hours(), self.get_minutes(), self.get_seconds(), self.get_frames())
            .with_drop_frame(self.drop_frame())
            .with_color_frame(self.color_frame())
    }
}

///Write data implementations
#[cfg(feature = "encode_ltc")]
impl LtcFrameData {
    ///Constructor to write a timecode into frame data
    pub(crate) fn new_with_timecode(timecode: &Timecode) -> Self {
        let mut s = Self { data: 0 };
        s.set_field(TimecodeField::Hours, timecode.hours);
        s.set_field(TimecodeField::Minutes, timecode.minutes);
        s.set_field(TimecodeField::Seconds, timecode.seconds);
        s.set_field(TimecodeField::Frames, timecode.frames);
        s.data.set_bit(Self::BIT_DROP_FRAME, timecode.drop_frame);
        s.data.set_bit(Self::BIT_COLOR_FRAME, timecode.color_frame);
        s
    }

    ///Helper function (with type convertion)
    fn set_bits(&mut self, range: Range<u64>, bits: u8) {
        self.data.set_bits(range, bits as u64)
    }

    /// Helper function. Because tens are written in the stream separately
    fn split_to_tens_and_units(val: u8) -> (u8, u8) {
        (val / 10, val % 10)
    }

    fn set_field(&mut self, field: TimecodeField, value: u8) {
        let (tens, units) = Self::split_to_tens_and_units(value);
        let (units_range, tens_range) = match field {
            TimecodeField::Frames => (Self::BIT_RANGE_FRAME_UNITS, Self::BIT_RANGE_FRAME_TENS),
            TimecodeField::Seconds => (Self::BIT_RANGE_SECOND_UNITS, Self::BIT_RANGE_SECOND_TENS),
            TimecodeField::Minutes => (Self::BIT_RANGE_MINUTE_UNITS, Self::BIT_RANGE_MINUTE_TENS),
            TimecodeField::Hours => (Self::BIT_RANGE_HOUR_UNITS, Self::BIT_RANGE_HOUR_TENS),
        };
        // tens that do not fit the sub-field are truncated to its width
        let tens_width = (tens_range.end - tens_range.start) as u32;
        self.set_bits(tens_range, tens & ((1 << tens_width) - 1));
        self.set_bits(units_range, units);
    }
}

impl Debug for LtcFrameData {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}\n0b_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}_{:04b}",
               self,
               self.data.bits(60..64),
               self.data.bits(56..60),
               self.data.bits(52..56),
               self.data.bits(48..52),
               self.data.bits(44..48),
               self.data.bits(40..44),
               self.data.bits(36..40),
               self.data.bits(32..36),
               self.data.bits(28..32),
               self.data.bits(24..28),
               self.data.bits(20..24),
               self.data.bits(16..20),
               self.data.bits(12..16),
               self.data.bits(8..12),
               self.data.bits(4..8),
               self.data.bits(0..4))
    }
}

impl Display for LtcFrameData {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.to_timecode(), f)
    }
}
