use core::fmt::{Debug, Display, Formatter};

use intbits::Bits;

use crate::ltc_frame::ltc_frame_data::LtcFrameData;
use crate::Timecode;

pub mod ltc_frame_data;

/// Number of bits in one LTC frame, sync word included
pub const BITS_PER_FRAME: usize = 80;

/// Represents the 80 bits of one ltc-tc-frame.
///
/// Bit 0 is the first bit on the wire. The BCD sub-fields are sent least significant bit first,
/// so reading the frame as an integer with the first bit at index 0 gives every sub-field its
/// plain binary value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LtcFrame {
    ///Bits 64..80, the last 16 bits received
    sync_word: u16,
    ///Bits 0..64
    data: LtcFrameData,
}

impl LtcFrame {
    /// Bits 64..80 of a valid frame, read with bit 64 as the least significant bit.
    /// On the wire this is 0011 1111 1111 1101
    pub const LTC_SYNC_WORD: u16 = 0b_1011_1111_1111_1100;

    /// Splits an 80-bit frame integer. Bits above 79 are ignored
    pub fn from_frame_integer(frame: u128) -> Self {
        Self {
            sync_word: (frame >> 64) as u16,
            data: LtcFrameData::new_raw(frame as u64),
        }
    }

    pub fn sync_word(&self) -> u16 {
        self.sync_word
    }

    pub fn data(&self) -> &LtcFrameData {
        &self.data
    }

    ///Tells if the sync word sits at the end of the frame
    pub fn data_valid(&self) -> bool {
        self.sync_word == Self::LTC_SYNC_WORD
    }

    ///Returns the timecode only if the sync word matches
    pub fn timecode(&self) -> Option<Timecode> {
        if self.data_valid() {
            Some(self.data.to_timecode())
        } else {
            None
        }
    }
}

#[cfg(feature = "encode_ltc")]
impl LtcFrame {
    /// Builds a valid frame carrying the timecode. Tens digits that do not fit their 2-bit (frames,
    /// hours) or 3-bit (seconds, minutes) sub-field are truncated to its width, so hours 45 encode as 05
    pub fn from_timecode(timecode: &Timecode) -> Self {
        Self {
            sync_word: Self::LTC_SYNC_WORD,
            data: LtcFrameData::new_with_timecode(timecode),
        }
    }

    pub fn to_frame_integer(&self) -> u128 {
        ((self.sync_word as u128) << 64) | self.data.raw() as u128
    }

    /// The frame in transmission order
    pub fn to_bits(&self) -> [bool; BITS_PER_FRAME] {
        let frame = self.to_frame_integer();
        let mut bits = [false; BITS_PER_FRAME];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (frame >> i) & 1 == 1;
        }
        bits
    }
}

impl Debug for LtcFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "sync_word: 0b_{:04b}_{:04b}_{:04b}_{:04b}\ndata: {:?}",
               self.sync_word.bits(12..16),
               self.sync_word.bits(8..12),
               self.sync_word.bits(4..8),
               self.sync_word.bits(0..4),
               self.data
        )
    }
}

impl Display for LtcFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "sync_word:{}\ndata: {}", self.data_valid(), self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame integer for 01:23:45:12 with the sync word, written field by field
    const FRAME_01_23_45_12: u128 = (0xBFFC << 64)
        | (0b0001 << 48)
        | (0b010 << 40) | (0b0011 << 32)
        | (0b100 << 24) | (0b0101 << 16)
        | (0b01 << 8) | 0b0010;

    #[test]
    fn test_from_frame_integer() {
        let f = LtcFrame::from_frame_integer(FRAME_01_23_45_12);
        assert!(f.data_valid());
        assert_eq!(f.sync_word(), 0xBFFC);
        assert_eq!(f.timecode(), Some(Timecode::new(1, 23, 45, 12)));
    }

    #[test]
    fn test_bad_sync_word() {
        let f = LtcFrame::from_frame_integer(FRAME_01_23_45_12 ^ (1 << 79));
        assert!(!f.data_valid());
        assert_eq!(f.timecode(), None);
        // the sync word as it would read with the bit order reversed
        let f = LtcFrame::from_frame_integer((0x3FFD << 64) | (FRAME_01_23_45_12 & u64::MAX as u128));
        assert_eq!(f.timecode(), None);
    }

    #[test]
    fn test_ignores_bits_above_frame() {
        let f = LtcFrame::from_frame_integer(FRAME_01_23_45_12 | (1 << 100));
        assert_eq!(f.timecode(), Some(Timecode::new(1, 23, 45, 12)));
    }

    #[cfg(feature = "encode_ltc")]
    #[test]
    fn test_from_timecode() {
        let f = LtcFrame::from_timecode(&Timecode::new(1, 23, 45, 12));
        assert_eq!(f.to_frame_integer(), FRAME_01_23_45_12);
        let bits = f.to_bits();
        // first bit on the wire is the lowest frame-units bit
        assert!(!bits[0]);
        assert!(bits[1]);
        // wire order of the sync word
        let sync: [bool; 16] = [false, false, true, true, true, true, true, true, true, true, true, true, true, true, false, true];
        assert_eq!(bits[64..], sync);
    }

    #[cfg(feature = "encode_ltc")]
    #[test]
    fn test_from_timecode_truncates_tens() {
        let f = LtcFrame::from_timecode(&Timecode::new(45, 0, 0, 0));
        assert_eq!(f.timecode(), Some(Timecode::new(5, 0, 0, 0)));
        let f = LtcFrame::from_timecode(&Timecode::new(0, 95, 0, 0));
        assert_eq!(f.timecode(), Some(Timecode::new(0, 15, 0, 0)));
    }
}
