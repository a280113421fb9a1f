use alloc::string::{String, ToString};
use core::fmt::{Display, Formatter};
use core::time::Duration;

use tracing::{debug, trace, warn};

use crate::error::TimecodeError;
use crate::ltc_decoder::config::{BcdPolicy, DecoderConfig};
use crate::ltc_decoder::rolling_window::RollingWindow;
use crate::ltc_frame::{LtcFrame, BITS_PER_FRAME};
use crate::timestamp::{BitSample, Timestamp};
use crate::Timecode;

pub mod config;
mod rolling_window;

/// How far the start of a decoded frame lies before its last bit: 80 bits of 0.4 ms.
///
/// This does not follow the actual bit rate. It is short enough that a frame never overlaps the
/// one decoded before it.
pub const FRAME_SPAN: Duration = Duration::from_micros(BITS_PER_FRAME as u64 * 400);

/// One LTC frame found in the bit stream
#[derive(PartialEq, Clone, Debug)]
pub struct DecodedFrame<T: Timestamp> {
    start: T,
    end: T,
    timecode: Timecode,
    label: String,
}

impl<T: Timestamp> DecodedFrame<T> {
    fn new(start: T, end: T, timecode: Timecode) -> Self {
        Self {
            start,
            end,
            timecode,
            label: timecode.to_string(),
        }
    }

    /// `FRAME_SPAN` before `end()`. `Duration` and `Instant` stop at their origin
    pub fn start(&self) -> T {
        self.start
    }

    /// End of the last bit of the frame
    pub fn end(&self) -> T {
        self.end
    }

    pub fn timecode(&self) -> &Timecode {
        &self.timecode
    }

    /// `HH:MM:SS:FF`, or `HH:MM:SS;FF` when the drop-frame flag is set
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: Timestamp> Display for DecodedFrame<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Counters over the lifetime of a synchronizer
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SynchronizerStats {
    pub bits_received: u64,
    /// Full windows checked for the sync word
    pub sync_attempts: u64,
    pub sync_mismatches: u64,
    pub frames_decoded: u64,
    /// Framed but refused by the strict BCD policy
    pub frames_rejected: u64,
}

/// Finds LTC frames in a stream of demodulated bits.
///
/// Keeps the last 80 bits. Whenever they end with the sync word the frame is decoded and the
/// window starts over empty. Until then the window slides one bit at a time, so the
/// synchronizer locks on to the first sync word in the stream wherever it is.
#[derive(Clone, Debug, Default)]
pub struct FrameSynchronizer {
    window: RollingWindow,
    config: DecoderConfig,
    stats: SynchronizerStats,
}

impl FrameSynchronizer {
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            window: RollingWindow::new(),
            config,
            stats: SynchronizerStats::default(),
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn stats(&self) -> &SynchronizerStats {
        &self.stats
    }

    /// Number of bits currently held, never more than 80
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Bits currently held, oldest first
    pub fn window(&self) -> impl Iterator<Item = bool> + '_ {
        self.window.iter()
    }

    /// Drops all bits received so far. Counters are kept
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Push received bits one after another in this function. Returns a frame on the bit that
    /// completes it.
    ///
    /// Frames refused by [`BcdPolicy::Strict`] are logged and dropped, use
    /// [`FrameSynchronizer::try_submit_bit`] to see them.
    pub fn submit_bit<T: Timestamp>(&mut self, sample: BitSample<T>) -> Option<DecodedFrame<T>> {
        self.try_submit_bit(sample).unwrap_or(None)
    }

    /// Like [`FrameSynchronizer::submit_bit`], but reports frames the strict BCD policy refuses.
    ///
    /// A refused frame still consumes the window, as its position in the stream is known.
    pub fn try_submit_bit<T: Timestamp>(&mut self, sample: BitSample<T>) -> Result<Option<DecodedFrame<T>>, TimecodeError> {
        self.stats.bits_received += 1;
        self.window.push(sample.value);
        if !self.window.is_full() {
            return Ok(None);
        }

        self.stats.sync_attempts += 1;
        let frame = LtcFrame::from_frame_integer(self.window.frame_integer());
        let Some(timecode) = frame.timecode() else {
            self.stats.sync_mismatches += 1;
            trace!(sync_word = frame.sync_word(), "no LTC sync word at end of window");
            return Ok(None);
        };
        self.window.clear();

        if let BcdPolicy::Strict(frames_per_second) = self.config.bcd_policy {
            let checked = frame.data().validate_digits().and_then(|_| timecode.validate(frames_per_second));
            if let Err(err) = checked {
                self.stats.frames_rejected += 1;
                warn!(%err, %timecode, "rejected LTC frame");
                return Err(err);
            }
        }

        self.stats.frames_decoded += 1;
        let decoded = DecodedFrame::new(sample.end.sub_duration(FRAME_SPAN), sample.end, timecode);
        debug!(timecode = decoded.label(), color_frame = timecode.color_frame, "decoded LTC frame");
        Ok(Some(decoded))
    }

    /// Decodes a whole stream of bits, yielding frames as they complete
    pub fn frames<I>(&mut self, bits: I) -> Frames<'_, I::IntoIter>
    where
        I: IntoIterator,
    {
        Frames {
            synchronizer: self,
            bits: bits.into_iter(),
        }
    }
}

/// Iterator returned by [`FrameSynchronizer::frames`]
pub struct Frames<'a, I> {
    synchronizer: &'a mut FrameSynchronizer,
    bits: I,
}

impl<'a, I, T> Iterator for Frames<'a, I>
where
    I: Iterator<Item = BitSample<T>>,
    T: Timestamp,
{
    type Item = DecodedFrame<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for sample in self.bits.by_ref() {
            if let Some(frame) = self.synchronizer.submit_bit(sample) {
                return Some(frame);
            }
        }
        None
    }
}
