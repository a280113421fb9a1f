use crate::FramesPerSecond;

/// What to do with framed timecode whose BCD fields are out of range
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BcdPolicy {
    /// Hand out whatever the fields decode to, e.g. frame 19 on a 25 fps stream
    #[default]
    PassThrough,
    /// Reject frames with non-decimal digits or values the frame rate cannot produce
    Strict(FramesPerSecond),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    pub bcd_policy: BcdPolicy,
}

impl DecoderConfig {
    pub fn strict(frames_per_second: FramesPerSecond) -> Self {
        Self {
            bcd_policy: BcdPolicy::Strict(frames_per_second),
        }
    }
}
