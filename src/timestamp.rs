use core::time::Duration;

use num_traits::Zero;

/// A point on the caller's time axis.
///
/// The synchronizer only ever needs to step back a small, fixed span from the timestamp of the
/// last bit of a frame. Axes that cannot go below their origin (`Duration`, `Instant`) saturate
/// there; float seconds simply go negative.
pub trait Timestamp: Copy + PartialOrd {
    fn sub_duration(self, span: Duration) -> Self;
}

/// Time since an arbitrary origin, e.g. the start of a capture
impl Timestamp for Duration {
    fn sub_duration(self, span: Duration) -> Self {
        self.saturating_sub(span)
    }
}

/// Seconds on any axis, e.g. relative to a trigger
impl Timestamp for f64 {
    fn sub_duration(self, span: Duration) -> Self {
        self - span.as_secs_f64()
    }
}

/// Seconds on any axis, e.g. relative to a trigger
impl Timestamp for f32 {
    fn sub_duration(self, span: Duration) -> Self {
        self - span.as_secs_f32()
    }
}

#[cfg(feature = "std")]
impl Timestamp for std::time::Instant {
    fn sub_duration(self, span: Duration) -> Self {
        self.checked_sub(span).unwrap_or(self)
    }
}

/// One demodulated LTC bit and the moment it ended
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BitSample<T: Timestamp> {
    pub value: bool,
    pub end: T,
}

impl<T: Timestamp> BitSample<T> {
    pub fn new(value: bool, end: T) -> Self {
        Self { value, end }
    }

    /// For demodulators that report bits as numbers. Anything but zero is a one
    pub fn from_level<L: Zero>(level: L, end: T) -> Self {
        Self {
            value: !level.is_zero(),
            end,
        }
    }
}
