use crate::ltc_frame::BITS_PER_FRAME;

/// The most recent bits received, at most one frame long.
///
/// Works as a shift register: the oldest bit sits at index 0 of `bits`, so a full window is
/// already the frame integer.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RollingWindow {
    bits: u128,
    len: usize,
}

impl RollingWindow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a bit and drops the oldest one once more than a frame has been received
    pub(crate) fn push(&mut self, bit: bool) {
        if self.len == BITS_PER_FRAME {
            self.bits >>= 1;
            self.len -= 1;
        }
        self.bits |= (bit as u128) << self.len;
        self.len += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == BITS_PER_FRAME
    }

    pub(crate) fn clear(&mut self) {
        self.bits = 0;
        self.len = 0;
    }

    /// Bit i is the i-th oldest bit in the window
    pub(crate) fn frame_integer(&self) -> u128 {
        self.bits
    }

    /// Oldest bit first
    pub(crate) fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.bits >> i) & 1 == 1)
    }
}
