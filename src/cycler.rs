/// Cyclic index arithmetic over a non-empty slide collection.
///
/// A `Cycler` can only be built for `len > 0`, so callers holding one never
/// divide by zero. Results always land in `0..len`; stepping back from the
/// first slide wraps to the last instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycler {
    len: usize,
}

impl Cycler {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&self, current: usize) -> usize {
        (current % self.len + 1) % self.len
    }

    pub fn previous(&self, current: usize) -> usize {
        (current % self.len + self.len - 1) % self.len
    }

    /// Indicator strips only hand out valid indices, so the target is trusted.
    pub fn go_to(&self, index: usize) -> usize {
        index
    }
}
