use crate::jrand::JavaRandom;
use crate::walker::Walker;

/// Walks forward by pseudo-random gaps in `[lo, hi)`.
///
/// The first slot is already one gap in, so byte 0 is never used.
#[derive(Debug, Clone)]
pub struct RandomWalker {
    rng: JavaRandom,
    lo: u32,
    span: i32,
    index: usize,
}

impl RandomWalker {
    pub fn new(seed: i64, lo: u32, hi: u32) -> RandomWalker {
        RandomWalker::at_slot(seed, lo, hi, 0)
    }

    /// Gaps are not uniform, so reaching `slot` means replaying the
    /// generator from the seed.
    pub fn at_slot(seed: i64, lo: u32, hi: u32, slot: usize) -> RandomWalker {
        let mut walker = RandomWalker {
            rng: JavaRandom::new(seed),
            lo,
            span: hi.saturating_sub(lo).clamp(1, i32::MAX as u32) as i32,
            index: 0,
        };

        for _ in 0..=slot {
            walker.advance();
        }

        walker
    }

    fn gap(&mut self) -> usize {
        self.lo as usize + self.rng.next_int(self.span) as usize
    }
}

impl Walker for RandomWalker {
    fn index(&self) -> usize {
        self.index
    }

    fn advance(&mut self) {
        let gap = self.gap();
        self.index = self.index.saturating_add(gap);
    }
}
