use crate::walker::Walker;

#[derive(Debug, Clone)]
pub struct StrideWalker {
    step: usize,
    index: usize,
}

impl StrideWalker {
    pub fn new(step: usize) -> StrideWalker {
        StrideWalker::at_slot(step, 0)
    }

    /// Slots are evenly spaced, so any of them can be reached directly
    pub fn at_slot(step: usize, slot: usize) -> StrideWalker {
        StrideWalker {
            step,
            index: slot.saturating_mul(step),
        }
    }
}

impl Walker for StrideWalker {
    fn index(&self) -> usize {
        self.index
    }

    fn advance(&mut self) {
        self.index = self.index.saturating_add(self.step);
    }
}
