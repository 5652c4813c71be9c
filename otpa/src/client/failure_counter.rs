/// counts requests that failed after exhausting their retries, across a whole
/// batch. once the ceiling is reached the batch should stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureCounter {
    count: usize,
    ceiling: usize,
}

impl FailureCounter {
    pub fn new(ceiling: usize) -> FailureCounter {
        FailureCounter { count: 0, ceiling }
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    pub fn ceiling_reached(&self) -> bool {
        self.count >= self.ceiling
    }
}
