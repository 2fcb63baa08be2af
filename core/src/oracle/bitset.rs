const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-size set of values `0..len`, one bit per value.
#[derive(Debug, Clone)]
pub struct SeenSet {
    words: Vec<u64>,
}

impl SeenSet {
    pub fn new(len: usize) -> Self {
        Self { words: vec![0; len.div_ceil(WORD_BITS)] }
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Mark `value` as seen. Returns true if it was not seen before.
    pub fn insert(&mut self, value: usize) -> bool {
        let word = &mut self.words[value / WORD_BITS];
        let mask = 1u64 << (value % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
