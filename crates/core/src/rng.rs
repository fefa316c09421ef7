//! Seeded RNG - one LCG for every random decision
//!
//! A small linear congruential generator (Numerical Recipes constants) keeps
//! every game reproducible from a single `u32` seed: snake food placement,
//! 2048 tile spawns, mine layout, bell positions, and the tetris piece bag
//! all draw from an instance owned by their state.

use tui_arcade_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever produce the additive constant stream.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG: state = a * state + c (mod 2^32), a=1664525, c=1013904223.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Random value in `[lo, hi)`.
    pub fn next_f32_range(&mut self, lo: f32, hi: f32) -> f32 {
        let unit = (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
        lo + unit * (hi - lo)
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled-bag tetromino generator.
///
/// Draws each of the seven kinds once per bag, then reshuffles. The next
/// draw is always previewable without disturbing the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.index = 0;
    }

    /// Take the next piece, reshuffling when the bag empties.
    pub fn draw(&mut self) -> PieceKind {
        if self.index >= 7 {
            self.refill();
        }
        let kind = self.bag[self.index];
        self.index += 1;
        kind
    }

    /// Preview the upcoming piece without consuming it.
    ///
    /// When the bag is exhausted this shuffles a preview copy with a clone of
    /// the RNG, so the answer matches what the next `draw` will return.
    pub fn peek(&self) -> PieceKind {
        if self.index < 7 {
            return self.bag[self.index];
        }
        let mut preview_rng = self.rng.clone();
        let mut next = PieceKind::ALL;
        preview_rng.shuffle(&mut next);
        next[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(10) < 10);
        }
    }

    #[test]
    fn next_f32_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32_range(2.0, 5.0);
            assert!((2.0..5.0).contains(&v));
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut vals: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut vals);
        let mut sorted = vals.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn bag_yields_all_seven_before_repeating() {
        let mut bag = PieceBag::new(123);
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(bag.draw());
        }
        for kind in PieceKind::ALL {
            assert!(seen.contains(&kind));
        }
    }

    #[test]
    fn peek_matches_next_draw_across_refill() {
        let mut bag = PieceBag::new(5);
        for _ in 0..20 {
            let peeked = bag.peek();
            assert_eq!(bag.draw(), peeked);
        }
    }
}
