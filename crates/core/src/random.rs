use mockall::automock;
use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Source of the uniform choices made while filling a timetable.
#[automock]
pub trait RandomSource {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl RandomSource for ThreadRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
