use rand::Rng;

/// Source of uniformly random target coordinates.
pub trait MoveSource {
    /// Next `(x, y)` with both values in `0..size`.
    fn next_coordinate(&mut self, size: usize) -> (usize, usize);
}

impl<R: Rng + ?Sized> MoveSource for R {
    fn next_coordinate(&mut self, size: usize) -> (usize, usize) {
        (self.random_range(0..size), self.random_range(0..size))
    }
}

/// Pick a random target on a `size`×`size` board. Cells already attacked are
/// not excluded.
pub fn random_move<S: MoveSource + ?Sized>(size: usize, source: &mut S) -> (usize, usize) {
    source.next_coordinate(size)
}
