//! Stochastic heat injection.

use rand::Rng;

use crate::lattice::Lattice;

impl<R: Rng> Lattice<R> {
    /// With probability `gamma`, add `q` to each cell, independently.
    ///
    /// Point-wise and order-independent, so it updates `current` in place
    /// without a buffered pass. Values are not clamped and accumulate across
    /// calls. One uniform draw is consumed per cell.
    pub fn heat(&mut self, gamma: f64, q: f64) {
        let rng = &mut self.rng;
        for cell in self.arena.current_mut() {
            if rng.random::<f64>() < gamma {
                *cell += q;
            }
        }
    }
}
