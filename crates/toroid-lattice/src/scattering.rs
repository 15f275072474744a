//! Stochastic position swaps between Moore neighbours.
//!
//! Swaps are sourced from the frozen `current` and written into `next`,
//! which starts as a copy of `current`. Swaps are not atomic: when two swaps
//! touch the same target in one pass, the one processed later in row-major
//! order overwrites the earlier write. The grid total is therefore not
//! conserved in general. This collision behaviour is kept deliberately.

use rand::Rng;
use toroid_arena::Staging;
use toroid_space::MOORE_RING;

use crate::lattice::Lattice;

impl<R: Rng> Lattice<R> {
    /// With probability `gamma`, swap each cell with a uniformly chosen
    /// Moore neighbour.
    ///
    /// Cells are visited row-major. A selected cell writes its current value
    /// into the neighbour's `next` slot, then the neighbour's current value
    /// into its own. One uniform draw per cell, plus one neighbour draw per
    /// selected cell. Populates `previous`.
    pub fn scattering(&mut self, gamma: f64) {
        let torus = self.torus;
        let rng = &mut self.rng;
        self.arena.capture_previous();
        let pass = self.arena.begin_pass(Staging::CopyCurrent);

        for (r, c) in torus.cells() {
            if rng.random::<f64>() < gamma {
                let offset = MOORE_RING[rng.random_range(0..MOORE_RING.len())];
                let here = torus.index(r, c);
                let there = torus.offset_index(r, c, offset);
                pass.next[there] = pass.current[here];
                pass.next[here] = pass.current[there];
            }
        }

        self.commit();
    }
}
