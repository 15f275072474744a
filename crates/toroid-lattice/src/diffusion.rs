//! Explicit diffusion on the orthogonal stencil.

use toroid_arena::Staging;
use toroid_space::Neighbourhood;

use crate::lattice::Lattice;

/// Largest coefficient for which the forward-Euler 4-neighbour stencil is
/// stable.
pub const MAX_STABLE_DIFFUSION: f64 = 0.25;

impl<R> Lattice<R> {
    /// One forward-Euler step of the discrete heat equation.
    ///
    /// ```text
    /// next = current + c * (sum(orthogonal neighbours) - 4 * current)
    /// ```
    ///
    /// `c` is not validated: above [`MAX_STABLE_DIFFUSION`] the scheme
    /// oscillates and diverges. Populates `previous`.
    pub fn diffusion(&mut self, c: f64) {
        let torus = self.torus;
        self.arena.capture_previous();
        let pass = self.arena.begin_pass(Staging::Overwrite);

        for (r, col) in torus.cells() {
            let i = torus.index(r, col);
            let here = pass.current[i];
            let mut sum = 0.0;
            for j in torus.neighbours(r, col, Neighbourhood::Orthogonal) {
                sum += pass.current[j];
            }
            pass.next[i] = here + c * (sum - 4.0 * here);
        }

        self.commit();
    }
}
