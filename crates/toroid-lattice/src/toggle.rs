//! Stochastic bit flip.

use rand::Rng;
use toroid_arena::Staging;

use crate::lattice::Lattice;

impl<R: Rng> Lattice<R> {
    /// With probability `gamma`, flip each cell: `next = (current + 1) mod 2`.
    ///
    /// The modulo is Euclidean, so a fractional value `v` in `[0, 2)` maps to
    /// `v + 1` or `v - 1`. Point-wise; one uniform draw per cell.
    pub fn toggle(&mut self, gamma: f64) {
        let rng = &mut self.rng;
        let pass = self.arena.begin_pass(Staging::CopyCurrent);

        for cell in pass.next.iter_mut() {
            if rng.random::<f64>() < gamma {
                *cell = (*cell + 1.0).rem_euclid(2.0);
            }
        }

        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use crate::Lattice;
    use toroid_core::Matrix;

    #[test]
    fn gamma_one_is_an_involution() {
        let mut l = Lattice::seeded(3, 3, 5).unwrap();
        l.toggle(1.0);
        assert_eq!(l.snapshot(), Matrix::filled(3, 3, 1.0).unwrap());
        l.toggle(1.0);
        assert_eq!(l.snapshot(), Matrix::filled(3, 3, 0.0).unwrap());
    }

    #[test]
    fn gamma_zero_is_identity() {
        let mut l = Lattice::seeded(6, 6, 5).unwrap();
        l.randomize();
        let before = l.snapshot();
        l.toggle(0.0);
        assert_eq!(l.snapshot(), before);
        assert_eq!(l.generation(), 1);
    }

    #[test]
    fn fractional_values_shift_by_one() {
        let mut l = Lattice::seeded(1, 3, 5).unwrap();
        l.set(0, 0, 0.5);
        l.set(0, 1, 1.5);
        l.set(0, 2, 3.0);
        l.toggle(1.0);
        let snap = l.snapshot();
        assert_eq!(snap.as_slice(), &[1.5, 0.5, 0.0]);
    }

    #[test]
    fn partial_toggle_only_flips_bits() {
        let mut l = Lattice::seeded(10, 10, 11).unwrap();
        l.randomize();
        let before = l.snapshot();
        l.toggle(0.3);
        let after = l.snapshot();
        assert!(after.is_binary());
        let flipped = before
            .as_slice()
            .iter()
            .zip(after.as_slice())
            .filter(|(a, b)| a != b)
            .count();
        assert!(flipped > 0 && flipped < 100);
    }
}
