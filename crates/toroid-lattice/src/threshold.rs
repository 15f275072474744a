//! Deterministic threshold growth.
//!
//! A Game-of-Life style majority rule: a cell is alive next step iff the
//! number of live Moore neighbours plus its own current value exceeds a
//! threshold. Only cells holding exactly `1.0` count as live neighbours, so
//! fractional values left by diffusion or heat never contribute to a
//! neighbour's count even though they still add to their own.

use toroid_arena::Staging;
use toroid_space::Neighbourhood;

use crate::lattice::Lattice;

impl<R> Lattice<R> {
    /// Apply the threshold growth rule with threshold `number`.
    ///
    /// For every cell, `next = 1` if `live_neighbours + current > number`,
    /// else `0`. All cells read the same unmodified `current`; the result is
    /// committed after the full pass. Populates `previous`.
    pub fn threshold_growth(&mut self, number: f64) {
        let torus = self.torus;
        self.arena.capture_previous();
        let pass = self.arena.begin_pass(Staging::Overwrite);

        for (r, c) in torus.cells() {
            let live = torus
                .neighbours(r, c, Neighbourhood::Moore)
                .into_iter()
                .filter(|&j| pass.current[j] == 1.0)
                .count();
            let i = torus.index(r, c);
            pass.next[i] = if live as f64 + pass.current[i] > number {
                1.0
            } else {
                0.0
            };
        }

        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use crate::Lattice;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use toroid_core::Matrix;

    fn lattice(state: &Matrix<f64>) -> Lattice {
        Lattice::from_matrix(state, ChaCha8Rng::seed_from_u64(0))
    }

    #[test]
    fn all_live_survives_threshold_eight() {
        let state = Matrix::filled(5, 5, 1.0).unwrap();
        let mut l = lattice(&state);
        l.threshold_growth(8.0);
        // 8 neighbours + self = 9 > 8.
        assert_eq!(l.snapshot(), state);
    }

    #[test]
    fn all_live_dies_at_threshold_nine() {
        let mut l = lattice(&Matrix::filled(4, 4, 1.0).unwrap());
        l.threshold_growth(9.0);
        assert_eq!(l.snapshot().sum(), 0.0);
    }

    #[test]
    fn self_value_breaks_ties() {
        // Centre has 4 live neighbours (a plus); corners hold 0.
        let state = Matrix::from_rows(&[
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
        ])
        .unwrap();
        let mut l = lattice(&state);
        l.threshold_growth(4.0);
        // Centre: 4 + 0 > 4 is false.
        assert_eq!(l.get(1, 1), 0.0);

        let mut with_centre = state.clone();
        with_centre[(1, 1)] = 1.0;
        let mut l = lattice(&with_centre);
        l.threshold_growth(4.0);
        // Centre: 4 + 1 > 4.
        assert_eq!(l.get(1, 1), 1.0);
    }

    #[test]
    fn fractional_neighbours_do_not_count() {
        let mut state = Matrix::filled(3, 3, 0.999).unwrap();
        state[(1, 1)] = 0.5;
        let mut l = lattice(&state);
        l.threshold_growth(0.0);
        // No neighbour equals exactly 1, but each cell's own value is > 0.
        assert!(l.snapshot().as_slice().iter().all(|&v| v == 1.0));

        let mut l = lattice(&state);
        l.threshold_growth(1.0);
        // 0 + 0.999 > 1 is false everywhere.
        assert_eq!(l.snapshot().sum(), 0.0);
    }

    #[test]
    fn neighbours_wrap_around_edges() {
        let mut state = Matrix::filled(4, 4, 0.0).unwrap();
        state[(0, 0)] = 1.0;
        let mut l = lattice(&state);
        l.threshold_growth(0.0);
        let snap = l.snapshot();
        // (3,3) is the north-west neighbour of (0,0) across both edges.
        assert_eq!(snap[(3, 3)], 1.0);
        assert_eq!(snap[(0, 3)], 1.0);
        assert_eq!(snap[(3, 0)], 1.0);
        assert_eq!(snap[(2, 2)], 0.0);
    }

    #[test]
    fn single_cell_torus_is_its_own_ring() {
        // All 8 neighbours of the only cell are the cell itself.
        let mut l = lattice(&Matrix::filled(1, 1, 1.0).unwrap());
        l.threshold_growth(8.5);
        assert_eq!(l.get(0, 0), 1.0);
        l.threshold_growth(9.0);
        assert_eq!(l.get(0, 0), 0.0);
    }

    #[test]
    fn populates_previous_and_commits() {
        let state = Matrix::from_rows(&[[1.0, 0.0], [0.0, 0.0]]).unwrap();
        let mut l = lattice(&state);
        l.threshold_growth(3.0);
        assert_eq!(l.previous(), state);
        assert_eq!(l.generation(), 1);
    }

    proptest! {
        #[test]
        fn deterministic_and_binary(
            bits in proptest::collection::vec(any::<bool>(), 36),
            number in 0.0f64..9.0,
        ) {
            let data = bits.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();
            let state = Matrix::from_vec(6, 6, data).unwrap();
            let mut a = Lattice::from_matrix(&state, ChaCha8Rng::seed_from_u64(1));
            let mut b = Lattice::from_matrix(&state, ChaCha8Rng::seed_from_u64(2));
            a.threshold_growth(number);
            b.threshold_growth(number);
            prop_assert_eq!(a.snapshot(), b.snapshot());
            prop_assert!(a.snapshot().is_binary());
        }
    }
}
