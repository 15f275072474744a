//! The lattice: geometry, buffers, and random source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toroid_arena::{CellArena, Staging};
use toroid_core::{LatticeError, Matrix};
use toroid_space::Torus;

/// An `M x N` toroidal grid of `f64` cells.
///
/// The random source is owned and injectable: `R` defaults to
/// [`ChaCha8Rng`], and [`seeded`](Lattice::seeded) makes every stochastic
/// rule reproducible. Besides its buffers and RNG the lattice holds no
/// state; the rotation phase is threaded by the caller.
///
/// All methods take `&mut self` for mutation, so the borrow checker
/// guarantees a single writer and no rule ever observes a half-written
/// grid.
#[derive(Clone, Debug)]
pub struct Lattice<R = ChaCha8Rng> {
    pub(crate) torus: Torus,
    pub(crate) arena: CellArena,
    pub(crate) rng: R,
}

impl Lattice<ChaCha8Rng> {
    /// Create a zero-filled lattice with an entropy-seeded RNG.
    ///
    /// Returns `Err(LatticeError::InvalidDimensions)` if either dimension
    /// is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LatticeError> {
        Self::with_rng(rows, cols, ChaCha8Rng::seed_from_u64(rand::random()))
    }

    /// Create a zero-filled lattice whose RNG is seeded from `seed`.
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, LatticeError> {
        Self::with_rng(rows, cols, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Lattice<R> {
    /// Create a zero-filled lattice drawing randomness from `rng`.
    pub fn with_rng(rows: usize, cols: usize, rng: R) -> Result<Self, LatticeError> {
        let torus = Torus::new(rows, cols)?;
        Ok(Self {
            arena: CellArena::new(torus.cell_count()),
            torus,
            rng,
        })
    }

    /// Create a lattice whose current state is a copy of `state`.
    pub fn from_matrix(state: &Matrix<f64>, rng: R) -> Self {
        let torus =
            Torus::new(state.rows(), state.cols()).expect("matrix shapes are never empty");
        let mut arena = CellArena::new(torus.cell_count());
        arena.load(state.as_slice());
        Self { torus, arena, rng }
    }

    /// Overwrite every cell of `current` independently with 0 or 1, each
    /// with probability one half.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.arena.current_mut() {
            *cell = if rng.random::<bool>() { 1.0 } else { 0.0 };
        }
    }
}

impl<R> Lattice<R> {
    /// Number of rows (`M`).
    pub fn rows(&self) -> usize {
        self.torus.rows()
    }

    /// Number of columns (`N`).
    pub fn cols(&self) -> usize {
        self.torus.cols()
    }

    /// The lattice geometry.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Number of committed rule passes since construction.
    pub fn generation(&self) -> u64 {
        self.arena.generation()
    }

    /// Mutable access to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Current value at a signed coordinate, wrapped onto the torus.
    pub fn read(&self, row: i64, col: i64) -> f64 {
        self.arena.current()[self.torus.resolve_index(row, col)]
    }

    /// Current value at an unsigned coordinate, wrapped onto the torus.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let i = self.torus.index(row % self.rows(), col % self.cols());
        self.arena.current()[i]
    }

    /// Set a current value directly, wrapped onto the torus.
    ///
    /// Intended for seeding patterns between rule calls.
    pub fn set(&mut self, row: i64, col: i64, value: f64) {
        let i = self.torus.resolve_index(row, col);
        self.arena.current_mut()[i] = value;
    }

    /// Prepare the scratch buffer for a hand-written pass.
    ///
    /// After a committed rule, `next` holds the generation before it, so a
    /// pass that writes only some cells must start here:
    /// [`Staging::CopyCurrent`] keeps unwritten cells as they are and
    /// [`Staging::Zeroed`] clears them.
    pub fn stage_next(&mut self, staging: Staging) {
        let _ = self.arena.begin_pass(staging);
    }

    /// Write a value into the scratch buffer at a wrapped coordinate.
    ///
    /// The value becomes visible only after [`commit`](Lattice::commit).
    /// Cells not written keep whatever [`stage_next`](Lattice::stage_next)
    /// left there; without it they hold a stale generation.
    pub fn write_next(&mut self, row: i64, col: i64, value: f64) {
        let i = self.torus.resolve_index(row, col);
        self.arena.next_mut()[i] = value;
    }

    /// Replace `current` with the full contents of `next`.
    pub fn commit(&mut self) {
        self.arena.commit();
        tracing::trace!(generation = self.arena.generation(), "lattice commit");
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> Matrix<f64> {
        self.matrix_of(self.arena.current())
    }

    /// Owned copy of the `previous` buffer.
    ///
    /// Holds the pre-update state of the most recent `threshold_growth`,
    /// `diffusion`, or `scattering` call; zeros before any of them ran.
    pub fn previous(&self) -> Matrix<f64> {
        self.matrix_of(self.arena.previous())
    }

    /// Overwrite the current state from a matrix of the same shape.
    pub fn load(&mut self, state: &Matrix<f64>) -> Result<(), LatticeError> {
        if state.shape() != (self.rows(), self.cols()) {
            return Err(LatticeError::ShapeMismatch {
                expected: (self.rows(), self.cols()),
                actual: state.shape(),
            });
        }
        self.arena.load(state.as_slice());
        Ok(())
    }

    fn matrix_of(&self, data: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(self.rows(), self.cols(), data.to_vec())
            .expect("arena buffers match the torus shape")
    }
}
