//! Swap-on-commit triple buffer.

/// How the `next` buffer is prepared when a pass begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Staging {
    /// Fill `next` with zeros. For rules that only write some cells.
    Zeroed,
    /// Copy `current` into `next`. For rules that perturb a few cells and
    /// leave the rest as they were.
    CopyCurrent,
    /// Leave `next` as is. Only valid when the rule overwrites every cell.
    Overwrite,
}

/// Split borrow handed to a rule for the duration of one pass.
///
/// `current` is frozen for the whole pass; all writes go to `next`. The
/// guard must be dropped before [`CellArena::commit`].
#[must_use]
pub struct Pass<'a> {
    /// Read-only view of the authoritative state.
    pub current: &'a [f64],
    /// Write target, prepared according to the requested [`Staging`].
    pub next: &'a mut [f64],
}

/// Three fixed-size `f64` buffers with swap-on-commit.
///
/// # Invariants
///
/// - All three buffers have length `cell_count` for the arena's lifetime.
/// - Between passes, `current` is authoritative; `next` and `previous`
///   may hold stale data.
/// - `generation` counts commits and never decreases.
#[derive(Clone, Debug)]
pub struct CellArena {
    current: Vec<f64>,
    next: Vec<f64>,
    previous: Vec<f64>,
    generation: u64,
}

impl CellArena {
    /// Allocate three zero-filled buffers of `cell_count` cells.
    pub fn new(cell_count: usize) -> Self {
        Self {
            current: vec![0.0; cell_count],
            next: vec![0.0; cell_count],
            previous: vec![0.0; cell_count],
            generation: 0,
        }
    }

    /// Number of cells per buffer.
    pub fn cell_count(&self) -> usize {
        self.current.len()
    }

    /// Number of commits performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Authoritative state.
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Mutable authoritative state, for point-wise in-place updates that
    /// need no buffering.
    pub fn current_mut(&mut self) -> &mut [f64] {
        &mut self.current
    }

    /// The scratch buffer as last written.
    pub fn next(&self) -> &[f64] {
        &self.next
    }

    /// Mutable scratch buffer, for callers staging a pass by hand.
    pub fn next_mut(&mut self) -> &mut [f64] {
        &mut self.next
    }

    /// The pre-update copy taken by the last [`capture_previous`](Self::capture_previous).
    pub fn previous(&self) -> &[f64] {
        &self.previous
    }

    /// Copy `current` into `previous`.
    pub fn capture_previous(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// Prepare `next` and hand out the split borrow for a rule pass.
    pub fn begin_pass(&mut self, staging: Staging) -> Pass<'_> {
        match staging {
            Staging::Zeroed => self.next.fill(0.0),
            Staging::CopyCurrent => self.next.copy_from_slice(&self.current),
            Staging::Overwrite => {}
        }
        Pass {
            current: &self.current,
            next: &mut self.next,
        }
    }

    /// Make `next` the authoritative state.
    ///
    /// Swaps the two buffers; the old `current` becomes the new scratch
    /// buffer and is stale until the next pass prepares it.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Overwrite `current` from a slice of the same length.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != self.cell_count()`.
    pub fn load(&mut self, data: &[f64]) {
        self.current.copy_from_slice(data);
    }
}
