//! Periodic block rotation.
//!
//! Anchors sit on a 3-periodic sublattice whose phase moves with `shift`.
//! Around each anchor the 8 ring values are rotated one step: the value at
//! ring index `i + 1` moves to ring index `i`, i.e. counter to the
//! clockwise order of [`MOORE_RING`]. Everything not written by some anchor
//! (the anchors themselves included) is zero afterwards.

use toroid_arena::Staging;
use toroid_space::MOORE_RING;

use crate::lattice::Lattice;

/// `true` if `(row, col)` is a rotation anchor at phase `shift`.
///
/// An anchor satisfies `(row - shift) mod 3 == 0` and
/// `(col + shift) mod 3 == 0`, with Euclidean modulo.
pub fn is_anchor(row: usize, col: usize, shift: i64) -> bool {
    let phase = shift.rem_euclid(3) as usize;
    row % 3 == phase && (col % 3 + phase) % 3 == 0
}

/// `shift + 1`, or the smallest value with the same residue mod 3 when the
/// increment would overflow.
fn advance_phase(shift: i64) -> i64 {
    shift
        .checked_add(1)
        .unwrap_or_else(|| (shift.rem_euclid(3) + 1) % 3)
}

impl<R> Lattice<R> {
    /// Rotate the Moore ring around every anchor by one position.
    ///
    /// For each anchor (row-major) and ring index `i`:
    /// `next[anchor + ring[i]] = current[anchor + ring[(i + 1) % 8]]`.
    /// `next` starts zeroed, and where two anchors' rings overlap (lattice
    /// sides not a multiple of 3) the later anchor wins.
    ///
    /// `shift` is the caller-owned phase counter. It is read, then advanced
    /// by exactly one after the pass is committed. It is never reduced, so
    /// only `shift mod 3` is observable. At `i64::MAX` it restarts at the
    /// next phase's residue in `0..3`.
    pub fn rotate_block(&mut self, shift: &mut i64) {
        let phase = *shift;
        let torus = self.torus;
        let pass = self.arena.begin_pass(Staging::Zeroed);

        for (r, c) in torus.cells() {
            if !is_anchor(r, c, phase) {
                continue;
            }
            for (i, &to) in MOORE_RING.iter().enumerate() {
                let from = MOORE_RING[(i + 1) % MOORE_RING.len()];
                pass.next[torus.offset_index(r, c, to)] =
                    pass.current[torus.offset_index(r, c, from)];
            }
        }

        self.commit();
        *shift = advance_phase(phase);
    }
}
