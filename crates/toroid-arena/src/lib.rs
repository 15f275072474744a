//! Cell buffer arena for the Toroid lattice engine.
//!
//! A lattice keeps three equally sized `f64` buffers, allocated once:
//!
//! ```text
//! CellArena
//! ├── current   ←── authoritative state, read by every rule
//! ├── next      ←── write target of the rule in progress
//! └── previous  ←── pre-update copy, for introspection only
//! ```
//!
//! A rule pass is `begin_pass()` → write into [`Pass::next`] while reading
//! [`Pass::current`] → `commit()`. Commit swaps `current` and `next` rather
//! than copying, so a long-running simulation never reallocates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;

pub use arena::{CellArena, Pass, Staging};
