//! # Ownseq: Sequences That Own Their State
//!
//! Build lazy sequences that carry everything they captured with them, so they
//! can be returned, stored, and iterated long after the scope that configured
//! them is gone.
//!
//! ## Core Types
//!
//! - **[`Generate`]**: Resumable element sources, advanced one [`Step`] at a time
//! - **[`Produce`]**: One-shot recipes that build a sequence from owned state
//! - **[`Owned<G>`](Owned)**: A movable sequence bundling a generator with its captures
//!
//! ## Key Features
//!
//! - **Self-contained**: `Owned::new(producer)` relocates captures into the sequence
//! - **Move-safe**: use-after-move and mid-iteration moves are compile errors, not runtime checks
//! - **Iterable**: every sequence works with `for`, borrowing or consuming
//!
//! ## Example
//!
//! ```
//! use ownseq::*;
//!
//! fn doubled(values: Vec<i32>) -> Owned<impl Generate<Item = i32>> {
//!     Owned::new(move || from_iter(values.into_iter().map(|n| n * 2)))
//! }
//!
//! // The vector now lives inside the sequence; pair up neighbours lazily.
//! let seq = doubled(vec![1, 2, 3, 4]);
//! let pairs: Vec<(i32, i32)> = seq.pairwise().into_iter().collect();
//! assert_eq!(pairs, [(2, 4), (4, 6), (6, 8)]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`empty()`] - Finish immediately without yielding
//! - [`once(value)`] - Yield one value, then finish
//! - [`from_fn(f)`] - Yield whatever the closure returns each step
//! - [`from_iter(iter)`] - Yield each element of an iterator
//!
//! **Decomposition:**
//! - [`pairwise(seq)`] - Overlapping adjacent pairs
//! - [`head_tail(seq)`] - First element plus an owning remainder

mod build;
mod generate;
mod head_tail;
mod owned;
mod pairwise;
mod produce;
mod step;

pub mod prelude;

pub use build::*;
pub use generate::*;
pub use head_tail::*;
pub use owned::*;
pub use pairwise::*;
pub use produce::*;
pub use step::*;
