//! Commonly used imports
//!
//! Use `use ownseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Generate, Owned, Produce, Step};

// Most common sources
pub use crate::build::{empty, from_fn, from_iter, once};

// Derived sequences
pub use crate::head_tail::head_tail;
pub use crate::pairwise::pairwise;
