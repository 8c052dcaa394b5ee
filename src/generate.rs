//! Core trait for resumable sequences.
//!
//! This module defines the [`Generate`] trait, the crate's view of a lazy,
//! single-pass element source. A `Generate` value is a suspended computation:
//! each call to [`resume`](Generate::resume) runs it until it either produces
//! the next element or reports that nothing is left.
//!
//! # The Generate Trait
//!
//! A `Generate` with `Item = T`:
//! - produces elements of type `T`, one per `resume` call
//! - reports exhaustion with [`Step::Finished`], and keeps reporting it on
//!   every later call
//!
//! Anything that can hand out elements on demand can implement it: hand-rolled
//! state machines, adapted iterators (see [`from_iter`](crate::from_iter)), or
//! closures (see [`from_fn`](crate::from_fn)).
//!
//! # Examples
//!
//! ```rust
//! use ownseq::{Generate, Step};
//!
//! struct Countdown(u32);
//!
//! impl Generate for Countdown {
//!     type Item = u32;
//!
//!     fn resume(&mut self) -> Step<u32> {
//!         if self.0 == 0 {
//!             return Step::Finished;
//!         }
//!         let current = self.0;
//!         self.0 -= 1;
//!         Step::Yielded(current)
//!     }
//! }
//!
//! let mut countdown = Countdown(2);
//! assert_eq!(countdown.resume(), Step::Yielded(2));
//! assert_eq!(countdown.resume(), Step::Yielded(1));
//! assert_eq!(countdown.resume(), Step::Finished);
//! ```

use crate::step::Step;

/// A lazy, single-pass element source that is advanced one step at a time.
///
/// Each call to `resume()` either produces the next element or reports
/// exhaustion. State lives inside the implementor, so advancing requires only
/// `&mut self` and the value can be stored, moved, and dropped like any other
/// owned data.
///
/// # Contract
///
/// Once `resume` has returned [`Step::Finished`], every subsequent call must
/// return `Finished` as well. Elements that were consumed are gone for good;
/// a sequence never restarts on its own.
pub trait Generate {
    /// The type of element this sequence produces.
    type Item;

    /// Run the sequence until it produces the next element or finishes.
    fn resume(&mut self) -> Step<Self::Item>;

    /// Erase the concrete type behind `Box<dyn Generate>`.
    ///
    /// Useful for storing differently-typed sequences in one place.
    ///
    /// ```rust
    /// use ownseq::{empty, once, Generate, Step};
    ///
    /// let mut sequences = vec![once(7).boxed(), empty().boxed()];
    /// assert_eq!(sequences[0].resume(), Step::Yielded(7));
    /// assert_eq!(sequences[1].resume(), Step::Finished);
    /// ```
    fn boxed(self) -> Box<dyn Generate<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<G> Generate for Box<G>
where
    G: Generate + ?Sized,
{
    type Item = G::Item;

    fn resume(&mut self) -> Step<Self::Item> {
        (**self).resume()
    }
}

impl<G> Generate for &mut G
where
    G: Generate + ?Sized,
{
    type Item = G::Item;

    fn resume(&mut self) -> Step<Self::Item> {
        (**self).resume()
    }
}

/// A vacant slot behaves as an already-finished sequence.
impl<G> Generate for Option<G>
where
    G: Generate,
{
    type Item = G::Item;

    fn resume(&mut self) -> Step<Self::Item> {
        match self {
            Some(gen) => gen.resume(),
            None => Step::Finished,
        }
    }
}

/// Lets two differently-typed sequences with the same element type flow
/// through a single binding.
impl<L, R> Generate for either::Either<L, R>
where
    L: Generate,
    R: Generate<Item = L::Item>,
{
    type Item = L::Item;

    fn resume(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(gen) => gen.resume(),
            either::Either::Right(gen) => gen.resume(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, once};
    use either::Either;

    struct Countdown(u32);

    impl Generate for Countdown {
        type Item = u32;

        fn resume(&mut self) -> Step<u32> {
            if self.0 == 0 {
                return Step::Finished;
            }
            let current = self.0;
            self.0 -= 1;
            Step::Yielded(current)
        }
    }

    fn collect_all<G: Generate>(mut gen: G) -> Vec<G::Item> {
        let mut items = Vec::new();
        while let Step::Yielded(item) = gen.resume() {
            items.push(item);
        }
        items
    }

    #[test]
    fn test_manual_impl_counts_down_then_stays_finished() {
        let mut countdown = Countdown(3);
        assert_eq!(countdown.resume(), Step::Yielded(3));
        assert_eq!(countdown.resume(), Step::Yielded(2));
        assert_eq!(countdown.resume(), Step::Yielded(1));
        assert_eq!(countdown.resume(), Step::Finished);
        assert_eq!(countdown.resume(), Step::Finished);
    }

    #[test]
    fn test_mut_ref_advances_the_original() {
        let mut countdown = Countdown(3);
        assert_eq!(countdown.resume(), Step::Yielded(3));
        assert_eq!(collect_all(&mut countdown), [2, 1]);
        assert_eq!(countdown.resume(), Step::Finished);
    }

    #[test]
    fn test_boxed_erases_the_concrete_type() {
        let mut sequences: Vec<Box<dyn Generate<Item = u32>>> =
            vec![Countdown(1).boxed(), once(9).boxed(), empty().boxed()];

        assert_eq!(sequences[0].resume(), Step::Yielded(1));
        assert_eq!(sequences[0].resume(), Step::Finished);
        assert_eq!(sequences[1].resume(), Step::Yielded(9));
        assert_eq!(sequences[2].resume(), Step::Finished);
    }

    #[test]
    fn test_option_slot() {
        let mut slot = Some(Countdown(1));
        assert_eq!(slot.resume(), Step::Yielded(1));
        assert_eq!(slot.resume(), Step::Finished);

        let mut vacant: Option<Countdown> = None;
        assert_eq!(vacant.resume(), Step::Finished);
    }

    #[test]
    fn test_either_unifies_two_sequence_types() {
        let mut left: Either<Countdown, crate::build::Once<u32>> = Either::Left(Countdown(2));
        assert_eq!(collect_all(&mut left), [2, 1]);

        let mut right: Either<Countdown, crate::build::Once<u32>> = Either::Right(once(9));
        assert_eq!(collect_all(&mut right), [9]);
    }
}
