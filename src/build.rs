//! Ready-made sequence sources.
//!
//! Every function here returns a concrete [`Generate`] type, ready to be
//! advanced directly or handed to [`Owned::new`](crate::Owned::new) inside a
//! producer closure.

use std::fmt;
use std::iter::Fuse;
use std::marker::PhantomData;

use crate::generate::Generate;
use crate::step::Step;

/// Creates a sequence that finishes immediately without yielding anything.
///
/// ```rust
/// use ownseq::{empty, Generate, Step};
///
/// let mut seq = empty::<i32>();
/// assert_eq!(seq.resume(), Step::Finished);
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

/// A sequence with no elements. See [`empty`].
#[derive(Debug)]
pub struct Empty<T>(PhantomData<fn() -> T>);

// Not derived: a derive would demand `T: Clone` for a phantom field.
impl<T> Clone for Empty<T> {
    fn clone(&self) -> Empty<T> {
        Empty(PhantomData)
    }
}

impl<T> Generate for Empty<T> {
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        Step::Finished
    }
}

/// Creates a sequence that yields a single value and then finishes.
///
/// ```rust
/// use ownseq::{once, Generate, Step};
///
/// let mut seq = once("hello");
/// assert_eq!(seq.resume(), Step::Yielded("hello"));
/// assert_eq!(seq.resume(), Step::Finished);
/// ```
pub fn once<T>(value: T) -> Once<T> {
    Once(Some(value))
}

/// A single-element sequence. See [`once`].
#[derive(Debug, Clone)]
pub struct Once<T>(Option<T>);

impl<T> Generate for Once<T> {
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        self.0.take().into()
    }
}

/// Creates a sequence that yields whatever the closure returns on each step.
///
/// The closure is responsible for staying finished: once it returns
/// [`Step::Finished`] it should keep doing so on later calls.
///
/// ```rust
/// use ownseq::{from_fn, Generate, Step};
///
/// let mut count = 0;
/// let mut seq = from_fn(move || {
///     count += 1;
///     if count <= 3 {
///         Step::Yielded(count)
///     } else {
///         Step::Finished
///     }
/// });
///
/// assert_eq!(seq.resume(), Step::Yielded(1));
/// assert_eq!(seq.resume(), Step::Yielded(2));
/// assert_eq!(seq.resume(), Step::Yielded(3));
/// assert_eq!(seq.resume(), Step::Finished);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    FromFn(f)
}

/// A closure-backed sequence. See [`from_fn`].
pub struct FromFn<F>(F);

impl<T, F> Generate for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        (self.0)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish()
    }
}

/// Creates a sequence that yields each element of an iterator in turn.
///
/// The iterator is fused internally, so the sequence stays finished even if
/// the underlying iterator would start returning values again after `None`.
///
/// ```rust
/// use ownseq::{from_iter, Generate, Step};
///
/// let mut seq = from_iter(vec![1, 2]);
/// assert_eq!(seq.resume(), Step::Yielded(1));
/// assert_eq!(seq.resume(), Step::Yielded(2));
/// assert_eq!(seq.resume(), Step::Finished);
/// assert_eq!(seq.resume(), Step::Finished);
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: iter.into_iter().fuse(),
    }
}

/// An iterator-backed sequence. See [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: Fuse<I>,
}

impl<I> Generate for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn resume(&mut self) -> Step<I::Item> {
        self.iter.next().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_finishes_immediately() {
        let mut seq = empty::<String>();
        assert_eq!(seq.resume(), Step::Finished);
        assert_eq!(seq.resume(), Step::Finished);
    }

    #[test]
    fn test_empty_clones_even_for_non_cloneable_elements() {
        let mut seq = empty::<std::sync::Mutex<i32>>();
        let mut copy = seq.clone();
        assert!(seq.resume().is_finished());
        assert!(copy.resume().is_finished());
    }

    #[test]
    fn test_once_yields_exactly_one_value() {
        let mut seq = once("only".to_string());
        assert_eq!(seq.resume(), Step::Yielded("only".to_string()));
        assert_eq!(seq.resume(), Step::Finished);
        assert_eq!(seq.resume(), Step::Finished);
    }

    #[test]
    fn test_from_fn_drives_the_closure() {
        let mut remaining = 2;
        let mut seq = from_fn(move || {
            if remaining == 0 {
                return Step::Finished;
            }
            remaining -= 1;
            Step::Yielded(remaining)
        });

        assert_eq!(seq.resume(), Step::Yielded(1));
        assert_eq!(seq.resume(), Step::Yielded(0));
        assert_eq!(seq.resume(), Step::Finished);
    }

    #[test]
    fn test_from_iter_walks_the_iterator() {
        let mut seq = from_iter([4, 5, 6]);
        assert_eq!(seq.resume(), Step::Yielded(4));
        assert_eq!(seq.resume(), Step::Yielded(5));
        assert_eq!(seq.resume(), Step::Yielded(6));
        assert_eq!(seq.resume(), Step::Finished);
    }

    #[test]
    fn test_from_iter_of_nothing() {
        let mut seq = from_iter(Vec::<i32>::new());
        assert_eq!(seq.resume(), Step::Finished);
    }

    /// An iterator that comes back to life after its first `None`.
    struct Flicker {
        polls: u32,
    }

    impl Iterator for Flicker {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.polls += 1;
            match self.polls {
                1 => Some(1),
                2 => None,
                _ => Some(99),
            }
        }
    }

    #[test]
    fn test_from_iter_stays_finished_even_if_the_iterator_revives() {
        let mut seq = from_iter(Flicker { polls: 0 });
        assert_eq!(seq.resume(), Step::Yielded(1));
        assert_eq!(seq.resume(), Step::Finished);
        assert_eq!(seq.resume(), Step::Finished);
    }
}
