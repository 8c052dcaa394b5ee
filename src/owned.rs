//! Self-contained sequences that own their state.
//!
//! An [`Owned`] sequence bundles a lazily-built generator with everything the
//! generator captured, in a single movable value. Construction runs a
//! [`Produce`] recipe exactly once and keeps the result inside the wrapper,
//! so the sequence can outlive the scope that configured it.
//!
//! Misuse that other designs police with runtime flags is simply not
//! expressible here. A moved-from sequence cannot be touched again, a
//! sequence cannot be moved while an iteration handle borrows it, and there
//! is no way to duplicate one mid-flight. See the [`Owned`] docs for the
//! full story.

use crate::generate::Generate;
use crate::produce::Produce;
use crate::step::Step;

/// A movable sequence that owns the state it was built from.
///
/// `Owned::new` runs a producer immediately and stores the generator it
/// returns. Everything the producer captured now lives inside the `Owned`
/// value, which can be returned from functions, stored in collections, and
/// iterated wherever it ends up.
///
/// # Examples
///
/// The classic use is escaping the scope that configured the sequence:
///
/// ```rust
/// use ownseq::{from_iter, Generate, Owned};
///
/// fn evens_up_to(limit: i32) -> Owned<impl Generate<Item = i32>> {
///     let data: Vec<i32> = (0..=limit).filter(|n| n % 2 == 0).collect();
///     Owned::new(move || from_iter(data))
/// }
///
/// let seq = evens_up_to(6);
/// assert_eq!(seq.into_iter().collect::<Vec<_>>(), [0, 2, 4, 6]);
/// ```
///
/// Moving an in-flight sequence carries its progress along; nothing restarts:
///
/// ```rust
/// use ownseq::{from_iter, Generate, Owned, Step};
///
/// let mut seq = Owned::new(|| from_iter(vec![1, 2, 3]));
/// assert_eq!(seq.resume(), Step::Yielded(1));
///
/// let mut moved = seq;
/// assert_eq!(moved.resume(), Step::Yielded(2));
/// ```
///
/// # Ownership
///
/// The compiler rejects every use of a sequence after it has been moved away:
///
/// ```compile_fail,E0382
/// use ownseq::{from_iter, Generate, Owned};
///
/// let mut seq = Owned::new(|| from_iter(vec![1, 2, 3]));
/// let mut elsewhere = seq;
/// seq.resume(); // error[E0382]: borrow of moved value: `seq`
/// ```
///
/// A sequence cannot be moved out from under a live iteration handle:
///
/// ```compile_fail,E0505
/// use ownseq::{from_iter, Owned};
///
/// let mut seq = Owned::new(|| from_iter(vec![1, 2, 3]));
/// let mut steps = seq.iter();
/// let elsewhere = seq; // error[E0505]: cannot move out of `seq` because it is borrowed
/// steps.next();
/// ```
///
/// And there is no way to fork one into two independently-advancing copies:
///
/// ```compile_fail,E0599
/// use ownseq::{from_iter, Owned};
///
/// let seq = Owned::new(|| from_iter(vec![1, 2, 3]));
/// let copy = seq.clone(); // error[E0599]: no method named `clone` found
/// ```
#[derive(Debug)]
pub struct Owned<G> {
    gen: G,
}

impl<G: Generate> Owned<G> {
    /// Runs the producer and wraps the sequence it builds.
    ///
    /// The producer is consumed here, captures and all. Whatever it owned
    /// belongs to the returned sequence now.
    ///
    /// ```rust
    /// use ownseq::{once, Generate, Owned, Step};
    ///
    /// let greeting = "hi".to_string();
    /// let mut seq = Owned::new(move || once(greeting));
    /// assert_eq!(seq.resume(), Step::Yielded("hi".to_string()));
    /// ```
    pub fn new<P>(producer: P) -> Self
    where
        P: Produce<Sequence = G>,
    {
        Owned {
            gen: producer.produce(),
        }
    }

    /// Borrows the sequence as an [`Iterator`] without consuming it.
    ///
    /// Elements taken through the handle are gone from the sequence, but the
    /// sequence itself stays usable once the handle is dropped, picking up
    /// exactly where iteration stopped.
    ///
    /// ```rust
    /// use ownseq::{from_iter, Owned};
    ///
    /// let mut seq = Owned::new(|| from_iter(1..=4));
    ///
    /// let head: Vec<i32> = seq.iter().take(2).collect();
    /// assert_eq!(head, [1, 2]);
    ///
    /// let rest: Vec<i32> = seq.iter().collect();
    /// assert_eq!(rest, [3, 4]);
    /// ```
    pub fn iter(&mut self) -> Iter<'_, G> {
        Iter(self)
    }

    /// Unwraps the sequence, returning the raw generator inside.
    ///
    /// ```rust
    /// use ownseq::{once, Generate, Owned, Step};
    ///
    /// let seq = Owned::new(|| once(5));
    /// let mut raw = seq.into_inner();
    /// assert_eq!(raw.resume(), Step::Yielded(5));
    /// ```
    pub fn into_inner(self) -> G {
        self.gen
    }

    /// Erases the generator type while keeping the `Owned` wrapper.
    ///
    /// ```rust
    /// use ownseq::{empty, once, Generate, Owned, Step};
    ///
    /// let mut sequences = vec![
    ///     Owned::new(|| once(1)).boxed(),
    ///     Owned::new(|| empty()).boxed(),
    /// ];
    /// assert_eq!(sequences[0].resume(), Step::Yielded(1));
    /// assert_eq!(sequences[1].resume(), Step::Finished);
    /// ```
    pub fn boxed(self) -> Owned<Box<dyn Generate<Item = G::Item>>>
    where
        G: 'static,
    {
        Owned {
            gen: Box::new(self.gen),
        }
    }
}

impl<G: Generate> Generate for Owned<G> {
    type Item = G::Item;

    fn resume(&mut self) -> Step<G::Item> {
        self.gen.resume()
    }
}

/// A borrowing iterator over an [`Owned`] sequence. See [`Owned::iter`].
#[derive(Debug)]
pub struct Iter<'a, G>(&'a mut Owned<G>);

impl<G: Generate> Iterator for Iter<'_, G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<G::Item> {
        self.0.resume().into_option()
    }
}

/// A consuming iterator over an [`Owned`] sequence.
#[derive(Debug)]
pub struct IntoIter<G>(Owned<G>);

impl<G: Generate> Iterator for IntoIter<G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<G::Item> {
        self.0.resume().into_option()
    }
}

impl<G: Generate> IntoIterator for Owned<G> {
    type Item = G::Item;
    type IntoIter = IntoIter<G>;

    fn into_iter(self) -> IntoIter<G> {
        IntoIter(self)
    }
}

impl<'a, G: Generate> IntoIterator for &'a mut Owned<G> {
    type Item = G::Item;
    type IntoIter = Iter<'a, G>;

    fn into_iter(self) -> Iter<'a, G> {
        Iter(self)
    }
}
