//! Deferred construction of sequences.
//!
//! A [`Produce`] value is a recipe for a sequence: it owns whatever state the
//! sequence will need, and gives that state up when [`produce`](Produce::produce)
//! is called. Production consumes the recipe, so a sequence can be built from
//! it at most once and the captured state is never shared with a stale copy.
//!
//! Closures get the trait for free: any `FnOnce() -> G` where `G` implements
//! [`Generate`] is a producer.

use crate::generate::Generate;

/// A one-shot recipe that turns into a sequence.
///
/// `produce` takes `self` by value: the recipe, along with everything it
/// captured, relocates into the sequence it builds. There is no way to run a
/// producer twice, and no way to observe its captures after production.
///
/// # Examples
///
/// Closures are producers. Here the vector moves out of the enclosing scope
/// and into the recipe, then on into the sequence:
///
/// ```rust
/// use ownseq::{from_iter, Generate, Produce, Step};
///
/// let data = vec![10, 20];
/// let recipe = move || from_iter(data);
///
/// let mut seq = recipe.produce();
/// assert_eq!(seq.resume(), Step::Yielded(10));
/// assert_eq!(seq.resume(), Step::Yielded(20));
/// assert_eq!(seq.resume(), Step::Finished);
/// ```
pub trait Produce {
    /// The type of element the produced sequence yields.
    type Item;

    /// The type of sequence this recipe builds.
    type Sequence: Generate<Item = Self::Item>;

    /// Consume the recipe and build its sequence.
    fn produce(self) -> Self::Sequence;
}

impl<F, G> Produce for F
where
    F: FnOnce() -> G,
    G: Generate,
{
    type Item = G::Item;
    type Sequence = G;

    fn produce(self) -> G {
        self()
    }
}
