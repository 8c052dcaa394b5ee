//! Overlapping adjacent pairs of a sequence.
//!
//! [`pairwise`] turns a sequence of elements into a sequence of two-element
//! windows: `a, b, c, d` becomes `(a, b), (b, c), (c, d)`. Every element
//! except the first and last shows up in two windows, so elements must be
//! [`Clone`]. A source with fewer than two elements has no windows at all.

use crate::generate::Generate;
use crate::owned::Owned;
use crate::step::Step;

/// Creates a sequence of overlapping adjacent pairs.
///
/// Consumes the source, so the pairs sequence is as self-contained as the
/// sequence it came from. Like the sources in this crate it is lazy: nothing
/// is pulled from the underlying sequence until the first resume.
///
/// ```rust
/// use ownseq::{from_iter, pairwise, Owned};
///
/// let seq = Owned::new(|| from_iter(vec![1, 2, 3, 4]));
/// let pairs: Vec<(i32, i32)> = pairwise(seq).into_iter().collect();
/// assert_eq!(pairs, [(1, 2), (2, 3), (3, 4)]);
/// ```
pub fn pairwise<G>(seq: Owned<G>) -> Owned<Pairs<G>>
where
    G: Generate,
    G::Item: Clone,
{
    let gen = seq.into_inner();
    Owned::new(move || Pairs { gen, lead: None })
}

/// An adjacent-pairs sequence. See [`pairwise`].
#[derive(Debug, Clone)]
pub struct Pairs<G: Generate> {
    gen: G,
    // Leading element of the next pair. `None` before the first resume,
    // `Some(None)` once the underlying sequence is exhausted.
    lead: Option<Option<G::Item>>,
}

impl<G> Generate for Pairs<G>
where
    G: Generate,
    G::Item: Clone,
{
    type Item = (G::Item, G::Item);

    fn resume(&mut self) -> Step<Self::Item> {
        let Self { gen, lead } = self;
        let slot = lead.get_or_insert_with(|| gen.resume().into_option());

        // Taking the lead leaves `Some(None)` behind, which keeps the
        // adapter finished once the source runs dry.
        let prev = match slot.take() {
            Some(item) => item,
            None => return Step::Finished,
        };

        match gen.resume() {
            Step::Yielded(next) => {
                *slot = Some(next.clone());
                Step::Yielded((prev, next))
            }
            Step::Finished => Step::Finished,
        }
    }
}

impl<G: Generate> Owned<G> {
    /// Creates a sequence of overlapping adjacent pairs. See [`pairwise`].
    ///
    /// ```rust
    /// use ownseq::{from_iter, Owned};
    ///
    /// let seq = Owned::new(|| from_iter("abc".chars()));
    /// let pairs: Vec<(char, char)> = seq.pairwise().into_iter().collect();
    /// assert_eq!(pairs, [('a', 'b'), ('b', 'c')]);
    /// ```
    pub fn pairwise(self) -> Owned<Pairs<G>>
    where
        G::Item: Clone,
    {
        pairwise(self)
    }
}
