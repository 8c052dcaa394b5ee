//! Head and tail decomposition of a sequence.
//!
//! [`head_tail`] splits a sequence into its first element and an owning
//! remainder. The remainder is a full [`Owned`] sequence again, so the
//! decomposition can be repeated until nothing is left, functional-list
//! style.

use crate::generate::Generate;
use crate::owned::Owned;
use crate::step::Step;

/// Splits a sequence into its first element and the rest.
///
/// Consumes the sequence. Returns `None` if it was already finished;
/// otherwise the returned tail owns the advanced generator and yields
/// everything after the head.
///
/// ```rust
/// use ownseq::{from_iter, head_tail, Owned};
///
/// let seq = Owned::new(|| from_iter(vec![1, 2, 3]));
///
/// let (head, tail) = head_tail(seq).unwrap();
/// assert_eq!(head, 1);
/// assert_eq!(tail.into_iter().collect::<Vec<_>>(), [2, 3]);
/// ```
///
/// An exhausted sequence has no head:
///
/// ```rust
/// use ownseq::{empty, head_tail, Owned};
///
/// let seq = Owned::new(|| empty::<i32>());
/// assert!(head_tail(seq).is_none());
/// ```
pub fn head_tail<G>(seq: Owned<G>) -> Option<(G::Item, Owned<G>)>
where
    G: Generate,
{
    let mut gen = seq.into_inner();
    match gen.resume() {
        Step::Yielded(head) => Some((head, Owned::new(move || gen))),
        Step::Finished => None,
    }
}

impl<G: Generate> Owned<G> {
    /// Splits off the first element, returning it with the remainder.
    /// See [`head_tail`].
    ///
    /// ```rust
    /// use ownseq::{from_iter, Owned};
    ///
    /// let seq = Owned::new(|| from_iter(vec!['x', 'y']));
    ///
    /// let (first, rest) = seq.head_tail().unwrap();
    /// assert_eq!(first, 'x');
    ///
    /// let (second, rest) = rest.head_tail().unwrap();
    /// assert_eq!(second, 'y');
    /// assert!(rest.head_tail().is_none());
    /// ```
    pub fn head_tail(self) -> Option<(G::Item, Owned<G>)> {
        head_tail(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_iter};

    #[test]
    fn test_head_is_the_first_element_and_tail_is_the_rest() {
        let seq = Owned::new(|| from_iter(vec![1, 2, 3]));
        let (head, tail) = head_tail(seq).unwrap();
        assert_eq!(head, 1);
        assert_eq!(tail.into_iter().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn test_finished_sequence_has_no_head() {
        let seq = Owned::new(|| empty::<String>());
        assert!(head_tail(seq).is_none());
    }

    #[test]
    fn test_repeated_decomposition_walks_the_whole_sequence() {
        let mut seq = Owned::new(|| from_iter(1..=4));
        let mut heads = Vec::new();

        loop {
            match seq.head_tail() {
                Some((head, tail)) => {
                    heads.push(head);
                    seq = tail;
                }
                None => break,
            }
        }

        assert_eq!(heads, [1, 2, 3, 4]);
    }

    #[test]
    fn test_head_tail_after_partial_iteration() {
        let mut seq = Owned::new(|| from_iter(vec![1, 2, 3]));
        assert_eq!(seq.resume(), Step::Yielded(1));

        let (head, tail) = seq.head_tail().unwrap();
        assert_eq!(head, 2);
        assert_eq!(tail.into_iter().collect::<Vec<_>>(), [3]);
    }

    #[test]
    fn test_head_tail_after_draining_everything() {
        let mut seq = Owned::new(|| from_iter(vec![1]));
        assert_eq!(seq.iter().count(), 1);
        assert!(seq.head_tail().is_none());
    }

    fn sample() -> Owned<impl Generate<Item = i32>> {
        Owned::new(|| from_iter(1..=4))
    }

    #[test]
    fn test_head_tail_can_express_pairwise() {
        let mut by_hand = Vec::new();
        let (mut prev, mut rest) = sample().head_tail().unwrap();

        loop {
            match rest.head_tail() {
                Some((next, tail)) => {
                    by_hand.push((prev, next));
                    prev = next;
                    rest = tail;
                }
                None => break,
            }
        }

        let with_pairwise: Vec<(i32, i32)> = sample().pairwise().into_iter().collect();
        assert_eq!(by_hand, with_pairwise);
    }
}
