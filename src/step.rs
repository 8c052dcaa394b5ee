/// Result of resuming a sequence, either the next element or exhaustion.
///
/// `Step` is the return type of [`Generate::resume`](crate::Generate::resume),
/// similar to how `Option` represents optional values. [`Step::Finished`] is the
/// end sentinel: comparing a step against it (or calling [`is_finished`]) is how
/// exhaustion is detected.
///
/// [`is_finished`]: Step::is_finished
///
/// # Examples
///
/// ```rust
/// use ownseq::Step;
///
/// let running: Step<i32> = Step::Yielded(42);
/// let done: Step<i32> = Step::Finished;
///
/// assert_eq!(running.map(|n| n * 2), Step::Yielded(84));
/// assert_eq!(done, Step::Finished);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T> {
    /// The sequence produced one more element.
    Yielded(T),
    /// The sequence has no further elements.
    Finished,
}

impl<T> Step<T> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    ///
    /// let y: Step<i32> = Step::Finished;
    /// assert!(!y.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Finished`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Finished;
    /// assert!(x.is_finished());
    ///
    /// let y: Step<i32> = Step::Yielded(42);
    /// assert!(!y.is_finished());
    /// ```
    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Step::Finished)
    }

    /// Converts from `Step<T>` to `Option<T>`, consuming `self`.
    ///
    /// `Yielded` becomes `Some` and `Finished` becomes `None`; this is the
    /// bridge from the sequence world to everything in `std` that speaks
    /// `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(42);
    /// assert_eq!(x.into_option(), Some(42));
    ///
    /// let y: Step<i32> = Step::Finished;
    /// assert_eq!(y.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Finished => None,
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<String> = Step::Yielded("alive".to_string());
    /// assert_eq!(x.as_ref(), Step::Yielded(&"alive".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Finished => Step::Finished,
        }
    }

    /// Converts from `&mut Step<T>` to `Step<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let mut x: Step<i32> = Step::Yielded(42);
    /// if let Step::Yielded(value) = x.as_mut() {
    ///     *value = 100;
    /// }
    /// assert_eq!(x, Step::Yielded(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Step<&mut T> {
        match self {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Finished => Step::Finished,
        }
    }

    /// Maps a `Step<T>` to `Step<U>` by applying a function to a yielded
    /// element, leaving `Finished` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(21);
    /// assert_eq!(x.map(|n| n * 2), Step::Yielded(42));
    ///
    /// let y: Step<i32> = Step::Finished;
    /// assert_eq!(y.map(|n: i32| n * 2), Step::Finished);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Finished => Step::Finished,
        }
    }

    /// Returns the contained `Yielded` element, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Finished` with a custom panic message provided
    /// by `msg`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(42);
    /// assert_eq!(x.expect_yielded("sequence ended early"), 42);
    /// ```
    ///
    /// ```should_panic
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Finished;
    /// x.expect_yielded("sequence ended early"); // panics with "sequence ended early"
    /// ```
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Finished => panic!("{}", msg),
        }
    }

    /// Returns the contained `Yielded` element, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Finished`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Yielded(42);
    /// assert_eq!(x.unwrap_yielded(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use ownseq::Step;
    ///
    /// let x: Step<i32> = Step::Finished;
    /// x.unwrap_yielded(); // panics
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Finished => panic!("called `Step::unwrap_yielded()` on a `Finished` value"),
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    /// Converts `Some` into `Yielded` and `None` into `Finished`, which is how
    /// plain iterators are adapted into sequences.
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Yielded(value),
            None => Step::Finished,
        }
    }
}
