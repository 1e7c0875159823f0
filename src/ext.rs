use crate::{agg::MaxAccumulator, Selectable};

/// Selector-based maximum for any iterator.
///
/// Same semantics as [`crate::max_of`] and [`crate::try_max_of`], with the
/// selector applied to owned items. Items after a NaN short-circuit or an
/// error are not consumed.
///
/// ```
/// use max_of::MaxOfExt;
///
/// let words = "the quick brown fox".split(' ');
/// assert_eq!(Some(5), words.max_of(str::len));
///
/// assert_eq!(Some(81), (1..=9).max_of(|n| n * n));
/// ```
pub trait MaxOfExt: Iterator + Sized {
    /// Returns the largest value `selector` produces for the items of this
    /// iterator, or `None` if it yields nothing.
    fn max_of<S, F>(self, selector: F) -> Option<S>
    where
        S: Selectable,
        F: FnMut(Self::Item) -> S,
    {
        MaxAccumulator::run(self.map(selector))
    }

    /// Like [`MaxOfExt::max_of`], but the selector may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `selector`.
    fn try_max_of<S, E, F>(self, selector: F) -> Result<Option<S>, E>
    where
        S: Selectable,
        F: FnMut(Self::Item) -> Result<S, E>,
    {
        MaxAccumulator::try_run(self.map(selector))
    }
}

impl<I: Iterator> MaxOfExt for I {}
