use crate::{agg::MaxAccumulator, Selectable};

/// Applies `selector` to every element of `items` and returns the largest
/// selected value, or `None` if `items` is empty.
///
/// Ties keep the first maximum. If the selector produces a NaN that does not
/// become the running maximum, the scan stops and that NaN is returned; a
/// NaN produced by the first element is never beaten and is returned as
/// well.
///
/// # Examples
///
/// ```
/// use max_of::max_of;
///
/// struct Item {
///     name: &'static str,
///     count: u32,
/// }
///
/// let inventory = [
///     Item { name: "mustard", count: 2 },
///     Item { name: "soy", count: 4 },
///     Item { name: "tomato", count: 32 },
/// ];
///
/// assert_eq!(Some(32), max_of(&inventory, |i| i.count));
/// assert_eq!(None, max_of(&inventory[..0], |i| i.count));
/// # assert_eq!("tomato", inventory[2].name);
/// ```
pub fn max_of<T, S, F>(items: &[T], selector: F) -> Option<S>
where
    S: Selectable,
    F: FnMut(&T) -> S,
{
    MaxAccumulator::run(items.iter().map(selector))
}

/// Like [`max_of`], but the selector may fail.
///
/// The first error stops the scan and is returned unchanged.
///
/// # Errors
///
/// Returns the first error produced by `selector`.
///
/// # Examples
///
/// ```
/// use max_of::try_max_of;
///
/// let raw = ["12", "7", "40"];
/// assert_eq!(Ok(Some(40)), try_max_of(&raw, |s| s.parse::<u32>()));
///
/// let raw = ["12", "x", "40"];
/// assert!(try_max_of(&raw, |s| s.parse::<u32>()).is_err());
/// ```
pub fn try_max_of<T, S, E, F>(items: &[T], selector: F) -> Result<Option<S>, E>
where
    S: Selectable,
    F: FnMut(&T) -> Result<S, E>,
{
    MaxAccumulator::try_run(items.iter().map(selector))
}
