use crate::Selectable;
use std::ops::ControlFlow;

/// Running maximum over a stream of selected values.
///
/// Each value is either taken as the new maximum, ignored, or (if it is
/// unorderable and did not win the comparison) ends the scan.
pub struct MaxAccumulator<S> {
    value: Option<S>,
}

impl<S> Default for MaxAccumulator<S> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<S: Selectable> MaxAccumulator<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next value.
    ///
    /// Returns `Break` with the final result if the scan must stop.
    pub fn push(&mut self, value: S) -> ControlFlow<S> {
        let replaces = match &self.value {
            None => true,
            Some(current) => value > *current,
        };

        if replaces {
            self.value = Some(value);
            return ControlFlow::Continue(());
        }

        if value.is_unorderable() {
            log::trace!("unorderable value encountered, stopping scan");
            return ControlFlow::Break(value);
        }

        ControlFlow::Continue(())
    }

    pub fn finish(self) -> Option<S> {
        self.value
    }

    /// Drives the accumulator over `values` until exhausted or poisoned.
    pub fn run<I: IntoIterator<Item = S>>(values: I) -> Option<S> {
        let mut accu = Self::new();

        for value in values {
            if let ControlFlow::Break(poison) = accu.push(value) {
                return Some(poison);
            }
        }

        accu.finish()
    }

    /// Like [`MaxAccumulator::run`], but stops at the first error.
    pub fn try_run<E, I: IntoIterator<Item = Result<S, E>>>(values: I) -> Result<Option<S>, E> {
        let mut accu = Self::new();

        for value in values {
            if let ControlFlow::Break(poison) = accu.push(value?) {
                return Ok(Some(poison));
            }
        }

        Ok(accu.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn empty_finishes_with_nothing() {
        assert_eq!(None, MaxAccumulator::<i32>::new().finish());
    }

    #[test_log::test]
    fn first_value_is_taken() {
        let mut accu = MaxAccumulator::new();
        assert_eq!(ControlFlow::Continue(()), accu.push(-5));
        assert_eq!(Some(-5), accu.finish());
    }

    #[test_log::test]
    fn smaller_value_is_ignored() {
        let mut accu = MaxAccumulator::new();
        assert_eq!(ControlFlow::Continue(()), accu.push(3.0));
        assert_eq!(ControlFlow::Continue(()), accu.push(1.0));
        assert_eq!(ControlFlow::Continue(()), accu.push(3.0));
        assert_eq!(Some(3.0), accu.finish());
    }

    #[test_log::test]
    fn nan_after_first_breaks() {
        let mut accu = MaxAccumulator::new();
        assert_eq!(ControlFlow::Continue(()), accu.push(1.0_f64));

        let ControlFlow::Break(value) = accu.push(f64::NAN) else {
            panic!("NaN should stop the scan");
        };
        assert!(value.is_nan());
    }

    #[test_log::test]
    fn leading_nan_is_kept() {
        let mut accu = MaxAccumulator::new();
        assert_eq!(ControlFlow::Continue(()), accu.push(f64::NAN));
        assert_eq!(ControlFlow::Continue(()), accu.push(1.0));
        assert_eq!(ControlFlow::Continue(()), accu.push(3.0));
        assert!(accu.finish().is_some_and(f64::is_nan));
    }

    #[test_log::test]
    fn try_run_returns_first_error() {
        let values: Vec<Result<i32, &str>> = vec![Ok(1), Err("first"), Err("second")];
        assert_eq!(Err("first"), MaxAccumulator::try_run(values));
    }
}
