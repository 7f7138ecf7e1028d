//! Pagination types and traits

use std::ops::ControlFlow;

/// Whether a page callback wants the next page
///
/// Anything a callback can naturally return is accepted: `bool`,
/// `Option<T>` (`Some` means go on), `ControlFlow` and `()` (which stops).
pub trait ContinueSignal {
    /// `true` to fetch the next page
    fn should_continue(&self) -> bool;
}

impl ContinueSignal for bool {
    fn should_continue(&self) -> bool {
        *self
    }
}

impl ContinueSignal for () {
    fn should_continue(&self) -> bool {
        false
    }
}

impl<T> ContinueSignal for Option<T> {
    fn should_continue(&self) -> bool {
        self.is_some()
    }
}

impl<B, C> ContinueSignal for ControlFlow<B, C> {
    fn should_continue(&self) -> bool {
        matches!(self, ControlFlow::Continue(_))
    }
}
