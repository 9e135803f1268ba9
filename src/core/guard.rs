//! Guard predicates for controlling state transitions.
//!
//! Guards decide whether a transition may fire for a given input. Two
//! reserved guards exist as named variants: `Continue` always fires and
//! `Never` is a declared edge that never fires.

use std::fmt;
use std::sync::Arc;

type Predicate<I> = Arc<dyn Fn(&I) -> bool + Send + Sync>;

/// Predicate over an input value that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use mata::core::Guard;
///
/// struct Tap {
///     flow: u32,
/// }
///
/// let flowing = Guard::when(|t: &Tap| t.flow > 0);
///
/// assert!(flowing.check(&Tap { flow: 1 }));
/// assert!(!flowing.check(&Tap { flow: 0 }));
/// assert!(Guard::<Tap>::Continue.check(&Tap { flow: 0 }));
/// assert!(!Guard::<Tap>::Never.check(&Tap { flow: 9 }));
/// ```
pub enum Guard<I> {
    /// Unconditional transition.
    Continue,
    /// Declared transition that never fires.
    Never,
    /// Transition fires when the predicate accepts the input.
    When(Predicate<I>),
}

impl<I> Guard<I> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be pure; it is evaluated at most once per
    /// `next` call and never after a winning guard.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Guard::When(Arc::new(predicate))
    }

    /// Check if the guard allows the transition for this input.
    pub fn check(&self, input: &I) -> bool {
        match self {
            Guard::Continue => true,
            Guard::Never => false,
            Guard::When(predicate) => predicate(input),
        }
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Guard::Continue)
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Guard::Never)
    }

    /// Short label for diagnostics and diagrams.
    pub fn describe(&self) -> &'static str {
        match self {
            Guard::Continue => "continue",
            Guard::Never => "never",
            Guard::When(_) => "when",
        }
    }
}

impl<I> Clone for Guard<I> {
    fn clone(&self) -> Self {
        match self {
            Guard::Continue => Guard::Continue,
            Guard::Never => Guard::Never,
            Guard::When(predicate) => Guard::When(Arc::clone(predicate)),
        }
    }
}

impl<I> PartialEq for Guard<I> {
    /// Reserved guards compare structurally; predicates compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Guard::Continue, Guard::Continue) | (Guard::Never, Guard::Never) => true,
            (Guard::When(a), Guard::When(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<I> fmt::Debug for Guard<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Guard::Continue => "Continue",
            Guard::Never => "Never",
            Guard::When(_) => "When(..)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Controls {
        tap: u32,
        drainable: bool,
    }

    #[test]
    fn guard_allows_matching_input() {
        let guard = Guard::when(|c: &Controls| c.tap > 0);

        assert!(guard.check(&Controls { tap: 1, drainable: false }));
        assert!(!guard.check(&Controls { tap: 0, drainable: false }));
    }

    #[test]
    fn reserved_guards_ignore_input() {
        let input = Controls { tap: 0, drainable: true };

        assert!(Guard::Continue.check(&input));
        assert!(!Guard::Never.check(&input));
        assert!(Guard::<Controls>::Continue.is_continue());
        assert!(Guard::<Controls>::Never.is_never());
    }

    #[test]
    fn reserved_guards_compare_structurally() {
        assert_eq!(Guard::<()>::Continue, Guard::Continue);
        assert_eq!(Guard::<()>::Never, Guard::Never);
        assert_ne!(Guard::<()>::Continue, Guard::Never);

        let a = Guard::when(|_: &()| true);
        let b = Guard::when(|_: &()| true);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn guard_is_deterministic() {
        let input = Controls { tap: 0, drainable: true };
        let guard = Guard::when(|c: &Controls| c.tap == 0 && c.drainable);

        assert_eq!(guard.check(&input), guard.check(&input));
    }

    #[test]
    fn check_calls_predicate_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = Guard::when(move |_: &()| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        guard.check(&());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn describe_names_variants() {
        assert_eq!(Guard::<()>::Continue.describe(), "continue");
        assert_eq!(Guard::<()>::Never.describe(), "never");
        assert_eq!(Guard::when(|_: &()| false).describe(), "when");
        assert_eq!(format!("{:?}", Guard::when(|_: &()| false)), "When(..)");
    }
}
