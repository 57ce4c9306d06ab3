//! # Capabilities
//!
//! Every callable in this crate is assembled from a handful of narrow,
//! arity-independent contracts. None of them carries data; they only decide
//! which combinators a given `(kind, arity)` value exposes.
//!
//! | Capability | Trait | Exposed by |
//! |------------|-------|------------|
//! | Arity      | [`Arity`]   | every function and runnable |
//! | Result     | [`Output`]  | functions (`R`) and runnables (`()`) |
//! | Default    | [`Recover`] | functions and runnables |
//! | Chain      | [`Chain`]   | runnables |
//! | Consume    | [`Consume`] | functions |
//!
//! ## Covariant returns
//!
//! Where a combinator produces "the same kind of thing with something
//! retyped", the produced type is an associated type of the implementing
//! callable. `Function2<A, B, R>::and_then` yields `Function2<A, B, V>`,
//! while `Runnable2<A, B>::and_then` yields `Function2<A, B, V>`.

use crate::error::Fault;

/// The number of inputs a callable accepts.
pub trait Arity {
    /// Fixed at the type level.
    const ARITY: usize;

    /// The runtime view of [`Arity::ARITY`].
    fn arity(&self) -> usize {
        Self::ARITY
    }
}

/// Result capability: chain a post-transform onto the output.
///
/// # Example
///
/// ```
/// use compositional_arity::prelude::*;
///
/// let len = Function1::new(|s: String| Ok(s.len()));
/// let doubled = len.and_then(|n| Ok(n * 2));
/// assert_eq!(doubled.apply1("abc".to_string()), Ok(6));
/// ```
pub trait Output: Sized {
    /// What the callable currently produces.
    type Value;

    /// The callable produced once `after` has been chained on.
    type Then<V: 'static>;

    /// Feed every output through `after`.
    ///
    /// A fault from either this callable or `after` reaches the caller
    /// unchanged.
    fn and_then<V: 'static, G>(self, after: G) -> Self::Then<V>
    where
        G: Fn(Self::Value) -> Result<V, Fault> + 'static;
}

/// Default capability: install a fault-recovery fallback.
///
/// The handler receives the fault raised by the guarded callable and returns
/// either a fallback or an `Option` of one. The fallback is then invoked with
/// the very same inputs. Recovery is single-level: a fault raised by the
/// fallback is not intercepted again.
///
/// A handler returning `None` raises [`Fault::Configuration`].
///
/// # Example
///
/// ```
/// use compositional_arity::prelude::*;
///
/// let div = Function2::new(|a: i32, b: i32| {
///     a.checked_div(b).ok_or_else(|| Fault::computation("division by zero"))
/// });
/// let safe = div.handle(|_| Function2::new(|_: i32, _: i32| Ok(0)));
/// assert_eq!(safe.apply2(5, 0), Ok(0));
/// assert_eq!(safe.apply2(10, 2), Ok(5));
/// ```
pub trait Recover: Sized {
    /// Guard this callable with `handler`.
    ///
    /// The inputs are cloned before the first attempt so the fallback can be
    /// invoked with them.
    fn handle<H, O>(self, handler: H) -> Self
    where
        H: Fn(Fault) -> O + 'static,
        O: Into<Option<Self>>;
}

/// Chain capability: run two same-arity operations in sequence.
///
/// Both see the same inputs. If the first faults, the second never runs.
pub trait Chain: Sized {
    /// Run `after` with the same inputs once this one has succeeded.
    fn then(self, after: Self) -> Self;
}

/// Consume capability: discard the result, keep the side effects and faults.
pub trait Consume {
    /// The side-effect-only counterpart.
    type Consumed;

    /// Drop the result of every invocation.
    fn consume(self) -> Self::Consumed;
}

/// Extract the fallback a handler produced, or fail with a configuration fault.
pub(crate) fn require_fallback<F>(fallback: impl Into<Option<F>>) -> Result<F, Fault> {
    fallback.into().ok_or_else(Fault::missing_fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair;

    impl Arity for Pair {
        const ARITY: usize = 2;
    }

    #[test]
    fn test_arity_default_method() {
        assert_eq!(Pair.arity(), 2);
        assert_eq!(Pair::ARITY, 2);
    }

    #[test]
    fn test_require_fallback_present() {
        assert_eq!(require_fallback::<i32>(7), Ok(7));
        assert_eq!(require_fallback::<i32>(Some(7)), Ok(7));
    }

    #[test]
    fn test_require_fallback_absent() {
        let result = require_fallback::<i32>(None);
        assert_eq!(result, Err(Fault::missing_fallback()));
    }
}
