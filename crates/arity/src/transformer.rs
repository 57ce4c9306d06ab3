//! # Transformers and Tasks
//!
//! A transformer is the bare computation: `N` inputs in, one result out, with
//! faults reported through [`Fault`]. Any closure of the right shape already
//! is one:
//!
//! ```
//! use compositional_arity::transformer::Transformer2;
//!
//! let add = |a: i32, b: i32| Ok(a + b);
//! assert_eq!(add.apply2(3, 4), Ok(7));
//! ```
//!
//! A task is a transformer whose result is `()`; it exists only for its side
//! effects. Every `TransformerN<.., ()>` is automatically a `TaskN`.
//!
//! ## Widening
//!
//! A transformer of arity `N` can stand in for one of arity `N + 1` that
//! ignores its last input. The adaptation is explicit: [`Widen`] wraps the
//! lower-arity transformer and implements the higher-arity trait. Because
//! tasks are blanket-implemented, widening a task yields a task.
//!
//! ```
//! use compositional_arity::transformer::{Task1, Transformer0};
//!
//! let ping = || Ok(());
//! let widened = ping.widen::<&str>();
//! assert_eq!(widened.run1("ignored"), Ok(()));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::Fault;

// ============================================================================
// Widening adapter
// ============================================================================

/// A transformer that accepts one extra trailing input of type `X` and drops it.
pub struct Widen<T, X> {
    inner: T,
    _extra: PhantomData<fn(X)>,
}

impl<T, X> Widen<T, X> {
    /// Wrap a transformer so it accepts one more (ignored) input.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            _extra: PhantomData,
        }
    }

    /// Get a reference to the wrapped transformer.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap and return the wrapped transformer.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Clone, X> Clone for Widen<T, X> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: fmt::Debug, X> fmt::Debug for Widen<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widen").field("inner", &self.inner).finish()
    }
}

// ============================================================================
// Transformers
// ============================================================================

/// A computation with no inputs.
pub trait Transformer0<R> {
    fn apply0(&self) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, R> Transformer0<R> for F
where
    F: Fn() -> Result<R, Fault>,
{
    fn apply0(&self) -> Result<R, Fault> {
        self()
    }
}

/// A computation of one input.
pub trait Transformer1<T1, R> {
    fn apply1(&self, t1: T1) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, R> Transformer1<T1, R> for F
where
    F: Fn(T1) -> Result<R, Fault>,
{
    fn apply1(&self, t1: T1) -> Result<R, Fault> {
        self(t1)
    }
}

impl<T, X, R> Transformer1<X, R> for Widen<T, X>
where
    T: Transformer0<R>,
{
    fn apply1(&self, _: X) -> Result<R, Fault> {
        self.inner.apply0()
    }
}

/// A computation of 2 inputs.
pub trait Transformer2<T1, T2, R> {
    fn apply2(&self, t1: T1, t2: T2) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, T2, R> Transformer2<T1, T2, R> for F
where
    F: Fn(T1, T2) -> Result<R, Fault>,
{
    fn apply2(&self, t1: T1, t2: T2) -> Result<R, Fault> {
        self(t1, t2)
    }
}

impl<T, T1, X, R> Transformer2<T1, X, R> for Widen<T, X>
where
    T: Transformer1<T1, R>,
{
    fn apply2(&self, t1: T1, _: X) -> Result<R, Fault> {
        self.inner.apply1(t1)
    }
}

/// A computation of 3 inputs.
pub trait Transformer3<T1, T2, T3, R> {
    fn apply3(&self, t1: T1, t2: T2, t3: T3) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, T2, T3, R> Transformer3<T1, T2, T3, R> for F
where
    F: Fn(T1, T2, T3) -> Result<R, Fault>,
{
    fn apply3(&self, t1: T1, t2: T2, t3: T3) -> Result<R, Fault> {
        self(t1, t2, t3)
    }
}

impl<T, T1, T2, X, R> Transformer3<T1, T2, X, R> for Widen<T, X>
where
    T: Transformer2<T1, T2, R>,
{
    fn apply3(&self, t1: T1, t2: T2, _: X) -> Result<R, Fault> {
        self.inner.apply2(t1, t2)
    }
}

/// A computation of 4 inputs.
pub trait Transformer4<T1, T2, T3, T4, R> {
    fn apply4(&self, t1: T1, t2: T2, t3: T3, t4: T4) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, T2, T3, T4, R> Transformer4<T1, T2, T3, T4, R> for F
where
    F: Fn(T1, T2, T3, T4) -> Result<R, Fault>,
{
    fn apply4(&self, t1: T1, t2: T2, t3: T3, t4: T4) -> Result<R, Fault> {
        self(t1, t2, t3, t4)
    }
}

impl<T, T1, T2, T3, X, R> Transformer4<T1, T2, T3, X, R> for Widen<T, X>
where
    T: Transformer3<T1, T2, T3, R>,
{
    fn apply4(&self, t1: T1, t2: T2, t3: T3, _: X) -> Result<R, Fault> {
        self.inner.apply3(t1, t2, t3)
    }
}

/// A computation of 5 inputs.
pub trait Transformer5<T1, T2, T3, T4, T5, R> {
    fn apply5(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, T2, T3, T4, T5, R> Transformer5<T1, T2, T3, T4, T5, R> for F
where
    F: Fn(T1, T2, T3, T4, T5) -> Result<R, Fault>,
{
    fn apply5(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5) -> Result<R, Fault> {
        self(t1, t2, t3, t4, t5)
    }
}

impl<T, T1, T2, T3, T4, X, R> Transformer5<T1, T2, T3, T4, X, R> for Widen<T, X>
where
    T: Transformer4<T1, T2, T3, T4, R>,
{
    fn apply5(&self, t1: T1, t2: T2, t3: T3, t4: T4, _: X) -> Result<R, Fault> {
        self.inner.apply4(t1, t2, t3, t4)
    }
}

/// A computation of 6 inputs.
pub trait Transformer6<T1, T2, T3, T4, T5, T6, R> {
    fn apply6(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, T2, T3, T4, T5, T6, R> Transformer6<T1, T2, T3, T4, T5, T6, R> for F
where
    F: Fn(T1, T2, T3, T4, T5, T6) -> Result<R, Fault>,
{
    fn apply6(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6) -> Result<R, Fault> {
        self(t1, t2, t3, t4, t5, t6)
    }
}

impl<T, T1, T2, T3, T4, T5, X, R> Transformer6<T1, T2, T3, T4, T5, X, R> for Widen<T, X>
where
    T: Transformer5<T1, T2, T3, T4, T5, R>,
{
    fn apply6(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, _: X) -> Result<R, Fault> {
        self.inner.apply5(t1, t2, t3, t4, t5)
    }
}

/// A computation of 7 inputs.
pub trait Transformer7<T1, T2, T3, T4, T5, T6, T7, R> {
    fn apply7(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7) -> Result<R, Fault>;

    /// Accept one more trailing input and ignore it.
    fn widen<X>(self) -> Widen<Self, X>
    where
        Self: Sized,
    {
        Widen::new(self)
    }
}

impl<F, T1, T2, T3, T4, T5, T6, T7, R> Transformer7<T1, T2, T3, T4, T5, T6, T7, R> for F
where
    F: Fn(T1, T2, T3, T4, T5, T6, T7) -> Result<R, Fault>,
{
    fn apply7(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7) -> Result<R, Fault> {
        self(t1, t2, t3, t4, t5, t6, t7)
    }
}

impl<T, T1, T2, T3, T4, T5, T6, X, R> Transformer7<T1, T2, T3, T4, T5, T6, X, R> for Widen<T, X>
where
    T: Transformer6<T1, T2, T3, T4, T5, T6, R>,
{
    fn apply7(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, _: X) -> Result<R, Fault> {
        self.inner.apply6(t1, t2, t3, t4, t5, t6)
    }
}

/// A computation of 8 inputs.
pub trait Transformer8<T1, T2, T3, T4, T5, T6, T7, T8, R> {
    #[allow(clippy::too_many_arguments)]
    fn apply8(
        &self,
        t1: T1,
        t2: T2,
        t3: T3,
        t4: T4,
        t5: T5,
        t6: T6,
        t7: T7,
        t8: T8,
    ) -> Result<R, Fault>;
}

impl<F, T1, T2, T3, T4, T5, T6, T7, T8, R> Transformer8<T1, T2, T3, T4, T5, T6, T7, T8, R> for F
where
    F: Fn(T1, T2, T3, T4, T5, T6, T7, T8) -> Result<R, Fault>,
{
    #[allow(clippy::too_many_arguments)]
    fn apply8(
        &self,
        t1: T1,
        t2: T2,
        t3: T3,
        t4: T4,
        t5: T5,
        t6: T6,
        t7: T7,
        t8: T8,
    ) -> Result<R, Fault> {
        self(t1, t2, t3, t4, t5, t6, t7, t8)
    }
}

impl<T, T1, T2, T3, T4, T5, T6, T7, X, R> Transformer8<T1, T2, T3, T4, T5, T6, T7, X, R>
    for Widen<T, X>
where
    T: Transformer7<T1, T2, T3, T4, T5, T6, T7, R>,
{
    #[allow(clippy::too_many_arguments)]
    fn apply8(
        &self,
        t1: T1,
        t2: T2,
        t3: T3,
        t4: T4,
        t5: T5,
        t6: T6,
        t7: T7,
        _: X,
    ) -> Result<R, Fault> {
        self.inner.apply7(t1, t2, t3, t4, t5, t6, t7)
    }
}

// ============================================================================
// Tasks
// ============================================================================

/// A side-effect-only computation with no inputs.
pub trait Task0: Transformer0<()> {
    fn run0(&self) -> Result<(), Fault> {
        self.apply0()
    }
}

impl<K> Task0 for K
where
    K: Transformer0<()>,
{
}

/// A side-effect-only computation of 1 input.
pub trait Task1<T1>: Transformer1<T1, ()> {
    fn run1(&self, t1: T1) -> Result<(), Fault> {
        self.apply1(t1)
    }
}

impl<K, T1> Task1<T1> for K
where
    K: Transformer1<T1, ()>,
{
}

/// A side-effect-only computation of 2 inputs.
pub trait Task2<T1, T2>: Transformer2<T1, T2, ()> {
    fn run2(&self, t1: T1, t2: T2) -> Result<(), Fault> {
        self.apply2(t1, t2)
    }
}

impl<K, T1, T2> Task2<T1, T2> for K
where
    K: Transformer2<T1, T2, ()>,
{
}

/// A side-effect-only computation of 3 inputs.
pub trait Task3<T1, T2, T3>: Transformer3<T1, T2, T3, ()> {
    fn run3(&self, t1: T1, t2: T2, t3: T3) -> Result<(), Fault> {
        self.apply3(t1, t2, t3)
    }
}

impl<K, T1, T2, T3> Task3<T1, T2, T3> for K
where
    K: Transformer3<T1, T2, T3, ()>,
{
}

/// A side-effect-only computation of 4 inputs.
pub trait Task4<T1, T2, T3, T4>: Transformer4<T1, T2, T3, T4, ()> {
    fn run4(&self, t1: T1, t2: T2, t3: T3, t4: T4) -> Result<(), Fault> {
        self.apply4(t1, t2, t3, t4)
    }
}

impl<K, T1, T2, T3, T4> Task4<T1, T2, T3, T4> for K
where
    K: Transformer4<T1, T2, T3, T4, ()>,
{
}

/// A side-effect-only computation of 5 inputs.
pub trait Task5<T1, T2, T3, T4, T5>: Transformer5<T1, T2, T3, T4, T5, ()> {
    fn run5(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5) -> Result<(), Fault> {
        self.apply5(t1, t2, t3, t4, t5)
    }
}

impl<K, T1, T2, T3, T4, T5> Task5<T1, T2, T3, T4, T5> for K
where
    K: Transformer5<T1, T2, T3, T4, T5, ()>,
{
}

/// A side-effect-only computation of 6 inputs.
pub trait Task6<T1, T2, T3, T4, T5, T6>: Transformer6<T1, T2, T3, T4, T5, T6, ()> {
    fn run6(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6) -> Result<(), Fault> {
        self.apply6(t1, t2, t3, t4, t5, t6)
    }
}

impl<K, T1, T2, T3, T4, T5, T6> Task6<T1, T2, T3, T4, T5, T6> for K
where
    K: Transformer6<T1, T2, T3, T4, T5, T6, ()>,
{
}

/// A side-effect-only computation of 7 inputs.
pub trait Task7<T1, T2, T3, T4, T5, T6, T7>:
    Transformer7<T1, T2, T3, T4, T5, T6, T7, ()>
{
    fn run7(&self, t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7) -> Result<(), Fault> {
        self.apply7(t1, t2, t3, t4, t5, t6, t7)
    }
}

impl<K, T1, T2, T3, T4, T5, T6, T7> Task7<T1, T2, T3, T4, T5, T6, T7> for K
where
    K: Transformer7<T1, T2, T3, T4, T5, T6, T7, ()>,
{
}

/// A side-effect-only computation of 8 inputs.
pub trait Task8<T1, T2, T3, T4, T5, T6, T7, T8>:
    Transformer8<T1, T2, T3, T4, T5, T6, T7, T8, ()>
{
    #[allow(clippy::too_many_arguments)]
    fn run8(
        &self,
        t1: T1,
        t2: T2,
        t3: T3,
        t4: T4,
        t5: T5,
        t6: T6,
        t7: T7,
        t8: T8,
    ) -> Result<(), Fault> {
        self.apply8(t1, t2, t3, t4, t5, t6, t7, t8)
    }
}

impl<K, T1, T2, T3, T4, T5, T6, T7, T8> Task8<T1, T2, T3, T4, T5, T6, T7, T8> for K
where
    K: Transformer8<T1, T2, T3, T4, T5, T6, T7, T8, ()>,
{
}
