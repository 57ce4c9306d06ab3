//! # Runnables
//!
//! `Runnable0` through `Runnable8` wrap a fallible side effect. They share the
//! input-side operations with functions and add [`Chain::then`], which
//! sequences two runnables of the same shape over the same inputs.
//!
//! [`Output::and_then`] is where a runnable crosses over: the post-transform
//! receives `()` and whatever it returns becomes the result of a function of
//! the same arity.
//!
//! ```
//! use compositional_arity::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&hits);
//! let bump = Runnable1::new(move |n: usize| {
//!     counter.fetch_add(n, Ordering::SeqCst);
//!     Ok(())
//! });
//!
//! let twice = bump.clone().then(bump);
//! twice.run1(5).unwrap();
//! assert_eq!(hits.load(Ordering::SeqCst), 10);
//! ```
//!
//! [`Chain::then`]: crate::capability::Chain::then
//! [`Output::and_then`]: crate::capability::Output::and_then

use std::fmt;
use std::rc::Rc;

use crate::capability::{require_fallback, Arity, Chain, Output, Recover};
use crate::error::Fault;
use crate::function::{
    Curried2, Curried3, Curried4, Curried5, Curried6, Curried7, Function0, Function1, Function2,
    Function3, Function4, Function5, Function6, Function7, Function8,
};
use crate::input::{Input0, Input1};
use crate::transformer::Transformer0;

// ============================================================================
// Runnable0
// ============================================================================

/// A deferred side effect with no inputs.
#[derive(Clone)]
pub struct Runnable0 {
    body: Rc<dyn Fn() -> Result<(), Fault>>,
}

impl fmt::Debug for Runnable0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runnable0")
            .field("arity", &0)
            .finish_non_exhaustive()
    }
}

impl Runnable0 {
    /// Wrap `body` as a runnable.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn() -> Result<(), Fault> + 'static,
    {
        Self {
            body: Rc::new(body),
        }
    }

    /// Lift any zero-input task.
    pub fn from_transformer<X>(transformer: X) -> Self
    where
        X: Transformer0<()> + 'static,
    {
        Self::new(move || transformer.apply0())
    }

    /// Perform the side effect.
    pub fn run0(&self) -> Result<(), Fault> {
        (self.body)()
    }

    /// Hand this runnable to `addend` to build a one-input runnable around it.
    pub fn append<T1: 'static, F>(self, addend: F) -> Runnable1<T1>
    where
        F: FnOnce(Self) -> Runnable1<T1>,
    {
        addend(self)
    }

    /// Accept one input and ignore it.
    pub fn widen<T1: 'static>(self) -> Runnable1<T1> {
        let body = self.body;
        Runnable1::new(move |_: T1| body())
    }
}

impl Arity for Runnable0 {
    const ARITY: usize = 0;
}

impl Input0 for Runnable0 {}

impl Transformer0<()> for Runnable0 {
    fn apply0(&self) -> Result<(), Fault> {
        (self.body)()
    }
}

impl Output for Runnable0 {
    type Value = ();
    type Then<V: 'static> = Function0<V>;

    fn and_then<V: 'static, G>(self, after: G) -> Function0<V>
    where
        G: Fn(()) -> Result<V, Fault> + 'static,
    {
        let body = self.body;
        Function0::new(move || after(body()?))
    }
}

impl Recover for Runnable0 {
    fn handle<H, O>(self, handler: H) -> Self
    where
        H: Fn(Fault) -> O + 'static,
        O: Into<Option<Self>>,
    {
        let body = self.body;
        Self::new(move || match body() {
            Ok(()) => Ok(()),
            Err(fault) => require_fallback::<Self>(handler(fault))?.run0(),
        })
    }
}

impl Chain for Runnable0 {
    fn then(self, after: Self) -> Self {
        let first = self.body;
        let second = after.body;
        Self::new(move || {
            first()?;
            second()
        })
    }
}

// ============================================================================
// Runnable1
// ============================================================================

callable! {
    /// A side effect parameterized by one input.
    Runnable1[T1;](t1) -> ();
    run1, Transformer1::apply1, arity 1
}

impl<T1: 'static> Input1 for Runnable1<T1> {
    type Slot1 = T1;
    type Compose1<V: 'static> = Runnable1<V>;
    type Partial1 = Runnable0;

    fn compose1<V: 'static, G>(self, before: G) -> Runnable1<V>
    where
        G: Fn(V) -> Result<T1, Fault> + 'static,
    {
        let body = self.body;
        Runnable1::new(move |v: V| body(before(v)?))
    }

    fn partial1(self, t1: T1) -> Runnable0
    where
        T1: Clone,
    {
        let body = self.body;
        Runnable0::new(move || body(t1.clone()))
    }
}

output!(Runnable1[t1: T1;] => (), Function1);
recover!(Runnable1[t1: T1;]);
chain!(Runnable1[t1: T1]);
grow!(Runnable1[t1: T1;] => Runnable2[T2]);

// ============================================================================
// Runnable2
// ============================================================================

callable! {
    /// A side effect of two inputs.
    ///
    /// ```
    /// use compositional_arity::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&log);
    /// let record = Runnable2::new(move |k: &'static str, v: i32| {
    ///     sink.lock().map_err(|_| Fault::computation("poisoned"))?.push(format!("{k}={v}"));
    ///     Ok(())
    /// });
    /// record.swap1().run2(1, "x").unwrap();
    /// assert_eq!(*log.lock().unwrap(), vec!["x=1".to_string()]);
    /// ```
    Runnable2[T1, T2;](t1, t2) -> ();
    run2, Transformer2::apply2, arity 2
}

input_level! {
    Input1 for Runnable2[T1, T2;] {
        Slot1 = [] t1: T1 [t2: T2];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable1;
    }
}

input_level! {
    Input2 for Runnable2[T1, T2;] {
        Slot2 = [t1: T1] t2: T2 [];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable1;
        swap1 => Swap1 = [] t1: T1, t2: T2 [];
    }
}

output!(Runnable2[t1: T1, t2: T2;] => (), Function2);
recover!(Runnable2[t1: T1, t2: T2;]);
chain!(Runnable2[t1: T1, t2: T2]);
grow!(Runnable2[t1: T1, t2: T2;] => Runnable3[T3]);

impl<T1: 'static, T2: 'static> Runnable2<T1, T2> {
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Function1<T1, Runnable1<T2>>
    where
        T1: Clone,
    {
        self.curry1()
    }

    curry_split!(
        curry1: Function1[t1: T1] => Runnable1[T2] []
    );
}

// ============================================================================
// Runnable3
// ============================================================================

callable! {
    /// A side effect of three inputs.
    Runnable3[T1, T2, T3;](t1, t2, t3) -> ();
    run3, Transformer3::apply3, arity 3
}

input_level! {
    Input1 for Runnable3[T1, T2, T3;] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable2;
    }
}

input_level! {
    Input2 for Runnable3[T1, T2, T3;] {
        Slot2 = [t1: T1] t2: T2 [t3: T3];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable2;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3];
    }
}

input_level! {
    Input3 for Runnable3[T1, T2, T3;] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [];
        compose3 => Compose3;
        partial3 => Partial3 in Runnable2;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [];
    }
}

output!(Runnable3[t1: T1, t2: T2, t3: T3;] => (), Function3);
recover!(Runnable3[t1: T1, t2: T2, t3: T3;]);
chain!(Runnable3[t1: T1, t2: T2, t3: T3]);
grow!(Runnable3[t1: T1, t2: T2, t3: T3;] => Runnable4[T4]);

impl<T1: 'static, T2: 'static, T3: 'static> Runnable3<T1, T2, T3> {
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Curried2<T1, T2, Runnable1<T3>>
    where
        T1: Clone,
        T2: Clone,
    {
        self.curry1()
            .and_then(|rest: Runnable2<T2, T3>| Ok(rest.curry()))
    }

    curry_split!(
        curry1: Function1[t1: T1] => Runnable2[T2, T3] []
    );

    curry_split!(
        curry2: Function2[t1: T1, t2: T2] => Runnable1[T3] []
    );
}

// ============================================================================
// Runnable4
// ============================================================================

callable! {
    /// A side effect of four inputs.
    Runnable4[T1, T2, T3, T4;](t1, t2, t3, t4) -> ();
    run4, Transformer4::apply4, arity 4
}

input_level! {
    Input1 for Runnable4[T1, T2, T3, T4;] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable3;
    }
}

input_level! {
    Input2 for Runnable4[T1, T2, T3, T4;] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable3;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4];
    }
}

input_level! {
    Input3 for Runnable4[T1, T2, T3, T4;] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4];
        compose3 => Compose3;
        partial3 => Partial3 in Runnable3;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4];
    }
}

input_level! {
    Input4 for Runnable4[T1, T2, T3, T4;] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [];
        compose4 => Compose4;
        partial4 => Partial4 in Runnable3;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [];
    }
}

output!(Runnable4[t1: T1, t2: T2, t3: T3, t4: T4;] => (), Function4);
recover!(Runnable4[t1: T1, t2: T2, t3: T3, t4: T4;]);
chain!(Runnable4[t1: T1, t2: T2, t3: T3, t4: T4]);
grow!(Runnable4[t1: T1, t2: T2, t3: T3, t4: T4;] => Runnable5[T5]);

impl<T1: 'static, T2: 'static, T3: 'static, T4: 'static> Runnable4<T1, T2, T3, T4> {
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Curried3<T1, T2, T3, Runnable1<T4>>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        self.curry1()
            .and_then(|rest: Runnable3<T2, T3, T4>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining three later.
        curry1: Function1[t1: T1] => Runnable3[T2, T3, T4] []
    );

    curry_split!(
        /// Take the first two inputs now and the remaining two later.
        curry2: Function2[t1: T1, t2: T2] => Runnable2[T3, T4] []
    );

    curry_split!(
        /// Take the first three inputs now and the last one later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Runnable1[T4] []
    );
}

// ============================================================================
// Runnable5
// ============================================================================

callable! {
    /// A side effect of five inputs.
    Runnable5[T1, T2, T3, T4, T5;](t1, t2, t3, t4, t5) -> ();
    run5, Transformer5::apply5, arity 5
}

input_level! {
    Input1 for Runnable5[T1, T2, T3, T4, T5;] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable4;
    }
}

input_level! {
    Input2 for Runnable5[T1, T2, T3, T4, T5;] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable4;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5];
    }
}

input_level! {
    Input3 for Runnable5[T1, T2, T3, T4, T5;] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5];
        compose3 => Compose3;
        partial3 => Partial3 in Runnable4;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5];
    }
}

input_level! {
    Input4 for Runnable5[T1, T2, T3, T4, T5;] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5];
        compose4 => Compose4;
        partial4 => Partial4 in Runnable4;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5];
    }
}

input_level! {
    Input5 for Runnable5[T1, T2, T3, T4, T5;] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [];
        compose5 => Compose5;
        partial5 => Partial5 in Runnable4;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [];
    }
}

output!(Runnable5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5;] => (), Function5);
recover!(Runnable5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5;]);
chain!(Runnable5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5]);
grow!(Runnable5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5;] => Runnable6[T6]);

impl<T1, T2, T3, T4, T5> Runnable5<T1, T2, T3, T4, T5>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
{
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Curried4<T1, T2, T3, T4, Runnable1<T5>>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
    {
        self.curry1()
            .and_then(|rest: Runnable4<T2, T3, T4, T5>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining four later.
        curry1: Function1[t1: T1] => Runnable4[T2, T3, T4, T5] []
    );

    curry_split!(
        /// Take the first two inputs now and the remaining three later.
        curry2: Function2[t1: T1, t2: T2] => Runnable3[T3, T4, T5] []
    );

    curry_split!(
        /// Take the first three inputs now and the remaining two later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Runnable2[T4, T5] []
    );

    curry_split!(
        /// Take the first four inputs now and the last one later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Runnable1[T5] []
    );
}

// ============================================================================
// Runnable6
// ============================================================================

callable! {
    /// A side effect of six inputs.
    Runnable6[T1, T2, T3, T4, T5, T6;](t1, t2, t3, t4, t5, t6) -> ();
    run6, Transformer6::apply6, arity 6
}

input_level! {
    Input1 for Runnable6[T1, T2, T3, T4, T5, T6;] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5, t6: T6];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable5;
    }
}

input_level! {
    Input2 for Runnable6[T1, T2, T3, T4, T5, T6;] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable5;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6];
    }
}

input_level! {
    Input3 for Runnable6[T1, T2, T3, T4, T5, T6;] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5, t6: T6];
        compose3 => Compose3;
        partial3 => Partial3 in Runnable5;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5, t6: T6];
    }
}

input_level! {
    Input4 for Runnable6[T1, T2, T3, T4, T5, T6;] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5, t6: T6];
        compose4 => Compose4;
        partial4 => Partial4 in Runnable5;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5, t6: T6];
    }
}

input_level! {
    Input5 for Runnable6[T1, T2, T3, T4, T5, T6;] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [t6: T6];
        compose5 => Compose5;
        partial5 => Partial5 in Runnable5;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [t6: T6];
    }
}

input_level! {
    Input6 for Runnable6[T1, T2, T3, T4, T5, T6;] {
        Slot6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6 [];
        compose6 => Compose6;
        partial6 => Partial6 in Runnable5;
        swap5 => Swap5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5, t6: T6 [];
    }
}

output!(Runnable6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6;] => (), Function6);
recover!(Runnable6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6;]);
chain!(Runnable6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6]);
grow!(Runnable6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6;] => Runnable7[T7]);

impl<T1, T2, T3, T4, T5, T6> Runnable6<T1, T2, T3, T4, T5, T6>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
{
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Curried5<T1, T2, T3, T4, T5, Runnable1<T6>>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
        T5: Clone,
    {
        self.curry1()
            .and_then(|rest: Runnable5<T2, T3, T4, T5, T6>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining five later.
        curry1: Function1[t1: T1] => Runnable5[T2, T3, T4, T5, T6] []
    );

    curry_split!(
        /// Take the first two inputs now and the remaining four later.
        curry2: Function2[t1: T1, t2: T2] => Runnable4[T3, T4, T5, T6] []
    );

    curry_split!(
        /// Take the first three inputs now and the remaining three later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Runnable3[T4, T5, T6] []
    );

    curry_split!(
        /// Take the first four inputs now and the remaining two later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Runnable2[T5, T6] []
    );

    curry_split!(
        /// Take the first five inputs now and the last one later.
        curry5: Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] => Runnable1[T6] []
    );
}

// ============================================================================
// Runnable7
// ============================================================================

callable! {
    /// A side effect of seven inputs.
    Runnable7[T1, T2, T3, T4, T5, T6, T7;](t1, t2, t3, t4, t5, t6, t7) -> ();
    run7, Transformer7::apply7, arity 7
}

input_level! {
    Input1 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable6;
    }
}

input_level! {
    Input2 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable6;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7];
    }
}

input_level! {
    Input3 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7];
        compose3 => Compose3;
        partial3 => Partial3 in Runnable6;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7];
    }
}

input_level! {
    Input4 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5, t6: T6, t7: T7];
        compose4 => Compose4;
        partial4 => Partial4 in Runnable6;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5, t6: T6, t7: T7];
    }
}

input_level! {
    Input5 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [t6: T6, t7: T7];
        compose5 => Compose5;
        partial5 => Partial5 in Runnable6;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [t6: T6, t7: T7];
    }
}

input_level! {
    Input6 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6 [t7: T7];
        compose6 => Compose6;
        partial6 => Partial6 in Runnable6;
        swap5 => Swap5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5, t6: T6 [t7: T7];
    }
}

input_level! {
    Input7 for Runnable7[T1, T2, T3, T4, T5, T6, T7;] {
        Slot7 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] t7: T7 [];
        compose7 => Compose7;
        partial7 => Partial7 in Runnable6;
        swap6 => Swap6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6, t7: T7 [];
    }
}

output!(Runnable7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7;] => (), Function7);
recover!(Runnable7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7;]);
chain!(Runnable7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7]);
grow!(Runnable7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7;] => Runnable8[T8]);

impl<T1, T2, T3, T4, T5, T6, T7> Runnable7<T1, T2, T3, T4, T5, T6, T7>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    T7: 'static,
{
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Curried6<T1, T2, T3, T4, T5, T6, Runnable1<T7>>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
        T5: Clone,
        T6: Clone,
    {
        self.curry1()
            .and_then(|rest: Runnable6<T2, T3, T4, T5, T6, T7>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining six later.
        curry1: Function1[t1: T1] => Runnable6[T2, T3, T4, T5, T6, T7] []
    );

    curry_split!(
        /// Take the first two inputs now and the remaining five later.
        curry2: Function2[t1: T1, t2: T2] => Runnable5[T3, T4, T5, T6, T7] []
    );

    curry_split!(
        /// Take the first three inputs now and the remaining four later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Runnable4[T4, T5, T6, T7] []
    );

    curry_split!(
        /// Take the first four inputs now and the remaining three later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Runnable3[T5, T6, T7] []
    );

    curry_split!(
        /// Take the first five inputs now and the remaining two later.
        curry5: Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] => Runnable2[T6, T7] []
    );

    curry_split!(
        /// Take the first six inputs now and the last one later.
        curry6: Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] => Runnable1[T7] []
    );
}

// ============================================================================
// Runnable8
// ============================================================================

callable! {
    /// A side effect of eight inputs.
    Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;](t1, t2, t3, t4, t5, t6, t7, t8) -> ();
    run8, Transformer8::apply8, arity 8
}

input_level! {
    Input1 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
        compose1 => Compose1;
        partial1 => Partial1 in Runnable7;
    }
}

input_level! {
    Input2 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
        compose2 => Compose2;
        partial2 => Partial2 in Runnable7;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input3 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
        compose3 => Compose3;
        partial3 => Partial3 in Runnable7;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input4 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5, t6: T6, t7: T7, t8: T8];
        compose4 => Compose4;
        partial4 => Partial4 in Runnable7;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5, t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input5 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [t6: T6, t7: T7, t8: T8];
        compose5 => Compose5;
        partial5 => Partial5 in Runnable7;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input6 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6 [t7: T7, t8: T8];
        compose6 => Compose6;
        partial6 => Partial6 in Runnable7;
        swap5 => Swap5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5, t6: T6 [t7: T7, t8: T8];
    }
}

input_level! {
    Input7 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot7 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] t7: T7 [t8: T8];
        compose7 => Compose7;
        partial7 => Partial7 in Runnable7;
        swap6 => Swap6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6, t7: T7 [t8: T8];
    }
}

input_level! {
    Input8 for Runnable8[T1, T2, T3, T4, T5, T6, T7, T8;] {
        Slot8 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7] t8: T8 [];
        compose8 => Compose8;
        partial8 => Partial8 in Runnable7;
        swap7 => Swap7 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] t7: T7, t8: T8 [];
    }
}

output!(
    Runnable8[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8;] => (), Function8
);
recover!(Runnable8[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8;]);
chain!(Runnable8[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8]);

impl<T1, T2, T3, T4, T5, T6, T7, T8> Runnable8<T1, T2, T3, T4, T5, T6, T7, T8>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    T7: 'static,
    T8: 'static,
{
    /// Curry into one-input functions ending in a `Runnable1`.
    pub fn curry(self) -> Curried7<T1, T2, T3, T4, T5, T6, T7, Runnable1<T8>>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
        T5: Clone,
        T6: Clone,
        T7: Clone,
    {
        self.curry1()
            .and_then(|rest: Runnable7<T2, T3, T4, T5, T6, T7, T8>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining seven later.
        curry1: Function1[t1: T1] => Runnable7[T2, T3, T4, T5, T6, T7, T8] []
    );

    curry_split!(
        /// Take the first two inputs now and the remaining six later.
        curry2: Function2[t1: T1, t2: T2] => Runnable6[T3, T4, T5, T6, T7, T8] []
    );

    curry_split!(
        /// Take the first three inputs now and the remaining five later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Runnable5[T4, T5, T6, T7, T8] []
    );

    curry_split!(
        /// Take the first four inputs now and the remaining four later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Runnable4[T5, T6, T7, T8] []
    );

    curry_split!(
        /// Take the first five inputs now and the remaining three later.
        curry5: Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] => Runnable3[T6, T7, T8] []
    );

    curry_split!(
        /// Take the first six inputs now and the remaining two later.
        curry6: Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] => Runnable2[T7, T8] []
    );

    curry_split!(
        /// Take the first seven inputs now and the last one later.
        curry7: Function7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7]
            => Runnable1[T8] []
    );
}
