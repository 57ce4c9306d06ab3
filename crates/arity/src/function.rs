//! # Functions
//!
//! `Function0` through `Function8` wrap a fallible computation producing an
//! `R`. A function value is immutable and cheap to clone: the body lives
//! behind an `Rc`, and every combinator consumes its receiver and hands back
//! a new value wrapping it.
//!
//! Beyond the input-side operations (`composeK`, `swapK`, `partialK`), a
//! function of arity `N` offers:
//!
//! - [`Output::and_then`]: post-process the result.
//! - [`Recover::handle`]: swap in a fallback when the body faults.
//! - [`Consume::consume`]: discard the result, yielding a `RunnableN`.
//! - `append`/`widen` (`N < 8`): grow to `FunctionN+1`.
//! - `curry`/`curryK` (`N >= 2`): split the inputs into nested functions.
//!
//! ## Curry
//!
//! ```
//! use compositional_arity::prelude::*;
//!
//! let sum = Function3::new(|a: i32, b: i32, c: i32| Ok(a + b + c));
//! let curried = sum.curry();
//! let result = curried.apply1(1).and_then(|g| g.apply1(2)).and_then(|h| h.apply1(3));
//! assert_eq!(result, Ok(6));
//! ```
//!
//! [`Output::and_then`]: crate::capability::Output::and_then
//! [`Recover::handle`]: crate::capability::Recover::handle
//! [`Consume::consume`]: crate::capability::Consume::consume

use crate::capability::{Consume, Output};
use crate::input::Input1;
use crate::runnable::{
    Runnable0, Runnable1, Runnable2, Runnable3, Runnable4, Runnable5, Runnable6, Runnable7,
    Runnable8,
};

/// A two-input function curried into nested one-input functions.
pub type Curried2<T1, T2, R> = Function1<T1, Function1<T2, R>>;
pub type Curried3<T1, T2, T3, R> = Function1<T1, Curried2<T2, T3, R>>;
pub type Curried4<T1, T2, T3, T4, R> = Function1<T1, Curried3<T2, T3, T4, R>>;
pub type Curried5<T1, T2, T3, T4, T5, R> = Function1<T1, Curried4<T2, T3, T4, T5, R>>;
pub type Curried6<T1, T2, T3, T4, T5, T6, R> = Function1<T1, Curried5<T2, T3, T4, T5, T6, R>>;
pub type Curried7<T1, T2, T3, T4, T5, T6, T7, R> =
    Function1<T1, Curried6<T2, T3, T4, T5, T6, T7, R>>;
pub type Curried8<T1, T2, T3, T4, T5, T6, T7, T8, R> =
    Function1<T1, Curried7<T2, T3, T4, T5, T6, T7, T8, R>>;

// ============================================================================
// Function0
// ============================================================================

callable! {
    /// A deferred computation producing an `R`.
    ///
    /// The only input-side capability at this arity is the arity itself;
    /// there is no slot to compose, swap or fix.
    Function0[; R]() -> R;
    apply0, Transformer0::apply0, arity 0
}

output!(Function0[; R] => R, Function0);
recover!(Function0[; R]);
grow!(Function0[; R] => Function1[T1]);

impl<R: 'static> Consume for Function0<R> {
    type Consumed = Runnable0;

    fn consume(self) -> Runnable0 {
        let body = self.body;
        Runnable0::new(move || body().map(|_| ()))
    }
}

// ============================================================================
// Function1
// ============================================================================

callable! {
    /// A function of one input.
    ///
    /// ```
    /// use compositional_arity::prelude::*;
    ///
    /// let parse = Function1::new(|s: String| s.trim().parse::<i32>().map_err(Fault::from_error));
    /// assert_eq!(parse.apply1(" 42 ".to_string()), Ok(42));
    /// assert!(parse.apply1("forty-two".to_string()).is_err());
    /// ```
    Function1[T1; R](t1) -> R;
    apply1, Transformer1::apply1, arity 1
}

input_level! {
    Input1 for Function1[T1; R] {
        Slot1 = [] t1: T1 [];
        compose1 => Compose1;
        partial1 => Partial1 in Function0;
    }
}

output!(Function1[t1: T1; R] => R, Function1);
recover!(Function1[t1: T1; R]);
consume!(Function1[t1: T1; R] => Runnable1);
grow!(Function1[t1: T1; R] => Function2[T2]);

// ============================================================================
// Function2
// ============================================================================

callable! {
    /// A function of two inputs.
    ///
    /// ```
    /// use compositional_arity::prelude::*;
    ///
    /// let sub = Function2::new(|a: i32, b: i32| Ok(a - b));
    /// assert_eq!(sub.clone().swap1().apply2(3, 10), Ok(7));
    /// assert_eq!(sub.partial1(10).apply1(3), Ok(7));
    /// ```
    Function2[T1, T2; R](t1, t2) -> R;
    apply2, Transformer2::apply2, arity 2
}

input_level! {
    Input1 for Function2[T1, T2; R] {
        Slot1 = [] t1: T1 [t2: T2];
        compose1 => Compose1;
        partial1 => Partial1 in Function1;
    }
}

input_level! {
    Input2 for Function2[T1, T2; R] {
        Slot2 = [t1: T1] t2: T2 [];
        compose2 => Compose2;
        partial2 => Partial2 in Function1;
        swap1 => Swap1 = [] t1: T1, t2: T2 [];
    }
}

output!(Function2[t1: T1, t2: T2; R] => R, Function2);
recover!(Function2[t1: T1, t2: T2; R]);
consume!(Function2[t1: T1, t2: T2; R] => Runnable2);
grow!(Function2[t1: T1, t2: T2; R] => Function3[T3]);

impl<T1: 'static, T2: 'static, R: 'static> Function2<T1, T2, R> {
    /// Curry into a chain of one-input functions.
    ///
    /// At this arity it coincides with [`Function2::curry1`].
    pub fn curry(self) -> Curried2<T1, T2, R>
    where
        T1: Clone,
    {
        self.curry1()
    }

    curry_split!(
        /// Take the first input now and the second later.
        curry1: Function1[t1: T1] => Function1[T2] [R]
    );
}

// ============================================================================
// Function3
// ============================================================================

callable! {
    /// A function of three inputs.
    ///
    /// ```
    /// use compositional_arity::prelude::*;
    ///
    /// let f = Function3::new(|a: i32, b: i32, c: i32| Ok(a * b + c));
    /// assert_eq!(f.partial2(5).apply2(2, 3), Ok(13));
    /// ```
    Function3[T1, T2, T3; R](t1, t2, t3) -> R;
    apply3, Transformer3::apply3, arity 3
}

input_level! {
    Input1 for Function3[T1, T2, T3; R] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3];
        compose1 => Compose1;
        partial1 => Partial1 in Function2;
    }
}

input_level! {
    Input2 for Function3[T1, T2, T3; R] {
        Slot2 = [t1: T1] t2: T2 [t3: T3];
        compose2 => Compose2;
        partial2 => Partial2 in Function2;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3];
    }
}

input_level! {
    Input3 for Function3[T1, T2, T3; R] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [];
        compose3 => Compose3;
        partial3 => Partial3 in Function2;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [];
    }
}

output!(Function3[t1: T1, t2: T2, t3: T3; R] => R, Function3);
recover!(Function3[t1: T1, t2: T2, t3: T3; R]);
consume!(Function3[t1: T1, t2: T2, t3: T3; R] => Runnable3);
grow!(Function3[t1: T1, t2: T2, t3: T3; R] => Function4[T4]);

impl<T1: 'static, T2: 'static, T3: 'static, R: 'static> Function3<T1, T2, T3, R> {
    /// Curry into a chain of one-input functions.
    pub fn curry(self) -> Curried3<T1, T2, T3, R>
    where
        T1: Clone,
        T2: Clone,
    {
        self.curry1()
            .and_then(|rest: Function2<T2, T3, R>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining two later.
        curry1: Function1[t1: T1] => Function2[T2, T3] [R]
    );

    curry_split!(
        /// Take the first two inputs now and the last one later.
        curry2: Function2[t1: T1, t2: T2] => Function1[T3] [R]
    );
}

// ============================================================================
// Function4
// ============================================================================

callable! {
    /// A function of four inputs.
    Function4[T1, T2, T3, T4; R](t1, t2, t3, t4) -> R;
    apply4, Transformer4::apply4, arity 4
}

input_level! {
    Input1 for Function4[T1, T2, T3, T4; R] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4];
        compose1 => Compose1;
        partial1 => Partial1 in Function3;
    }
}

input_level! {
    Input2 for Function4[T1, T2, T3, T4; R] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4];
        compose2 => Compose2;
        partial2 => Partial2 in Function3;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4];
    }
}

input_level! {
    Input3 for Function4[T1, T2, T3, T4; R] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4];
        compose3 => Compose3;
        partial3 => Partial3 in Function3;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4];
    }
}

input_level! {
    Input4 for Function4[T1, T2, T3, T4; R] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [];
        compose4 => Compose4;
        partial4 => Partial4 in Function3;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [];
    }
}

output!(Function4[t1: T1, t2: T2, t3: T3, t4: T4; R] => R, Function4);
recover!(Function4[t1: T1, t2: T2, t3: T3, t4: T4; R]);
consume!(Function4[t1: T1, t2: T2, t3: T3, t4: T4; R] => Runnable4);
grow!(Function4[t1: T1, t2: T2, t3: T3, t4: T4; R] => Function5[T5]);

impl<T1: 'static, T2: 'static, T3: 'static, T4: 'static, R: 'static> Function4<T1, T2, T3, T4, R> {
    /// Curry into a chain of one-input functions.
    ///
    /// Every intermediate function clones the inputs it has already seen, so
    /// a partially applied chain can be invoked any number of times.
    pub fn curry(self) -> Curried4<T1, T2, T3, T4, R>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        self.curry1()
            .and_then(|rest: Function3<T2, T3, T4, R>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining three later.
        curry1: Function1[t1: T1] => Function3[T2, T3, T4] [R]
    );

    curry_split!(
        /// Take the first two inputs now and the remaining two later.
        curry2: Function2[t1: T1, t2: T2] => Function2[T3, T4] [R]
    );

    curry_split!(
        /// Take the first three inputs now and the last one later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Function1[T4] [R]
    );
}

// ============================================================================
// Function5
// ============================================================================

callable! {
    /// A function of five inputs.
    Function5[T1, T2, T3, T4, T5; R](t1, t2, t3, t4, t5) -> R;
    apply5, Transformer5::apply5, arity 5
}

input_level! {
    Input1 for Function5[T1, T2, T3, T4, T5; R] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5];
        compose1 => Compose1;
        partial1 => Partial1 in Function4;
    }
}

input_level! {
    Input2 for Function5[T1, T2, T3, T4, T5; R] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5];
        compose2 => Compose2;
        partial2 => Partial2 in Function4;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5];
    }
}

input_level! {
    Input3 for Function5[T1, T2, T3, T4, T5; R] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5];
        compose3 => Compose3;
        partial3 => Partial3 in Function4;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5];
    }
}

input_level! {
    Input4 for Function5[T1, T2, T3, T4, T5; R] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5];
        compose4 => Compose4;
        partial4 => Partial4 in Function4;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5];
    }
}

input_level! {
    Input5 for Function5[T1, T2, T3, T4, T5; R] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [];
        compose5 => Compose5;
        partial5 => Partial5 in Function4;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [];
    }
}

output!(Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5; R] => R, Function5);
recover!(Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5; R]);
consume!(Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5; R] => Runnable5);
grow!(Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5; R] => Function6[T6]);

impl<T1, T2, T3, T4, T5, R> Function5<T1, T2, T3, T4, T5, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    R: 'static,
{
    /// Curry into a chain of one-input functions.
    pub fn curry(self) -> Curried5<T1, T2, T3, T4, T5, R>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
    {
        self.curry1()
            .and_then(|rest: Function4<T2, T3, T4, T5, R>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining four later.
        curry1: Function1[t1: T1] => Function4[T2, T3, T4, T5] [R]
    );

    curry_split!(
        /// Take the first two inputs now and the remaining three later.
        curry2: Function2[t1: T1, t2: T2] => Function3[T3, T4, T5] [R]
    );

    curry_split!(
        /// Take the first three inputs now and the remaining two later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Function2[T4, T5] [R]
    );

    curry_split!(
        /// Take the first four inputs now and the last one later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Function1[T5] [R]
    );
}

// ============================================================================
// Function6
// ============================================================================

callable! {
    /// A function of six inputs.
    Function6[T1, T2, T3, T4, T5, T6; R](t1, t2, t3, t4, t5, t6) -> R;
    apply6, Transformer6::apply6, arity 6
}

input_level! {
    Input1 for Function6[T1, T2, T3, T4, T5, T6; R] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5, t6: T6];
        compose1 => Compose1;
        partial1 => Partial1 in Function5;
    }
}

input_level! {
    Input2 for Function6[T1, T2, T3, T4, T5, T6; R] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6];
        compose2 => Compose2;
        partial2 => Partial2 in Function5;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6];
    }
}

input_level! {
    Input3 for Function6[T1, T2, T3, T4, T5, T6; R] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5, t6: T6];
        compose3 => Compose3;
        partial3 => Partial3 in Function5;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5, t6: T6];
    }
}

input_level! {
    Input4 for Function6[T1, T2, T3, T4, T5, T6; R] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5, t6: T6];
        compose4 => Compose4;
        partial4 => Partial4 in Function5;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5, t6: T6];
    }
}

input_level! {
    Input5 for Function6[T1, T2, T3, T4, T5, T6; R] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [t6: T6];
        compose5 => Compose5;
        partial5 => Partial5 in Function5;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [t6: T6];
    }
}

input_level! {
    Input6 for Function6[T1, T2, T3, T4, T5, T6; R] {
        Slot6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6 [];
        compose6 => Compose6;
        partial6 => Partial6 in Function5;
        swap5 => Swap5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5, t6: T6 [];
    }
}

output!(Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6; R] => R, Function6);
recover!(Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6; R]);
consume!(Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6; R] => Runnable6);
grow!(Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6; R] => Function7[T7]);

impl<T1, T2, T3, T4, T5, T6, R> Function6<T1, T2, T3, T4, T5, T6, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    R: 'static,
{
    /// Curry into a chain of one-input functions.
    pub fn curry(self) -> Curried6<T1, T2, T3, T4, T5, T6, R>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
        T5: Clone,
    {
        self.curry1()
            .and_then(|rest: Function5<T2, T3, T4, T5, T6, R>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining five later.
        curry1: Function1[t1: T1] => Function5[T2, T3, T4, T5, T6] [R]
    );

    curry_split!(
        /// Take the first two inputs now and the remaining four later.
        curry2: Function2[t1: T1, t2: T2] => Function4[T3, T4, T5, T6] [R]
    );

    curry_split!(
        /// Take the first three inputs now and the remaining three later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Function3[T4, T5, T6] [R]
    );

    curry_split!(
        /// Take the first four inputs now and the remaining two later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Function2[T5, T6] [R]
    );

    curry_split!(
        /// Take the first five inputs now and the last one later.
        curry5: Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] => Function1[T6] [R]
    );
}

// ============================================================================
// Function7
// ============================================================================

callable! {
    /// A function of seven inputs.
    Function7[T1, T2, T3, T4, T5, T6, T7; R](t1, t2, t3, t4, t5, t6, t7) -> R;
    apply7, Transformer7::apply7, arity 7
}

input_level! {
    Input1 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7];
        compose1 => Compose1;
        partial1 => Partial1 in Function6;
    }
}

input_level! {
    Input2 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7];
        compose2 => Compose2;
        partial2 => Partial2 in Function6;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7];
    }
}

input_level! {
    Input3 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7];
        compose3 => Compose3;
        partial3 => Partial3 in Function6;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7];
    }
}

input_level! {
    Input4 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5, t6: T6, t7: T7];
        compose4 => Compose4;
        partial4 => Partial4 in Function6;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5, t6: T6, t7: T7];
    }
}

input_level! {
    Input5 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [t6: T6, t7: T7];
        compose5 => Compose5;
        partial5 => Partial5 in Function6;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [t6: T6, t7: T7];
    }
}

input_level! {
    Input6 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6 [t7: T7];
        compose6 => Compose6;
        partial6 => Partial6 in Function6;
        swap5 => Swap5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5, t6: T6 [t7: T7];
    }
}

input_level! {
    Input7 for Function7[T1, T2, T3, T4, T5, T6, T7; R] {
        Slot7 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] t7: T7 [];
        compose7 => Compose7;
        partial7 => Partial7 in Function6;
        swap6 => Swap6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6, t7: T7 [];
    }
}

output!(Function7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7; R] => R, Function7);
recover!(Function7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7; R]);
consume!(Function7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7; R] => Runnable7);
grow!(Function7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7; R] => Function8[T8]);

impl<T1, T2, T3, T4, T5, T6, T7, R> Function7<T1, T2, T3, T4, T5, T6, T7, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    T7: 'static,
    R: 'static,
{
    /// Curry into a chain of one-input functions.
    pub fn curry(self) -> Curried7<T1, T2, T3, T4, T5, T6, T7, R>
    where
        T1: Clone,
        T2: Clone,
        T3: Clone,
        T4: Clone,
        T5: Clone,
        T6: Clone,
    {
        self.curry1()
            .and_then(|rest: Function6<T2, T3, T4, T5, T6, T7, R>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining six later.
        curry1: Function1[t1: T1] => Function6[T2, T3, T4, T5, T6, T7] [R]
    );

    curry_split!(
        /// Take the first two inputs now and the remaining five later.
        curry2: Function2[t1: T1, t2: T2] => Function5[T3, T4, T5, T6, T7] [R]
    );

    curry_split!(
        /// Take the first three inputs now and the remaining four later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Function4[T4, T5, T6, T7] [R]
    );

    curry_split!(
        /// Take the first four inputs now and the remaining three later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Function3[T5, T6, T7] [R]
    );

    curry_split!(
        /// Take the first five inputs now and the remaining two later.
        curry5: Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] => Function2[T6, T7] [R]
    );

    curry_split!(
        /// Take the first six inputs now and the last one later.
        curry6: Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] => Function1[T7] [R]
    );
}

// ============================================================================
// Function8
// ============================================================================

callable! {
    /// A function of eight inputs.
    Function8[T1, T2, T3, T4, T5, T6, T7, T8; R](t1, t2, t3, t4, t5, t6, t7, t8) -> R;
    apply8, Transformer8::apply8, arity 8
}

input_level! {
    Input1 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot1 = [] t1: T1 [t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
        compose1 => Compose1;
        partial1 => Partial1 in Function7;
    }
}

input_level! {
    Input2 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot2 = [t1: T1] t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
        compose2 => Compose2;
        partial2 => Partial2 in Function7;
        swap1 => Swap1 = [] t1: T1, t2: T2 [t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input3 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot3 = [t1: T1, t2: T2] t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
        compose3 => Compose3;
        partial3 => Partial3 in Function7;
        swap2 => Swap2 = [t1: T1] t2: T2, t3: T3 [t4: T4, t5: T5, t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input4 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot4 = [t1: T1, t2: T2, t3: T3] t4: T4 [t5: T5, t6: T6, t7: T7, t8: T8];
        compose4 => Compose4;
        partial4 => Partial4 in Function7;
        swap3 => Swap3 = [t1: T1, t2: T2] t3: T3, t4: T4 [t5: T5, t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input5 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5 [t6: T6, t7: T7, t8: T8];
        compose5 => Compose5;
        partial5 => Partial5 in Function7;
        swap4 => Swap4 = [t1: T1, t2: T2, t3: T3] t4: T4, t5: T5 [t6: T6, t7: T7, t8: T8];
    }
}

input_level! {
    Input6 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6 [t7: T7, t8: T8];
        compose6 => Compose6;
        partial6 => Partial6 in Function7;
        swap5 => Swap5 = [t1: T1, t2: T2, t3: T3, t4: T4] t5: T5, t6: T6 [t7: T7, t8: T8];
    }
}

input_level! {
    Input7 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot7 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] t7: T7 [t8: T8];
        compose7 => Compose7;
        partial7 => Partial7 in Function7;
        swap6 => Swap6 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] t6: T6, t7: T7 [t8: T8];
    }
}

input_level! {
    Input8 for Function8[T1, T2, T3, T4, T5, T6, T7, T8; R] {
        Slot8 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7] t8: T8 [];
        compose8 => Compose8;
        partial8 => Partial8 in Function7;
        swap7 => Swap7 = [t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] t7: T7, t8: T8 [];
    }
}

output!(
    Function8[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8; R] => R, Function8
);
recover!(Function8[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8; R]);
consume!(Function8[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8; R] => Runnable8);

impl<T1, T2, T3, T4, T5, T6, T7, T8, R> Function8<T1, T2, T3, T4, T5, T6, T7, T8, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    T7: 'static,
    T8: 'static,
    R: 'static,
{
    /// Curry into a chain of one-input functions.
    pub fn curry(self) -> Curried8<T1, T2, T3, T4, T5, T6, T7, T8, R>
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
            .and_then(|rest: Function7<T2, T3, T4, T5, T6, T7, T8, R>| Ok(rest.curry()))
    }

    curry_split!(
        /// Take the first input now and the remaining seven later.
        curry1: Function1[t1: T1] => Function7[T2, T3, T4, T5, T6, T7, T8] [R]
    );

    curry_split!(
        /// Take the first two inputs now and the remaining six later.
        curry2: Function2[t1: T1, t2: T2] => Function6[T3, T4, T5, T6, T7, T8] [R]
    );

    curry_split!(
        /// Take the first three inputs now and the remaining five later.
        curry3: Function3[t1: T1, t2: T2, t3: T3] => Function5[T4, T5, T6, T7, T8] [R]
    );

    curry_split!(
        /// Take the first four inputs now and the remaining four later.
        curry4: Function4[t1: T1, t2: T2, t3: T3, t4: T4] => Function4[T5, T6, T7, T8] [R]
    );

    curry_split!(
        /// Take the first five inputs now and the remaining three later.
        curry5: Function5[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5] => Function3[T6, T7, T8] [R]
    );

    curry_split!(
        /// Take the first six inputs now and the remaining two later.
        curry6: Function6[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6] => Function2[T7, T8] [R]
    );

    curry_split!(
        /// Take the first seven inputs now and the last one later.
        curry7: Function7[t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7]
            => Function1[T8] [R]
    );
}
