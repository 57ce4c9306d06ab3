//! # Inputs
//!
//! The input capability governs how the slots of a callable may be rearranged
//! before it is invoked. `InputN` builds on `Input(N-1)`, adding three
//! operations for slot `N`:
//!
//! - `composeN`: pre-process slot `N` with a one-argument transform, retyping it.
//! - `swap(N-1)`: exchange slots `N-1` and `N`.
//! - `partialN`: fix slot `N`, leaving a callable one arity lower.
//!
//! Each operation's result type is an associated type, so a `Function3`
//! composed on its first slot is still a `Function3` (rather than whatever an
//! `Input1` would be on its own).
//!
//! ```text
//! Input0              arity only
//!   └─ Input1         compose1, partial1
//!        └─ Input2    compose2, swap1, partial2
//!             └─ ...
//!                  └─ Input8   compose8, swap7, partial8
//! ```
//!
//! Only adjacent swaps are primitive. Arbitrary permutations are built by
//! chaining them.

use crate::capability::Arity;
use crate::error::Fault;

/// A callable with no inputs to manipulate.
pub trait Input0: Arity {}

/// A callable whose first slot can be composed or fixed.
pub trait Input1: Input0 {
    /// Type accepted in the first slot.
    type Slot1;

    /// Shape after the first slot has been composed with a `V -> Slot1` transform.
    type Compose1<V: 'static>: Arity;

    /// Shape left behind once the first slot is fixed.
    type Partial1: Arity;

    /// Run `before` on the first input and pass its output along.
    ///
    /// Nothing runs until the result is invoked; a fault from `before`
    /// surfaces then.
    fn compose1<V: 'static, G>(self, before: G) -> Self::Compose1<V>
    where
        G: Fn(V) -> Result<Self::Slot1, Fault> + 'static;

    /// Fix the first input to `t1`.
    ///
    /// The value is cloned into every invocation of the result.
    fn partial1(self, t1: Self::Slot1) -> Self::Partial1
    where
        Self::Slot1: Clone + 'static;
}

/// A callable whose second slot can be composed, swapped with the first, or fixed.
pub trait Input2: Input1 {
    /// Type accepted in the second slot.
    type Slot2;

    /// Shape after the second slot has been composed.
    type Compose2<V: 'static>: Arity;

    /// Shape with the first and second slots exchanged.
    type Swap1: Arity;

    /// Shape left behind once the second slot is fixed.
    type Partial2: Arity;

    /// Run `before` on the second input and pass its output along.
    fn compose2<V: 'static, G>(self, before: G) -> Self::Compose2<V>
    where
        G: Fn(V) -> Result<Self::Slot2, Fault> + 'static;

    /// Exchange the first and second slots.
    ///
    /// Applying it twice behaves exactly like the unswapped callable.
    fn swap1(self) -> Self::Swap1;

    /// Fix the second input to `t2`; the remaining inputs keep their order.
    fn partial2(self, t2: Self::Slot2) -> Self::Partial2
    where
        Self::Slot2: Clone + 'static;
}

/// A callable whose third slot can be composed, swapped with the second, or fixed.
pub trait Input3: Input2 {
    /// Type accepted in the third slot.
    type Slot3;
    /// Shape after the third slot has been composed.
    type Compose3<V: 'static>: Arity;
    /// Shape with the second and third slots exchanged.
    type Swap2: Arity;
    /// Shape left behind once the third slot is fixed.
    type Partial3: Arity;

    /// Run `before` on the third input and pass its output along.
    fn compose3<V: 'static, G>(self, before: G) -> Self::Compose3<V>
    where
        G: Fn(V) -> Result<Self::Slot3, Fault> + 'static;

    /// Exchange the second and third inputs.
    fn swap2(self) -> Self::Swap2;

    /// Fix the third input to `t3`.
    fn partial3(self, t3: Self::Slot3) -> Self::Partial3
    where
        Self::Slot3: Clone + 'static;
}

/// A callable whose fourth slot can be composed, swapped with the third, or fixed.
pub trait Input4: Input3 {
    /// Type accepted in the fourth slot.
    type Slot4;
    /// Shape after the fourth slot has been composed.
    type Compose4<V: 'static>: Arity;
    /// Shape with the third and fourth slots exchanged.
    type Swap3: Arity;
    /// Shape left behind once the fourth slot is fixed.
    type Partial4: Arity;

    /// Run `before` on the fourth input and pass its output along.
    fn compose4<V: 'static, G>(self, before: G) -> Self::Compose4<V>
    where
        G: Fn(V) -> Result<Self::Slot4, Fault> + 'static;

    /// Exchange the third and fourth inputs.
    fn swap3(self) -> Self::Swap3;

    /// Fix the fourth input to `t4`.
    fn partial4(self, t4: Self::Slot4) -> Self::Partial4
    where
        Self::Slot4: Clone + 'static;
}

/// A callable whose fifth slot can be composed, swapped with the fourth, or fixed.
pub trait Input5: Input4 {
    /// Type accepted in the fifth slot.
    type Slot5;
    /// Shape after the fifth slot has been composed.
    type Compose5<V: 'static>: Arity;
    /// Shape with the fourth and fifth slots exchanged.
    type Swap4: Arity;
    /// Shape left behind once the fifth slot is fixed.
    type Partial5: Arity;

    /// Run `before` on the fifth input and pass its output along.
    fn compose5<V: 'static, G>(self, before: G) -> Self::Compose5<V>
    where
        G: Fn(V) -> Result<Self::Slot5, Fault> + 'static;

    /// Exchange the fourth and fifth inputs.
    fn swap4(self) -> Self::Swap4;

    /// Fix the fifth input to `t5`.
    fn partial5(self, t5: Self::Slot5) -> Self::Partial5
    where
        Self::Slot5: Clone + 'static;
}

/// A callable whose sixth slot can be composed, swapped with the fifth, or fixed.
pub trait Input6: Input5 {
    /// Type accepted in the sixth slot.
    type Slot6;
    /// Shape after the sixth slot has been composed.
    type Compose6<V: 'static>: Arity;
    /// Shape with the fifth and sixth slots exchanged.
    type Swap5: Arity;
    /// Shape left behind once the sixth slot is fixed.
    type Partial6: Arity;

    /// Run `before` on the sixth input and pass its output along.
    fn compose6<V: 'static, G>(self, before: G) -> Self::Compose6<V>
    where
        G: Fn(V) -> Result<Self::Slot6, Fault> + 'static;

    /// Exchange the fifth and sixth inputs.
    fn swap5(self) -> Self::Swap5;

    /// Fix the sixth input to `t6`.
    fn partial6(self, t6: Self::Slot6) -> Self::Partial6
    where
        Self::Slot6: Clone + 'static;
}

/// A callable whose seventh slot can be composed, swapped with the sixth, or fixed.
pub trait Input7: Input6 {
    /// Type accepted in the seventh slot.
    type Slot7;
    /// Shape after the seventh slot has been composed.
    type Compose7<V: 'static>: Arity;
    /// Shape with the sixth and seventh slots exchanged.
    type Swap6: Arity;
    /// Shape left behind once the seventh slot is fixed.
    type Partial7: Arity;

    /// Run `before` on the seventh input and pass its output along.
    fn compose7<V: 'static, G>(self, before: G) -> Self::Compose7<V>
    where
        G: Fn(V) -> Result<Self::Slot7, Fault> + 'static;

    /// Exchange the sixth and seventh inputs.
    fn swap6(self) -> Self::Swap6;

    /// Fix the seventh input to `t7`.
    fn partial7(self, t7: Self::Slot7) -> Self::Partial7
    where
        Self::Slot7: Clone + 'static;
}

/// A callable whose eighth slot can be composed, swapped with the seventh, or fixed.
pub trait Input8: Input7 {
    /// Type accepted in the eighth slot.
    type Slot8;
    /// Shape after the eighth slot has been composed.
    type Compose8<V: 'static>: Arity;
    /// Shape with the seventh and eighth slots exchanged.
    type Swap7: Arity;
    /// Shape left behind once the eighth slot is fixed.
    type Partial8: Arity;

    /// Run `before` on the eighth input and pass its output along.
    fn compose8<V: 'static, G>(self, before: G) -> Self::Compose8<V>
    where
        G: Fn(V) -> Result<Self::Slot8, Fault> + 'static;

    /// Exchange the seventh and eighth inputs.
    fn swap7(self) -> Self::Swap7;

    /// Fix the eighth input to `t8`.
    fn partial8(self, t8: Self::Slot8) -> Self::Partial8
    where
        Self::Slot8: Clone + 'static;
}
