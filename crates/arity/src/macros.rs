//! Declarative macros that stamp out the per-arity callable families.
//!
//! Every callable is a newtype over an `Rc`-shared boxed body, so each
//! combinator is the same few lines with a different slot list. The
//! invocations in `function.rs` and `runnable.rs` spell the slot lists out
//! explicitly; the macros below only fill in the bodies.
//!
//! Slot lists are written `[t1: T1, t2: T2]`, pairing the binding used in the
//! generated closure with its type parameter. A trailing `[R]` (functions) or
//! `[]` (runnables) carries the result type parameter, if any.

/// Declares a callable struct together with its constructor, invocation
/// method, `Arity`, `Input0` and transformer impls.
macro_rules! callable {
    (
        $(#[$meta:meta])*
        $Ty:ident[$($T:ident),*; $($R:ident)?]($($t:ident),*) -> $Ret:ty;
        $invoke:ident, $Transformer:ident::$apply:ident, arity $arity:literal
    ) => {
        $(#[$meta])*
        pub struct $Ty<$($T,)* $($R)?> {
            body: ::std::rc::Rc<dyn Fn($($T),*) -> ::std::result::Result<$Ret, $crate::Fault>>,
        }

        impl<$($T,)* $($R)?> Clone for $Ty<$($T,)* $($R)?> {
            fn clone(&self) -> Self {
                Self {
                    body: ::std::rc::Rc::clone(&self.body),
                }
            }
        }

        impl<$($T,)* $($R)?> ::std::fmt::Debug for $Ty<$($T,)* $($R)?> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($Ty))
                    .field("arity", &$arity)
                    .finish_non_exhaustive()
            }
        }

        impl<$($T: 'static,)* $($R: 'static)?> $Ty<$($T,)* $($R)?> {
            /// Wrap `body` as a callable.
            pub fn new<F>(body: F) -> Self
            where
                F: Fn($($T),*) -> ::std::result::Result<$Ret, $crate::Fault> + 'static,
            {
                Self {
                    body: ::std::rc::Rc::new(body),
                }
            }

            /// Lift any transformer of the same shape into the full algebra.
            pub fn from_transformer<X>(transformer: X) -> Self
            where
                X: $crate::transformer::$Transformer<$($T,)* $Ret> + 'static,
            {
                Self::new(move |$($t: $T),*| {
                    $crate::transformer::$Transformer::$apply(&transformer, $($t),*)
                })
            }

            /// Invoke the wrapped computation.
            #[allow(clippy::too_many_arguments)]
            pub fn $invoke(&self, $($t: $T),*) -> ::std::result::Result<$Ret, $crate::Fault> {
                (self.body)($($t),*)
            }
        }

        impl<$($T,)* $($R)?> $crate::capability::Arity for $Ty<$($T,)* $($R)?> {
            const ARITY: usize = $arity;
        }

        impl<$($T,)* $($R)?> $crate::input::Input0 for $Ty<$($T,)* $($R)?> {}

        impl<$($T: 'static,)* $($R: 'static)?> $crate::transformer::$Transformer<$($T,)* $Ret>
            for $Ty<$($T,)* $($R)?>
        {
            #[allow(clippy::too_many_arguments)]
            fn $apply(&self, $($t: $T),*) -> ::std::result::Result<$Ret, $crate::Fault> {
                (self.body)($($t),*)
            }
        }
    };
}

/// Associated type and method composing one slot with a `before` transform.
macro_rules! compose_slot {
    (
        $Ty:ident, $method:ident, $Assoc:ident,
        [$($p:ident: $P:ident),*] $S:ident [$($q:ident: $Q:ident),*] [$($R:ident)?]
    ) => {
        type $Assoc<V: 'static> = $Ty<$($P,)* V, $($Q,)* $($R)?>;

        fn $method<V: 'static, G>(self, before: G) -> Self::$Assoc<V>
        where
            G: Fn(V) -> ::std::result::Result<$S, $crate::Fault> + 'static,
        {
            let body = self.body;
            $Ty::new(move |$($p: $P,)* v: V, $($q: $Q),*| body($($p,)* before(v)?, $($q),*))
        }
    };
}

/// Associated type and method exchanging two adjacent slots.
macro_rules! swap_slot {
    (
        $Ty:ident, $method:ident, $Assoc:ident,
        [$($p:ident: $P:ident),*] $a:ident: $A:ident, $b:ident: $B:ident
        [$($q:ident: $Q:ident),*] [$($R:ident)?]
    ) => {
        type $Assoc = $Ty<$($P,)* $B, $A, $($Q,)* $($R)?>;

        fn $method(self) -> Self::$Assoc {
            let body = self.body;
            $Ty::new(move |$($p: $P,)* $b: $B, $a: $A, $($q: $Q),*| body($($p,)* $a, $b, $($q),*))
        }
    };
}

/// Associated type and method fixing one slot to a value.
macro_rules! partial_slot {
    (
        $Lower:ident, $method:ident, $Assoc:ident,
        [$($p:ident: $P:ident),*] $s:ident: $S:ident [$($q:ident: $Q:ident),*] [$($R:ident)?]
    ) => {
        type $Assoc = $Lower<$($P,)* $($Q,)* $($R)?>;

        fn $method(self, $s: $S) -> Self::$Assoc
        where
            $S: Clone,
        {
            let body = self.body;
            $Lower::new(move |$($p: $P,)* $($q: $Q),*| body($($p,)* $s.clone(), $($q),*))
        }
    };
}

/// One `InputK` impl: the slot type plus compose, partial and (for `K >= 2`) swap.
macro_rules! input_level {
    (
        $Input:ident for $Ty:ident[$($T:ident),*; $($R:ident)?] {
            $Slot:ident = [$($p:ident: $P:ident),*] $s:ident: $S:ident [$($q:ident: $Q:ident),*];
            $compose:ident => $Compose:ident;
            $partial:ident => $Partial:ident in $Lower:ident;
        }
    ) => {
        impl<$($T: 'static,)* $($R: 'static)?> $crate::input::$Input for $Ty<$($T,)* $($R)?> {
            type $Slot = $S;

            compose_slot!($Ty, $compose, $Compose, [$($p: $P),*] $S [$($q: $Q),*] [$($R)?]);
            partial_slot!(
                $Lower, $partial, $Partial, [$($p: $P),*] $s: $S [$($q: $Q),*] [$($R)?]
            );
        }
    };
    (
        $Input:ident for $Ty:ident[$($T:ident),*; $($R:ident)?] {
            $Slot:ident = [$($p:ident: $P:ident),*] $s:ident: $S:ident [$($q:ident: $Q:ident),*];
            $compose:ident => $Compose:ident;
            $partial:ident => $Partial:ident in $Lower:ident;
            $swap:ident => $Swap:ident = [$($sp:ident: $SP:ident),*]
                $a:ident: $A:ident, $b:ident: $B:ident [$($sq:ident: $SQ:ident),*];
        }
    ) => {
        impl<$($T: 'static,)* $($R: 'static)?> $crate::input::$Input for $Ty<$($T,)* $($R)?> {
            type $Slot = $S;

            compose_slot!($Ty, $compose, $Compose, [$($p: $P),*] $S [$($q: $Q),*] [$($R)?]);
            partial_slot!(
                $Lower, $partial, $Partial, [$($p: $P),*] $s: $S [$($q: $Q),*] [$($R)?]
            );
            swap_slot!(
                $Ty, $swap, $Swap, [$($sp: $SP),*] $a: $A, $b: $B [$($sq: $SQ),*] [$($R)?]
            );
        }
    };
}

/// `Recover` impl: single-level fallback invoked with the same inputs.
macro_rules! recover {
    ($Ty:ident[$($t:ident: $T:ident),*; $($R:ident)?]) => {
        impl<$($T: Clone + 'static,)* $($R: 'static)?> $crate::capability::Recover
            for $Ty<$($T,)* $($R)?>
        {
            fn handle<H, O>(self, handler: H) -> Self
            where
                H: Fn($crate::Fault) -> O + 'static,
                O: Into<Option<Self>>,
            {
                let body = self.body;
                Self::new(move |$($t: $T),*| match body($($t.clone()),*) {
                    Ok(value) => Ok(value),
                    Err(fault) => {
                        let fallback = handler(fault);
                        ($crate::capability::require_fallback::<Self>(fallback)?.body)($($t),*)
                    }
                })
            }
        }
    };
}

/// `Output` impl: chain `after` onto the result, landing on `$Then`.
macro_rules! output {
    ($Ty:ident[$($t:ident: $T:ident),*; $($R:ident)?] => $Value:ty, $Then:ident) => {
        impl<$($T: 'static,)* $($R: 'static)?> $crate::capability::Output for $Ty<$($T,)* $($R)?> {
            type Value = $Value;
            type Then<V: 'static> = $Then<$($T,)* V>;

            fn and_then<V: 'static, G>(self, after: G) -> Self::Then<V>
            where
                G: Fn($Value) -> ::std::result::Result<V, $crate::Fault> + 'static,
            {
                let body = self.body;
                $Then::new(move |$($t: $T),*| after(body($($t),*)?))
            }
        }
    };
}

/// `Consume` impl for functions: keep the effects, drop the result.
macro_rules! consume {
    ($Ty:ident[$($t:ident: $T:ident),+; $R:ident] => $Runnable:ident) => {
        impl<$($T: 'static,)+ $R: 'static> $crate::capability::Consume for $Ty<$($T,)+ $R> {
            type Consumed = $Runnable<$($T),+>;

            fn consume(self) -> Self::Consumed {
                let body = self.body;
                $Runnable::new(move |$($t: $T),+| body($($t),+).map(|_| ()))
            }
        }
    };
}

/// `Chain` impl for runnables: run `self`, then `after`, on the same inputs.
macro_rules! chain {
    ($Ty:ident[$($t:ident: $T:ident),+]) => {
        impl<$($T: Clone + 'static),+> $crate::capability::Chain for $Ty<$($T),+> {
            fn then(self, after: Self) -> Self {
                let first = self.body;
                let second = after.body;
                Self::new(move |$($t: $T),+| {
                    first($($t.clone()),+)?;
                    second($($t),+)
                })
            }
        }
    };
}

/// `append` and `widen`, both of which land one arity up.
macro_rules! grow {
    ($Ty:ident[$($t:ident: $T:ident),*; $($R:ident)?] => $Next:ident[$X:ident]) => {
        impl<$($T: 'static,)* $($R: 'static)?> $Ty<$($T,)* $($R)?> {
            /// Hand this callable to `addend`, which decides how it is embedded
            /// into a callable with one more trailing input.
            pub fn append<$X: 'static, F>(self, addend: F) -> $Next<$($T,)* $X, $($R)?>
            where
                F: FnOnce(Self) -> $Next<$($T,)* $X, $($R)?>,
            {
                addend(self)
            }

            /// Accept one more trailing input and ignore it.
            pub fn widen<$X: 'static>(self) -> $Next<$($T,)* $X, $($R)?> {
                let body = self.body;
                $Next::new(move |$($t: $T,)* _: $X| body($($t),*))
            }
        }
    };
}

/// Grouped curry: the first slots become a `FunctionK` whose result is the
/// remaining callable.
macro_rules! curry_split {
    (
        $(#[$meta:meta])*
        $method:ident: $Outer:ident[$($p:ident: $P:ident),+]
            => $Inner:ident[$($Q:ident),+] [$($R:ident)?]
    ) => {
        $(#[$meta])*
        pub fn $method(self) -> $Outer<$($P,)+ $Inner<$($Q,)+ $($R)?>>
        where
            $($P: Clone,)+
        {
            $Outer::new(move |$($p: $P),+| Ok(self.clone()$(.partial1($p))+))
        }
    };
}
