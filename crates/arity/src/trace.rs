//! # Zero-Cost Tracing
//!
//! Tracing is chosen at compile time through a const generic, so a disabled
//! wrapper adds nothing to the call path.
//!
//! - `Traced<C, false>`: implements exactly the transformer traits `C` does.
//!   The wrapper compiles away.
//! - `Traced<C, true>`: pairs every result with a [`TraceNode`] holding the
//!   wall-clock duration of the call.
//!
//! [`AutoTraced`] picks one or the other from `debug_assertions`.
//!
//! ```
//! use compositional_arity::prelude::*;
//!
//! let add = Function2::new(|a: i32, b: i32| Ok(a + b));
//! let (sum, node) = add.traced().named("add").apply2(2, 3).unwrap();
//! assert_eq!(sum, 5);
//! assert_eq!(node.name, "add");
//! ```
//!
//! A traced transformer is still a transformer, so it lifts straight back into
//! the algebra with `FunctionN::from_transformer`.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::capability::Arity;
use crate::error::Fault;
use crate::transformer::{
    Transformer0, Transformer1, Transformer2, Transformer3, Transformer4, Transformer5,
    Transformer6, Transformer7, Transformer8,
};

/// Timing recorded for one traced call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceNode {
    /// The name of the traced callable
    pub name: String,
    /// How long the call took
    pub duration: Duration,
}

impl TraceNode {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

impl fmt::Display for TraceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.duration, self.name)
    }
}

/// A callable wrapped with compile-time selectable tracing.
///
/// The name defaults to the wrapped type's name; override it with
/// [`Traced::named`].
#[derive(Clone)]
pub struct Traced<C, const ENABLED: bool> {
    inner: C,
    name: String,
}

impl<C, const ENABLED: bool> Traced<C, ENABLED> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            name: std::any::type_name::<C>().to_string(),
        }
    }

    /// Replace the name recorded in every [`TraceNode`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the inner callable.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap and return the inner callable.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, const ENABLED: bool> fmt::Debug for Traced<C, ENABLED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("name", &self.name)
            .field("enabled", &ENABLED)
            .finish_non_exhaustive()
    }
}

impl<C: Arity, const ENABLED: bool> Arity for Traced<C, ENABLED> {
    const ARITY: usize = C::ARITY;
}

// ============================================================================
// Disabled: pass-through / Enabled: timed
// ============================================================================

macro_rules! traced_transformer {
    ($Transformer:ident::$apply:ident($($t:ident: $T:ident),*)) => {
        impl<C, $($T,)* R> $Transformer<$($T,)* R> for Traced<C, false>
        where
            C: $Transformer<$($T,)* R>,
        {
            fn $apply(&self, $($t: $T),*) -> Result<R, Fault> {
                self.inner.$apply($($t),*)
            }
        }

        impl<C, $($T,)* R> $Transformer<$($T,)* (R, TraceNode)> for Traced<C, true>
        where
            C: $Transformer<$($T,)* R>,
        {
            fn $apply(&self, $($t: $T),*) -> Result<(R, TraceNode), Fault> {
                let start = Instant::now();
                let value = self.inner.$apply($($t),*)?;
                Ok((value, TraceNode::new(self.name.as_str(), start.elapsed())))
            }
        }
    };
}

traced_transformer!(Transformer0::apply0());
traced_transformer!(Transformer1::apply1(t1: T1));
traced_transformer!(Transformer2::apply2(t1: T1, t2: T2));
traced_transformer!(Transformer3::apply3(t1: T1, t2: T2, t3: T3));
traced_transformer!(Transformer4::apply4(t1: T1, t2: T2, t3: T3, t4: T4));
traced_transformer!(Transformer5::apply5(t1: T1, t2: T2, t3: T3, t4: T4, t5: T5));
traced_transformer!(Transformer6::apply6(t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6));
traced_transformer!(Transformer7::apply7(
    t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7
));
traced_transformer!(Transformer8::apply8(
    t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6, t7: T7, t8: T8
));

// ============================================================================
// Compile-Time Selection
// ============================================================================

/// Traced in debug builds, pass-through in release builds.
#[cfg(debug_assertions)]
pub type AutoTraced<C> = Traced<C, true>;

/// Traced in debug builds, pass-through in release builds.
#[cfg(not(debug_assertions))]
pub type AutoTraced<C> = Traced<C, false>;

/// Extension trait wrapping any function or runnable for tracing.
pub trait TraceExt: Arity + Sized {
    /// Wrap with tracing enabled.
    fn traced(self) -> Traced<Self, true> {
        Traced::new(self)
    }

    /// Wrap with tracing disabled.
    fn untraced(self) -> Traced<Self, false> {
        Traced::new(self)
    }

    /// Wrap with auto-selected tracing (debug = on, release = off).
    fn auto_traced(self) -> AutoTraced<Self> {
        Traced::new(self)
    }
}

impl<C: Arity + Sized> TraceExt for C {}

// ============================================================================
// Tests
// ============================================================================
