//! # Arity - A Typed Algebra of Callables
//!
//! This crate provides fixed-arity callables (zero through eight inputs) that
//! compose like values:
//!
//! - **Transformers**: the bare `N`-input computation, implemented by any closure
//! - **Functions**: `Function0..Function8`, callables producing a result
//! - **Runnables**: `Runnable0..Runnable8`, callables run for their side effects
//! - **Inputs**: per-slot `compose`, adjacent `swap` and `partial` application
//! - **Faults**: explicit `Result<_, Fault>` threading instead of unwinding
//! - **Tracing**: zero-cost compile-time configurable timing
//!
//! ## Design Philosophy
//!
//! A pipeline is built as a value before anything runs. Every combinator
//! consumes its receiver and returns a new callable of a statically known
//! kind and arity, so the shape of the pipeline is checked by the compiler.
//!
//! ```
//! use compositional_arity::prelude::*;
//!
//! let add = Function2::new(|a: i32, b: i32| Ok(a + b));
//! let sub = Function2::new(|a: i32, b: i32| Ok(a - b));
//!
//! assert_eq!(add.swap1().apply2(3, 10), Ok(13));
//! assert_eq!(sub.clone().apply2(3, 10), Ok(-7));
//! assert_eq!(sub.swap1().apply2(3, 10), Ok(7));
//! ```

#[macro_use]
mod macros;

pub mod capability;
pub mod error;
pub mod function;
pub mod input;
pub mod runnable;
pub mod trace;
pub mod transformer;

// Re-export key types at crate root for convenience
pub use capability::{Arity, Chain, Consume, Output, Recover};
pub use error::Fault;
pub use function::{
    Curried2, Curried3, Curried4, Curried5, Curried6, Curried7, Curried8, Function0, Function1,
    Function2, Function3, Function4, Function5, Function6, Function7, Function8,
};
pub use runnable::{
    Runnable0, Runnable1, Runnable2, Runnable3, Runnable4, Runnable5, Runnable6, Runnable7,
    Runnable8,
};
pub use trace::{AutoTraced, TraceExt, TraceNode, Traced};
pub use transformer::Widen;

/// Everything needed to build and combine callables.
pub mod prelude {
    pub use crate::capability::{Arity, Chain, Consume, Output, Recover};
    pub use crate::error::Fault;
    pub use crate::function::{
        Function0, Function1, Function2, Function3, Function4, Function5, Function6, Function7,
        Function8,
    };
    pub use crate::input::{
        Input0, Input1, Input2, Input3, Input4, Input5, Input6, Input7, Input8,
    };
    pub use crate::runnable::{
        Runnable0, Runnable1, Runnable2, Runnable3, Runnable4, Runnable5, Runnable6, Runnable7,
        Runnable8,
    };
    pub use crate::trace::{TraceExt, TraceNode, Traced};
    pub use crate::transformer::{
        Task0, Task1, Task2, Task3, Task4, Task5, Task6, Task7, Task8, Transformer0,
        Transformer1, Transformer2, Transformer3, Transformer4, Transformer5, Transformer6,
        Transformer7, Transformer8, Widen,
    };
}
