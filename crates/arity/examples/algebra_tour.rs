//! A Tour of the Callable Algebra
//!
//! Run with: cargo run --example algebra_tour
//!
//! This example demonstrates:
//! - Slot composition, swapping and partial application
//! - Result chaining and fault recovery
//! - Consuming functions into runnables and chaining runnables
//! - Currying
//! - Zero-cost tracing with const generics

use std::sync::{Arc, Mutex};

use compositional_arity::prelude::*;

fn main() -> Result<(), Fault> {
    println!("=== A Tour of the Callable Algebra ===\n");

    // -------------------------------------------------------------------------
    // Input: compose, swap, partial
    // -------------------------------------------------------------------------
    println!("1. Rearranging Inputs");
    println!("---------------------");

    let sub = Function2::new(|a: i32, b: i32| Ok(a - b));
    println!("sub(3, 10)         = {}", sub.apply2(3, 10)?);
    println!(
        "sub.swap1()(3, 10) = {}",
        sub.clone().swap1().apply2(3, 10)?
    );

    let from_text = sub
        .clone()
        .compose1(|s: &'static str| s.parse::<i32>().map_err(Fault::from_error));
    println!(
        "sub.compose1(parse)(\"40\", 2) = {}",
        from_text.apply2("40", 2)?
    );

    let mul_add = Function3::new(|a: i32, b: i32, c: i32| Ok(a * b + c));
    let times_five = mul_add.clone().partial2(5);
    println!("mul_add.partial2(5)(2, 3) = {}\n", times_five.apply2(2, 3)?);

    // -------------------------------------------------------------------------
    // Output and Recover
    // -------------------------------------------------------------------------
    println!("2. Chaining Results and Recovering Faults");
    println!("-----------------------------------------");

    let div = Function2::new(|a: i32, b: i32| {
        a.checked_div(b)
            .ok_or_else(|| Fault::computation("division by zero"))
    });
    match div.apply2(5, 0) {
        Ok(value) => println!("div(5, 0) = {value}"),
        Err(fault) => println!("div(5, 0) faulted: {fault}"),
    }

    let safe = div.clone().handle(|fault| {
        println!("  handler saw: {fault}");
        Function2::new(|_: i32, _: i32| Ok(0))
    });
    println!("safe(5, 0)  = {}", safe.apply2(5, 0)?);
    println!("safe(10, 2) = {}", safe.apply2(10, 2)?);

    let described = div.and_then(|q| Ok(format!("quotient {q}")));
    println!(
        "div.and_then(describe)(9, 3) = {}\n",
        described.apply2(9, 3)?
    );

    // -------------------------------------------------------------------------
    // Runnables
    // -------------------------------------------------------------------------
    println!("3. Runnables");
    println!("------------");

    let log = Arc::new(Mutex::new(Vec::new()));
    let record = {
        let log = Arc::clone(&log);
        Runnable2::new(move |key: &'static str, value: i32| {
            log.lock()
                .map_err(|_| Fault::computation("log poisoned"))?
                .push(format!("{key}={value}"));
            Ok(())
        })
    };
    let echo = Runnable2::new(|key: &'static str, value: i32| {
        println!("  echo {key}={value}");
        Ok(())
    });

    let both = record.then(echo);
    both.run2("answer", 42)?;

    let consumed = mul_add.clone().consume();
    consumed.run3(1, 2, 3)?;

    let counted = both.and_then({
        let log = Arc::clone(&log);
        move |()| {
            let entries = log.lock().map_err(|_| Fault::computation("log poisoned"))?;
            Ok(entries.len())
        }
    });
    println!("entries after second run: {}", counted.apply2("again", 7)?);
    println!();

    // -------------------------------------------------------------------------
    // Curry
    // -------------------------------------------------------------------------
    println!("4. Currying");
    println!("-----------");

    let sum = Function3::new(|a: i32, b: i32, c: i32| Ok(a + b + c));
    let curried = sum.curry();
    let result = curried.apply1(1)?.apply1(2)?.apply1(3)?;
    println!("sum.curry()(1)(2)(3) = {result}");

    let split = mul_add.curry2().apply2(4, 5)?;
    println!("mul_add.curry2()(4, 5)(6) = {}\n", split.apply1(6)?);

    // -------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------
    println!("5. Tracing");
    println!("----------");

    let slow = Function1::new(|n: u64| {
        std::thread::sleep(std::time::Duration::from_millis(n));
        Ok(n * 2)
    });

    let untraced = slow.clone().untraced();
    println!("untraced(5) = {} (no trace attached)", untraced.apply1(5)?);

    let (value, trace) = slow.traced().named("slow_double").apply1(20)?;
    println!("traced(20)  = {value}");
    println!("trace:        {trace}");

    Ok(())
}
