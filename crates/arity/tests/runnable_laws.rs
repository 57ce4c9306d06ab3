//! Property tests for the runnable family.
//!
//! Each runnable under test appends a rendering of its inputs to a shared log,
//! so the laws compare logs rather than return values.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use compositional_arity::prelude::*;
use proptest::prelude::*;

type Log = Arc<Mutex<Vec<String>>>;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,100}"
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

fn record3(log: &Log) -> Runnable3<String, i64, String> {
    let log = Arc::clone(log);
    Runnable3::new(move |a: String, b: i64, c: String| {
        log.lock().unwrap().push(format!("{a}|{b}|{c}"));
        Ok(())
    })
}

fn record4(log: &Log) -> Runnable4<i64, i64, i64, i64> {
    let log = Arc::clone(log);
    Runnable4::new(move |a: i64, b: i64, c: i64, d: i64| {
        log.lock().unwrap().push(format!("{a},{b},{c},{d}"));
        Ok(())
    })
}

/// Faults on empty-after-trim input, otherwise records it.
fn strict(log: &Log) -> Runnable1<String> {
    let log = Arc::clone(log);
    Runnable1::new(move |s: String| {
        if s.trim().is_empty() {
            return Err(Fault::computation("blank"));
        }
        log.lock().unwrap().push(s);
        Ok(())
    })
}

#[test]
fn test_arity_matches_type() {
    let log = Log::default();
    assert_eq!(Runnable0::new(|| Ok(())).arity(), 0);
    assert_eq!(strict(&log).arity(), 1);
    assert_eq!(Runnable2::new(|_: u8, _: u8| Ok(())).arity(), 2);
    assert_eq!(record3(&log).arity(), 3);
    assert_eq!(record4(&log).arity(), 4);
    assert_eq!(
        Runnable5::new(|_: u8, _: u8, _: u8, _: u8, _: u8| Ok(())).arity(),
        5
    );
    assert_eq!(
        Runnable6::new(|_: u8, _: u8, _: u8, _: u8, _: u8, _: u8| Ok(())).arity(),
        6
    );
    assert_eq!(
        Runnable7::new(|_: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8| Ok(())).arity(),
        7
    );
    assert_eq!(
        Runnable8::new(|_: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8, _: u8| Ok(())).arity(),
        8
    );
}

#[test]
fn test_blank_input_faults() {
    let log = Log::default();
    assert_eq!(
        strict(&log).run1("  ".to_string()),
        Err(Fault::computation("blank"))
    );
    assert!(entries(&log).is_empty());
}

proptest! {
    #[test]
    fn test_compose_substitutes_slot(a in word(), b in any::<i64>(), c in word()) {
        let direct = Log::default();
        record3(&direct).run3(a.clone(), b, c.to_uppercase()).unwrap();

        let composed = Log::default();
        record3(&composed)
            .compose3(|s: String| Ok(s.to_uppercase()))
            .run3(a, b, c)
            .unwrap();
        prop_assert_eq!(entries(&composed), entries(&direct));
    }

    #[test]
    fn test_swap_is_involutive(xs in prop::array::uniform4(any::<i64>())) {
        let [a, b, c, d] = xs;
        let direct = Log::default();
        record4(&direct).run4(a, b, c, d).unwrap();

        let twice = Log::default();
        record4(&twice).swap2().swap2().run4(a, b, c, d).unwrap();
        record4(&twice).swap3().swap3().run4(a, b, c, d).unwrap();

        let expected = vec![entries(&direct)[0].clone(); 2];
        prop_assert_eq!(entries(&twice), expected);
    }

    #[test]
    fn test_partial_binds_slot(a in word(), b in any::<i64>(), c in word()) {
        let direct = Log::default();
        record3(&direct).run3(a.clone(), b, c.clone()).unwrap();

        let bound = Log::default();
        record3(&bound).partial2(b).run2(a.clone(), c.clone()).unwrap();
        record3(&bound).partial3(c.clone()).partial1(a.clone()).run1(b).unwrap();
        record3(&bound).partial1(a).partial1(b).partial1(c).run0().unwrap();

        let expected = vec![entries(&direct)[0].clone(); 3];
        prop_assert_eq!(entries(&bound), expected);
    }

    #[test]
    fn test_then_runs_both_in_order(a in word(), b in any::<i64>(), c in word()) {
        let log = Log::default();
        let first = record3(&log);
        let second = record3(&log).compose1(|s: String| Ok(s.to_uppercase()));
        first.then(second).run3(a.clone(), b, c.clone()).unwrap();

        let expected = vec![format!("{a}|{b}|{c}"), format!("{}|{b}|{c}", a.to_uppercase())];
        prop_assert_eq!(entries(&log), expected);
    }

    #[test]
    fn test_then_skips_after_fault(s in word()) {
        let log = Log::default();
        let blank = " ".repeat(s.len());
        let chained = strict(&log).then(strict(&log));
        prop_assert!(chained.run1(blank).is_err());
        prop_assert!(entries(&log).is_empty());

        chained.run1(s.clone()).unwrap();
        prop_assert_eq!(entries(&log), vec![s.clone(), s]);
    }

    #[test]
    fn test_and_then_lifts_to_function(a in word(), b in any::<i64>(), c in word()) {
        let log = Log::default();
        let counted = record3(&log).and_then({
            let log = Arc::clone(&log);
            move |()| Ok(log.lock().unwrap().len())
        });
        prop_assert_eq!(counted.apply3(a.clone(), b, c.clone()), Ok(1));
        prop_assert_eq!(counted.apply3(a, b, c), Ok(2));
    }

    #[test]
    fn test_handle_skipped_when_ok(s in word()) {
        let log = Log::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let guarded = strict(&log).handle(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Runnable1::new(|_: String| Ok(()))
        });
        guarded.run1(s.clone()).unwrap();
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
        prop_assert_eq!(entries(&log), vec![s]);
    }

    #[test]
    fn test_handle_once_per_fault(n in 1usize..100) {
        let log = Log::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let fallback_log = Arc::clone(&log);
        let guarded = strict(&log).handle(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            let log = Arc::clone(&fallback_log);
            Runnable1::new(move |s: String| {
                log.lock().unwrap().push(format!("fallback:{}", s.len()));
                Ok(())
            })
        });
        guarded.run1(" ".repeat(n)).unwrap();
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        prop_assert_eq!(entries(&log), vec![format!("fallback:{n}")]);
    }

    #[test]
    fn test_handle_without_fallback(n in 1usize..100) {
        let log = Log::default();
        let guarded = strict(&log).handle(|_| -> Option<Runnable1<String>> { None });
        let fault = guarded.run1(" ".repeat(n)).unwrap_err();
        prop_assert!(fault.is_configuration());
    }

    #[test]
    fn test_curry_matches_direct(xs in prop::array::uniform4(any::<i64>())) {
        let [a, b, c, d] = xs;
        let direct = Log::default();
        record4(&direct).run4(a, b, c, d).unwrap();

        let curried = Log::default();
        let last = record4(&curried)
            .curry()
            .apply1(a)
            .and_then(|g| g.apply1(b))
            .and_then(|h| h.apply1(c))
            .unwrap();
        prop_assert_eq!(last.arity(), 1);
        last.run1(d).unwrap();
        record4(&curried).curry2().apply2(a, b).unwrap().run2(c, d).unwrap();

        let expected = vec![entries(&direct)[0].clone(); 2];
        prop_assert_eq!(entries(&curried), expected);
    }

    #[test]
    fn test_widen_ignores_extra(a in word(), b in any::<i64>(), c in word(), extra in word()) {
        let direct = Log::default();
        record3(&direct).run3(a.clone(), b, c.clone()).unwrap();

        let widened = Log::default();
        record3(&widened).widen::<String>().run4(a, b, c, extra).unwrap();
        prop_assert_eq!(entries(&widened), entries(&direct));
    }
}
