#![cfg(feature = "async")]
//! Integration tests for the async Either operators.

use railway::container::{Either, Outcome};
use railway::lift::ContainerFutureExt;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// A cache lookup: a hit is the value, a miss carries the key back.
async fn cached(key: &'static str) -> Either<usize, &'static str> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if key.starts_with("hot") { Either::Value(key.len()) } else { Either::Other(key) }
}

async fn load(key: &'static str) -> usize {
    tokio::time::sleep(Duration::from_millis(1)).await;
    key.len() * 100
}

#[rstest]
#[case("hot-key", 7)]
#[case("cold", 400)]
#[tokio::test]
async fn test_cache_miss_falls_back_to_load(#[case] key: &'static str, #[case] expected: usize) {
    let value = cached(key)
        .lift_either()
        .else_map_async(load)
        .value_or(0)
        .await;
    assert_eq!(value, expected);
}

#[rstest]
#[tokio::test]
async fn test_hit_never_loads() {
    let loaded = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&loaded);
    let value = cached("hot")
        .lift_either()
        .else_map_async(move |key| {
            flag.store(true, Ordering::SeqCst);
            load(key)
        })
        .await;
    assert_eq!(value, Either::Value(3));
    assert!(!loaded.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn test_pending_map_and_filter() {
    let result = cached("hot-and-long")
        .lift_either()
        .map(|length| length * 2)
        .filter(|length| *length < 10, "too long")
        .await;
    assert_eq!(result, Either::Other("too long"));
}

#[rstest]
#[tokio::test]
async fn test_then_async_and_map_other() {
    let result = Either::<i32, &str>::Value(2)
        .then_async(|x| async move { if x > 1 { Either::Other("big") } else { Either::Value(x) } })
        .map_other(str::len)
        .await;
    assert_eq!(result, Either::Other(3));
}

#[rstest]
#[tokio::test]
async fn test_and_async_combines_values() {
    let result = cached("hot")
        .lift_either()
        .and_async(|| cached("hotter"), |a, b| a + b)
        .await;
    assert_eq!(result, Either::Value(9));
}

#[rstest]
#[tokio::test]
async fn test_pending_into_outcome() {
    let outcome = cached("cold").lift_either().into_outcome().await;
    assert_eq!(outcome, Outcome::Failure("cold"));
}

#[rstest]
#[tokio::test]
async fn test_fold_and_predicates() {
    assert!(cached("hot").lift_either().is_value().await);
    assert!(cached("cold").lift_either().is_other().await);

    let described = cached("cold")
        .lift_either()
        .fold(|length| format!("hit {length}"), |key| format!("miss {key}"))
        .await;
    assert_eq!(described, "miss cold");
}
