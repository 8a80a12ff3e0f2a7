#![cfg(feature = "async")]
//! Integration tests for the async Outcome operators.
//!
//! A realistic flavour: each step stands in for an I/O call that resolves
//! after a short delay, and failures must stop the chain before any later
//! I/O is started.

use railway::Error;
use railway::container::{Outcome, TextOutcome};
use railway::lift::{AsyncOutcome, ContainerFutureExt};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    balance: i64,
}

async fn fetch_account(id: u32) -> Outcome<Account> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if id == 0 {
        Outcome::fail("account 0 does not exist")
    } else {
        Outcome::Success(Account { id, balance: i64::from(id) * 100 })
    }
}

async fn withdraw(account: Account, amount: i64) -> Outcome<Account> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    if account.balance < amount {
        Outcome::fail(format!("insufficient funds in {}", account.id))
    } else {
        Outcome::Success(Account { balance: account.balance - amount, ..account })
    }
}

// =============================================================================
// Chains
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_fetch_then_withdraw_succeeds() {
    let remaining = fetch_account(2)
        .lift_outcome()
        .then_async(|account| withdraw(account, 50))
        .map(|account| account.balance)
        .value_or(-1)
        .await;
    assert_eq!(remaining, 150);
}

#[rstest]
#[tokio::test]
async fn test_first_failure_stops_later_io() {
    let withdrawals = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&withdrawals);

    let outcome = fetch_account(0)
        .lift_outcome()
        .then_async(move |account| {
            counter.fetch_add(1, Ordering::SeqCst);
            withdraw(account, 50)
        })
        .await;

    assert_eq!(outcome, Outcome::fail("account 0 does not exist"));
    assert_eq!(withdrawals.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_else_map_recovers_pending_failure() {
    let recovered = async { Outcome::<&str, &str>::Failure("e") }
        .lift_outcome()
        .else_map(|_| "recovered")
        .value_or("x")
        .await;
    assert_eq!(recovered, "recovered");
}

#[rstest]
#[tokio::test]
async fn test_else_then_async_retries() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let account = fetch_account(0)
        .lift_outcome()
        .else_then_async(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            fetch_account(1)
        })
        .await;
    assert_eq!(account, Outcome::Success(Account { id: 1, balance: 100 }));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_else_tap_async_logs_failure() {
    let logged = Arc::new(std::sync::Mutex::new(String::new()));
    let sink = Arc::clone(&logged);
    let outcome = fetch_account(0)
        .lift_outcome()
        .else_tap_async(move |error| {
            let message = error.message().to_string();
            async move {
                if let Ok(mut guard) = sink.lock() {
                    *guard = message;
                }
            }
        })
        .await;
    assert!(outcome.is_failure());
    assert_eq!(logged.lock().unwrap().as_str(), "account 0 does not exist");
}

// =============================================================================
// Combine and Filter
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_and_async_combines_two_fetches() {
    let total = fetch_account(1)
        .lift_outcome()
        .and_async(|| fetch_account(2), |left, right| left.balance + right.balance)
        .await;
    assert_eq!(total, Outcome::Success(300));
}

#[rstest]
#[tokio::test]
async fn test_and_async_left_failure_wins() {
    let total = async { Outcome::<i32, &str>::Failure("a") }
        .lift_outcome()
        .and_async(|| async { Outcome::<i32, &str>::Failure("b") }, |a, b| a + b)
        .await;
    assert_eq!(total, Outcome::Failure("a"));
}

#[rstest]
#[case(3, Outcome::Failure("not even"))]
#[case(4, Outcome::Success(4))]
#[tokio::test]
async fn test_filter_async(#[case] input: i32, #[case] expected: Outcome<i32, &'static str>) {
    let result = Outcome::<i32, &str>::Success(input)
        .filter_async(
            |x| {
                let even = x % 2 == 0;
                async move { even }
            },
            "not even",
        )
        .await;
    assert_eq!(result, expected);
}

// =============================================================================
// Interop and Terminals
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_pending_into_text() {
    let text: TextOutcome<Account> = fetch_account(0).lift_outcome().into_text().await;
    assert_eq!(text, Outcome::Failure("account 0 does not exist".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_pending_map_failure_and_into_result() {
    let result = fetch_account(0)
        .lift_outcome()
        .map_failure(|error: Error| error.message().len())
        .into_result()
        .await;
    assert_eq!(result, Err("account 0 does not exist".len()));
}

#[rstest]
#[tokio::test]
async fn test_fold_async_runs_taken_branch() {
    let message = AsyncOutcome::new(fetch_account(3))
        .fold_async(
            |account| async move { format!("balance {}", account.balance) },
            |error| async move { error.to_string() },
        )
        .await;
    assert_eq!(message, "balance 300");
}

#[rstest]
#[tokio::test]
async fn test_is_success_and_is_failure() {
    assert!(fetch_account(1).lift_outcome().is_success().await);
    assert!(fetch_account(0).lift_outcome().is_failure().await);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_spawned_chain() {
    let handle = tokio::spawn(async {
        fetch_account(5)
            .lift_outcome()
            .then_async(|account| withdraw(account, 200))
            .map(|account| account.balance)
            .value_or(0)
            .await
    });
    assert_eq!(handle.await.unwrap(), 300);
}
