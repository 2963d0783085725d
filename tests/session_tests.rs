/// Tests for the refresh-then-replay session guard
use ipaas::api::ApiError;
use ipaas::services::SessionGuard;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

fn expired() -> ApiError {
    ApiError::SessionExpired("Access token is expired".into())
}

#[tokio::test]
async fn test_expired_call_is_refreshed_and_replayed_with_same_args() {
    let guard = SessionGuard::new();
    let refreshes = AtomicUsize::new(0);
    let calls = Mutex::new(Vec::new());
    let payload = String::from("{\"repo\":\"https://github.com/x/y\"}");

    let result = guard
        .run(
            || {
                let mut seen = calls.lock().unwrap();
                seen.push(payload.clone());
                let first = seen.len() == 1;
                async move {
                    if first {
                        Err(expired())
                    } else {
                        Ok("created")
                    }
                }
            },
            || {
                refreshes.fetch_add(1, Ordering::SeqCst);
                async { Ok(()) }
            },
        )
        .await;

    assert_eq!(result.unwrap(), "created");
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    let seen = calls.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], seen[1]);
    assert_eq!(guard.epoch(), 1);
}

#[tokio::test]
async fn test_second_expiry_gives_up() {
    let guard = SessionGuard::new();
    let actions = AtomicUsize::new(0);
    let refreshes = AtomicUsize::new(0);

    let result: Result<(), ApiError> = guard
        .run(
            || {
                actions.fetch_add(1, Ordering::SeqCst);
                async { Err(expired()) }
            },
            || {
                refreshes.fetch_add(1, Ordering::SeqCst);
                async { Ok(()) }
            },
        )
        .await;

    assert!(result.unwrap_err().is_session_expired());
    assert_eq!(actions.load(Ordering::SeqCst), 2);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_refresh_is_not_replayed() {
    let guard = SessionGuard::new();
    let actions = AtomicUsize::new(0);

    let result: Result<(), ApiError> = guard
        .run(
            || {
                actions.fetch_add(1, Ordering::SeqCst);
                async { Err(expired()) }
            },
            || async { Err(ApiError::RefreshFailed("Refresh token is expired".into())) },
        )
        .await;

    match result {
        Err(ApiError::RefreshFailed(msg)) => assert_eq!(msg, "Refresh token is expired"),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(actions.load(Ordering::SeqCst), 1);
    assert_eq!(guard.epoch(), 0);
}

#[tokio::test]
async fn test_other_errors_skip_refresh() {
    let guard = SessionGuard::new();
    let refreshes = AtomicUsize::new(0);

    let result: Result<(), ApiError> = guard
        .run(
            || async {
                Err(ApiError::Rejected {
                    code: Some(400),
                    message: "Invalid db type, must be mysql, mariadb or mongodb".into(),
                })
            },
            || {
                refreshes.fetch_add(1, Ordering::SeqCst);
                async { Ok(()) }
            },
        )
        .await;

    assert_eq!(result.unwrap_err().code(), Some(400));
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_concurrent_expiries_share_one_refresh() {
    let guard = SessionGuard::new();
    let refreshed = AtomicBool::new(false);
    let refreshes = AtomicUsize::new(0);

    let (guard, refreshed, refreshes_ref) = (&guard, &refreshed, &refreshes);
    let call = move || {
        guard.run(
            move || {
                let ok = refreshed.load(Ordering::SeqCst);
                async move {
                    if ok {
                        Ok(())
                    } else {
                        Err(expired())
                    }
                }
            },
            move || async move {
                refreshes_ref.fetch_add(1, Ordering::SeqCst);
                // let the other caller reach the refresh step
                tokio::task::yield_now().await;
                refreshed.store(true, Ordering::SeqCst);
                Ok(())
            },
        )
    };

    let (a, b) = tokio::join!(call(), call());
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(guard.epoch(), 1);
}
