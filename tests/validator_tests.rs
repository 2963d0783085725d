use futures_util::FutureExt;
use ipaas::api::ApiError;
use ipaas::models::RepoMetadata;
use ipaas::services::{FieldState, RepoValidator, Submission};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

const SLOW: &str = "https://github.com/x/slow";
const FAST: &str = "https://github.com/x/fast";

fn meta_for(repo: &str) -> RepoMetadata {
    RepoMetadata {
        description: format!("metadata of {}", repo),
        default_branch: "main".into(),
        branches: vec!["main".into(), "dev".into()],
    }
}

/// Validator whose backend answers after 5s for URLs containing "slow",
/// rejects URLs containing "bad" and accepts the rest after 10ms.
fn validator() -> (RepoValidator, Arc<Mutex<Vec<String>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&sent);
    let validator = RepoValidator::new(Duration::from_millis(600), move |repo: String| {
        let log = Arc::clone(&log);
        async move {
            log.lock().unwrap().push(repo.clone());
            let delay = if repo.contains("slow") { 5000 } else { 10 };
            sleep(Duration::from_millis(delay)).await;
            if repo.contains("bad") {
                return Err(ApiError::Validation(format!("Invalid url: {}", repo)));
            }
            Ok(meta_for(&repo))
        }
        .boxed()
    });
    (validator, sent)
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_collapse_into_one_request() {
    let (validator, sent) = validator();

    let mut typed = String::new();
    for c in "https://github.com/x/y".chars() {
        typed.push(c);
        assert!(matches!(validator.submit(&typed), Submission::Scheduled(_)));
        sleep(Duration::from_millis(50)).await;
    }
    assert_eq!(validator.state(), FieldState::Pending);

    let state = validator.settled().await;
    assert_eq!(state, FieldState::Valid(meta_for("https://github.com/x/y")));
    assert_eq!(*sent.lock().unwrap(), vec!["https://github.com/x/y".to_string()]);
    assert_eq!(validator.last_sent().as_deref(), Some("https://github.com/x/y"));
}

#[tokio::test(start_paused = true)]
async fn test_same_value_is_sent_once() {
    let (validator, sent) = validator();

    validator.submit(FAST);
    validator.settled().await;
    assert_eq!(validator.submit(FAST), Submission::Ignored);
    assert_eq!(validator.submit(&format!("  {}  ", FAST)), Submission::Ignored);
    sleep(Duration::from_millis(1000)).await;

    assert_eq!(sent.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_empty_input_is_ignored() {
    let (validator, sent) = validator();

    assert_eq!(validator.submit(""), Submission::Ignored);
    assert_eq!(validator.submit("   "), Submission::Ignored);
    sleep(Duration::from_millis(1000)).await;

    assert_eq!(validator.state(), FieldState::Idle);
    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rejection_marks_field_invalid() {
    let (validator, _) = validator();

    validator.submit("https://github.com/x/bad");
    let state = validator.settled().await;

    assert_eq!(state, FieldState::Invalid("Invalid url: https://github.com/x/bad".into()));
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_is_discarded() {
    let (validator, sent) = validator();

    let first = validator.submit(SLOW);
    sleep(Duration::from_millis(700)).await;
    assert_eq!(validator.state(), FieldState::InFlight);

    let second = validator.submit(FAST);
    assert!(matches!((first, second), (Submission::Scheduled(a), Submission::Scheduled(b)) if b > a));
    assert_eq!(validator.settled().await, FieldState::Valid(meta_for(FAST)));

    // the slow answer arrives long after the fast one
    sleep(Duration::from_millis(6000)).await;
    assert_eq!(validator.state(), FieldState::Valid(meta_for(FAST)));
    assert_eq!(*sent.lock().unwrap(), vec![SLOW.to_string(), FAST.to_string()]);
}
