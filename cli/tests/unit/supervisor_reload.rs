//! Supervisor notifier: a non-zero reload is fatal.

use stage1_app_rm::application::services::supervisor;
use stage1_app_rm::domain::SupervisorError;

use crate::helpers::{FakeEnter, RecordingReporter, Reply, identity_for, inactive, ok, output};

#[tokio::test]
async fn zero_exit_is_success() {
    let enter = FakeEnter::new(inactive(), ok());
    let id = identity_for("myapp");

    supervisor::reload(&enter, id.pid, &RecordingReporter::default())
        .await
        .expect("reload");

    let calls = enter.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, 4242);
    assert_eq!(calls[0].1, ["/usr/bin/systemctl", "daemon-reload"]);
}

#[tokio::test]
async fn non_zero_exit_is_fatal() {
    let enter = FakeEnter::new(inactive(), output(1, b"", b"Access denied\n"));
    let id = identity_for("myapp");

    let err = supervisor::reload(&enter, id.pid, &RecordingReporter::default())
        .await
        .expect_err("reload failure");

    assert!(matches!(
        err.downcast_ref::<SupervisorError>(),
        Some(SupervisorError::ReloadFailed { .. })
    ));
    assert!(err.to_string().contains("Access denied"));
}

#[tokio::test]
async fn enter_that_cannot_start_is_fatal() {
    let enter = FakeEnter::with_replies(
        Reply::Output(inactive()),
        Reply::SpawnError("failed to spawn /stage1/enter"),
    );
    let id = identity_for("myapp");

    let err = supervisor::reload(&enter, id.pid, &RecordingReporter::default())
        .await
        .expect_err("spawn failure");

    assert!(matches!(
        err.downcast_ref::<SupervisorError>(),
        Some(SupervisorError::ReloadNotStarted(_))
    ));
}
