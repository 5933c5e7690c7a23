//! End-to-end behaviour of the removal service against port fakes.

use std::io::ErrorKind;
use std::path::Path;

use stage1_app_rm::application::{RemovalOutcome, remove_app};
use stage1_app_rm::domain::{PodError, SupervisorError, UnitError};

use crate::helpers::{
    FakeEnter, FakeFs, FakePods, Level, MissingPod, POD_ROOT, RecordingReporter, active,
    identity_for, inactive, ok, output, reaper_path, service_path,
};

fn root() -> &'static Path {
    Path::new(POD_ROOT)
}

#[tokio::test]
async fn inactive_app_is_removed_and_supervisor_reloaded() {
    let enter = FakeEnter::new(inactive(), ok());
    let fs = FakeFs::with_units("myapp");
    let reporter = RecordingReporter::default();

    let outcome = remove_app(
        root(),
        &identity_for("myapp"),
        &FakePods::with_apps(&["myapp", "other"]),
        &enter,
        &fs,
        &reporter,
    )
    .await
    .expect("remove");

    assert_eq!(outcome, RemovalOutcome::Removed);
    assert!(!fs.exists(&service_path("myapp")));
    assert!(!fs.exists(&reaper_path("myapp")));
    assert_eq!(enter.subcommands(), ["is-active", "daemon-reload"]);
    assert!(reporter.contains(Level::Info, "removed"));
}

#[tokio::test]
async fn active_app_is_refused_without_side_effects() {
    let enter = FakeEnter::new(active(), ok());
    let fs = FakeFs::with_units("myapp");
    let reporter = RecordingReporter::default();

    let outcome = remove_app(
        root(),
        &identity_for("myapp"),
        &FakePods::with_apps(&["myapp"]),
        &enter,
        &fs,
        &reporter,
    )
    .await
    .expect("refusal is not an error");

    assert_eq!(outcome, RemovalOutcome::StillRunning);
    assert!(fs.attempts.borrow().is_empty());
    assert!(fs.exists(&service_path("myapp")));
    assert_eq!(enter.reload_count(), 0);
    assert_eq!(
        reporter.at(Level::Warn),
        [r#"app "myapp" is still running"#]
    );
}

#[tokio::test]
async fn second_invocation_is_a_successful_no_op() {
    let enter = FakeEnter::new(inactive(), ok());
    let fs = FakeFs::with_units("myapp");
    let pods = FakePods::with_apps(&["myapp"]);
    let reporter = RecordingReporter::default();
    let id = identity_for("myapp");

    let first = remove_app(root(), &id, &pods, &enter, &fs, &reporter)
        .await
        .expect("first");
    let second = remove_app(root(), &id, &pods, &enter, &fs, &reporter)
        .await
        .expect("second");

    assert_eq!(first, RemovalOutcome::Removed);
    assert_eq!(second, RemovalOutcome::Removed);
    assert_eq!(enter.reload_count(), 2);
}

#[tokio::test]
async fn pod_load_failure_stops_before_probing() {
    let enter = FakeEnter::new(inactive(), ok());
    let fs = FakeFs::with_units("myapp");

    let err = remove_app(
        root(),
        &identity_for("myapp"),
        &MissingPod,
        &enter,
        &fs,
        &RecordingReporter::default(),
    )
    .await
    .expect_err("missing pod");

    assert!(err.to_string().contains("failed to load pod"));
    assert!(err.downcast_ref::<PodError>().is_some());
    assert!(enter.calls.borrow().is_empty());
    assert!(fs.attempts.borrow().is_empty());
}

#[tokio::test]
async fn reaper_permission_error_leaves_service_removed_and_skips_reload() {
    let enter = FakeEnter::new(inactive(), ok());
    let fs =
        FakeFs::with_units("myapp").failing(reaper_path("myapp"), ErrorKind::PermissionDenied);

    let err = remove_app(
        root(),
        &identity_for("myapp"),
        &FakePods::with_apps(&["myapp"]),
        &enter,
        &fs,
        &RecordingReporter::default(),
    )
    .await
    .expect_err("permission denied");

    assert!(err.downcast_ref::<UnitError>().is_some());
    assert!(!fs.exists(&service_path("myapp")));
    assert!(fs.exists(&reaper_path("myapp")));
    assert_eq!(enter.reload_count(), 0);
}

#[tokio::test]
async fn reload_failure_happens_after_units_are_gone() {
    let enter = FakeEnter::new(inactive(), output(1, b"", b""));
    let fs = FakeFs::with_units("myapp");

    let err = remove_app(
        root(),
        &identity_for("myapp"),
        &FakePods::with_apps(&["myapp"]),
        &enter,
        &fs,
        &RecordingReporter::default(),
    )
    .await
    .expect_err("reload failure");

    assert!(err.downcast_ref::<SupervisorError>().is_some());
    assert!(fs.files.borrow().is_empty());
}

#[tokio::test]
async fn app_missing_from_manifest_is_only_a_diagnostic() {
    let enter = FakeEnter::new(inactive(), ok());
    let fs = FakeFs::default();
    let reporter = RecordingReporter::default();

    let outcome = remove_app(
        root(),
        &identity_for("ghost"),
        &FakePods::with_apps(&["myapp"]),
        &enter,
        &fs,
        &reporter,
    )
    .await
    .expect("remove");

    assert_eq!(outcome, RemovalOutcome::Removed);
    assert!(reporter.contains(Level::Diag, "not listed in the pod manifest"));
}

#[tokio::test]
async fn other_apps_units_are_untouched() {
    let enter = FakeEnter::new(inactive(), ok());
    let fs = FakeFs::with_units("myapp");
    fs.files.borrow_mut().insert(service_path("other"));
    fs.files.borrow_mut().insert(reaper_path("other"));

    remove_app(
        root(),
        &identity_for("myapp"),
        &FakePods::with_apps(&["myapp", "other"]),
        &enter,
        &fs,
        &RecordingReporter::default(),
    )
    .await
    .expect("remove");

    assert!(fs.exists(&service_path("other")));
    assert!(fs.exists(&reaper_path("other")));
}
