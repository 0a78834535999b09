//! End-to-end races over loopback HTTP.

use reqwest::StatusCode;
use std::io::Write;
use std::time::Duration;

use deadline_race::cancel::CancelCause;
use deadline_race::config::load_config;
use deadline_race::http::{ClientError, MessageBody};

mod common;

#[tokio::test]
async fn test_task_finishes_before_client_timeout() {
    let config = common::fast_config();
    let report = common::race(&config, 0).await;

    let response = report.client.expect("client should get a response");
    assert_eq!(response.status, StatusCode::OK);
    let body: MessageBody = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body.message, "success");

    let task = report.server.expect("server should report");
    let done = task.outcome.expect("task should complete");
    assert!(done.elapsed >= Duration::from_millis(common::TASK_MS));
    assert!(!done.cancel_observed);
}

#[tokio::test]
async fn test_client_times_out_and_task_keeps_working() {
    let config = common::fast_config();
    let report = common::race(&config, 1).await;

    assert!(
        matches!(report.client, Err(ClientError::DeadlineExceeded(_))),
        "unexpected client result: {:?}",
        report.client
    );

    let task = report.server.expect("server should report");
    let done = task.outcome.expect("task should ignore the cancel and complete");
    assert!(done.elapsed >= Duration::from_millis(common::TASK_MS));
    assert!(done.cancel_observed);
}

#[tokio::test]
async fn test_client_times_out_and_task_stops() {
    let config = common::fast_config();
    let report = common::race(&config, 2).await;

    assert!(
        matches!(report.client, Err(ClientError::DeadlineExceeded(_))),
        "unexpected client result: {:?}",
        report.client
    );

    let task = report.server.expect("server should report");
    let err = task.outcome.expect_err("task should be canceled");
    assert_eq!(err.cause(), CancelCause::Canceled);
    assert_eq!(err.to_string(), "request canceled");
}

#[tokio::test]
async fn test_race_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [listener]
        bind_address = "127.0.0.1:0"

        [timing]
        tick_ms = 5
        startup_delay_ms = 0
        drain_grace_ms = 200

        [[scenarios]]
        name = "quick"
        server_task_ms = 50
        client_timeout_ms = 2000
        "#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    let report = common::race(&config, 0).await;

    assert_eq!(report.scenario.name, "quick");
    assert!(!report.scenario.stop_on_client_cancel);
    assert_eq!(report.client.unwrap().status, StatusCode::OK);
    assert!(report.server.unwrap().outcome.is_ok());
}
