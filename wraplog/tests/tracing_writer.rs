//! Host tracing output routed into the support log through `MakeWriter`.

use std::fs;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use tracing::Level;
use wraplog::{LogConfig, LogSink, WrapPolicy};

#[test]
fn tracing_events_land_as_tagged_lines() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("support.log");
    let sink = LogSink::at(&path);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.logger(Some("Updater")))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(version = "2.4.1", "update available");
        tracing::warn!("signature check skipped");
    });

    let contents = fs::read_to_string(&path).expect("read log");
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "one line per event, got: {contents}");
    assert!(lines[0].starts_with("[Updater] "));
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("update available"));
    assert!(lines[0].contains("version=\"2.4.1\""));
    assert!(lines[1].contains("WARN"));
    assert!(lines[1].ends_with("signature check skipped"));
}

#[test]
fn tracing_into_unwritable_log_is_silent() {
    let dir = TempDir::new().expect("tempdir");
    let sink = LogSink::at(dir.path());

    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.logger(Some("Updater")))
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("nowhere to go");
    });

    assert!(dir.path().is_dir());
}

#[test]
fn wrap_while_tracing_into_same_log_completes() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("support.log");
    fs::write(&path, format!("{}\n", "z".repeat(99)).repeat(20)).expect("write");
    let sink = LogSink::new(LogConfig {
        path: Some(path.clone()),
        max_bytes: 1024,
        policy: WrapPolicy::KeepTail { bytes: 100 },
    });

    let (done_tx, done_rx) = mpsc::channel();
    let worker_sink = sink.clone();
    thread::spawn(move || {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(worker_sink.logger(Some("Host")))
            .without_time()
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            worker_sink.wrap_logs_if_necessary();
        });
        let _ = done_tx.send(());
    });

    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("wrap_logs_if_necessary must return while tracing feeds the same log");

    let contents = fs::read_to_string(&path).expect("read log");
    assert!(contents.len() < 1024, "log must have been trimmed, got {} bytes", contents.len());
    assert!(contents.contains("[Host] "), "wrap notice should land after the lock is released");
    assert!(contents.contains("log file wrapped"));
}
