//! E2E tests for `livepoll watch`

mod common;

use std::io::{BufRead, BufReader};
use std::process::Stdio;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use common::TestEnv;

#[test]
fn watch_emits_started_and_changed_events() {
    let env = TestEnv::new();
    env.write_site_file("index.html", "<p>");
    env.set_mtime("index.html", 1_000);

    let mut child = env
        .command(&["watch", "--json", "--interval", "50"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start livepoll watch");

    let stdout = child.stdout.take().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let started = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(started.contains("\"event\":\"watch_started\""), "{}", started);

    // Initial delay is one second; let the baseline poll happen first.
    thread::sleep(Duration::from_millis(1_500));
    env.set_mtime("index.html", 2_000);

    let changed = rx.recv_timeout(Duration::from_secs(10));
    let _ = child.kill();
    let _ = child.wait();

    let changed = changed.expect("no change event");
    assert!(changed.contains("\"event\":\"changed\""), "{}", changed);
    assert!(changed.contains("index.html"), "{}", changed);
}

#[test]
fn watch_rejects_non_numeric_interval() {
    let env = TestEnv::new();

    let result = env.run(&["watch", "--interval", "soon"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 2);
}
