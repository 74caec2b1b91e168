use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use mockito::Matcher;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use regex::Regex;

mod stubs;

use stubs::station::{MINIMAL_PAYLOAD, TOKEN};

fn spawn_run(data_dir: &Path) -> Child {
    Command::new(assert_cmd::cargo::cargo_bin("netatmo-display"))
        .env("ND_DATA_DIR", data_dir)
        .env("ND_EPD_PATH", data_dir.join("no-epd"))
        .arg("run")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap()
}

/// Waits for the first iteration to have saved its data.
fn wait_for_data(data_dir: &Path) {
    let deadline = Instant::now() + Duration::from_secs(20);
    while !data_dir.join("data.json").exists() {
        assert!(Instant::now() < deadline, "no poll happened");
        thread::sleep(Duration::from_millis(50));
    }
    thread::sleep(Duration::from_millis(200));
}

fn interrupt(child: &Child) {
    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();
}

fn finish(child: Child) -> (Output, Duration) {
    let started = Instant::now();
    let output = child.wait_with_output().unwrap();
    (output, started.elapsed())
}

fn station_server() -> mockito::ServerGuard {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/getstationsdata")
        .match_query(Matcher::Any)
        .with_body(MINIMAL_PAYLOAD)
        .create();
    server
}

#[test]
fn sigint_during_sleep_exits_cleanly() {
    let server = station_server();
    let tempdir = tempfile::tempdir().unwrap();
    std::fs::write(
        tempdir.path().join("config.json"),
        stubs::station::config(&server.url()),
    )
    .unwrap();
    std::fs::write(tempdir.path().join("token.json"), TOKEN).unwrap();

    let child = spawn_run(tempdir.path());
    wait_for_data(tempdir.path());
    interrupt(&child);
    let (output, elapsed) = finish(child);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");
    assert!(elapsed < Duration::from_secs(10));
    assert!(Regex::new(r"Time \d{2}:\d{2} \| Indoor 21\.5")
        .unwrap()
        .is_match(&stderr));
    assert!(stderr.contains("Received SIGINT, shutting down"), "{stderr}");
}

#[test]
fn second_sigint_exits_while_busy() {
    let server = station_server();
    let tempdir = tempfile::tempdir().unwrap();
    let config = serde_json::json!({
        "client_id": "id",
        "client_secret": "secret",
        "device_id": stubs::station::DEVICE_ID,
        "timezone": "Europe/Paris",
        "display": {"kind": "command", "program": "sleep", "args": ["15"]},
        "api_base_url": server.url(),
    });
    std::fs::write(tempdir.path().join("config.json"), config.to_string()).unwrap();
    std::fs::write(tempdir.path().join("token.json"), TOKEN).unwrap();

    let child = spawn_run(tempdir.path());
    wait_for_data(tempdir.path());
    // The display program is still running; the first signal is only queued
    interrupt(&child);
    thread::sleep(Duration::from_millis(200));
    interrupt(&child);
    let (output, elapsed) = finish(child);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");
    assert!(elapsed < Duration::from_secs(10), "{stderr}");
    assert!(stderr.contains("Received SIGINT again"), "{stderr}");
}
