//! End-to-end runs of the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::{net::UdpSocket, thread};
use udping::responder::{DropPolicy, Responder};

#[test]
fn binary_prints_report() {
    let responder = Responder::bind(("127.0.0.1", 0), DropPolicy::None).unwrap();
    let port = responder.local_addr().unwrap().port();
    let server = thread::spawn(move || responder.serve(2));

    Command::cargo_bin("udping")
        .unwrap()
        .args(["127.0.0.1", "-p", &port.to_string(), "-c", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reply from"))
        .stdout(predicate::str::contains("Ping statistics for"))
        .stdout(predicate::str::contains("Sent = 2, Received = 2, Lost = 0"));

    server.join().unwrap().unwrap();
}

#[test]
fn binary_succeeds_under_total_loss() {
    // Loss is a measurement, not a failure: exit status stays zero.
    let sink = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = sink.local_addr().unwrap().port();

    Command::cargo_bin("udping")
        .unwrap()
        .args(["127.0.0.1", "-p", &port.to_string(), "-c", "2", "-w", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Request timed out"))
        .stdout(predicate::str::contains("No response from server."));
}

#[test]
fn binary_rejects_bad_destination() {
    Command::cargo_bin("udping")
        .unwrap()
        .args(["udping.invalid", "-c", "1", "-w", "0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error").or(predicate::str::contains("Config")));
}
