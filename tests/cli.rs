//! Basic flag parsing tests.

use clap::Parser;
use udping::cli::{Args, OutputMode};

#[test]
fn parse_basic() {
    let a = Args::parse_from(["udping", "127.0.0.1", "-c", "5"]);
    assert_eq!(a.host, "127.0.0.1");
    assert_eq!(a.port, 12000);
    assert_eq!(a.count, 5);
    assert_eq!(a.output_mode, OutputMode::Normal);
}

#[test]
fn defaults() {
    let a = Args::parse_from(["udping", "localhost"]);
    assert_eq!(a.count, 10);
    assert_eq!(a.timeout, 1.0);
    assert_eq!(a.port, 12000);
}

#[test]
fn explicit_port_and_timeout() {
    let a = Args::parse_from(["udping", "localhost", "-p", "9000", "-w", "0.5"]);
    assert_eq!(a.port, 9000);
    assert_eq!(a.timeout, 0.5);
}

#[test]
fn output_mode_json() {
    let a = Args::parse_from(["udping", "127.0.0.1", "-o", "json"]);
    assert_eq!(a.output_mode, OutputMode::Json);
}

#[test]
fn reject_zero_count() {
    let err = Args::try_parse_from(["udping", "127.0.0.1", "-c", "0"]).unwrap_err();
    assert!(err.to_string().contains(">= 1"));
}

#[test]
fn reject_zero_timeout() {
    let err = Args::try_parse_from(["udping", "127.0.0.1", "-w", "0"]).unwrap_err();
    assert!(err.to_string().contains("> 0"));
}

#[test]
fn reject_negative_timeout() {
    let err = Args::try_parse_from(["udping", "127.0.0.1", "--timeout=-1.5"]).unwrap_err();
    assert!(err.to_string().contains("> 0"));
}
