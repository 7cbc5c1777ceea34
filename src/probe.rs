//! Single-cycle UDP probe: format a payload, send one datagram, wait
//! for the echo until a deadline.
//!
//! A run is strictly lockstep, so at most one probe is ever in flight
//! and replies normally correlate by arrival order. Echoed payloads
//! that still parse are additionally checked against the in-flight
//! sequence number, so a straggler from an already-expired probe is
//! never credited to the wrong cycle.

use crate::stats::ProbeOutcome;
use chrono::{Local, NaiveTime};
use std::{
    io,
    net::{SocketAddr, UdpSocket},
    time::{Duration, Instant},
};

/// Largest reply datagram we accept.
const MAX_REPLY: usize = 1024;

/// Render the wire payload for `seq` at the current wall-clock time.
///
/// Wall-clock only appears inside the payload text; RTT accounting
/// uses [Instant] throughout.
pub fn payload(seq: usize) -> String {
    payload_at(seq, Local::now().time())
}

/// [`payload`] with an explicit timestamp: `Ping <seq> <HH:MM:SS>`.
pub fn payload_at(seq: usize, time: NaiveTime) -> String {
    format!("Ping {} {}", seq, time.format("%H:%M:%S"))
}

/// Extract the embedded sequence number from an echoed payload.
///
/// The echo peer may transform the text (the stock responder
/// upper-cases it), so the leading word is matched case-insensitively.
/// Returns `None` when the reply does not look like a ping payload.
pub fn parse_seq(text: &str) -> Option<usize> {
    let mut words = text.split_whitespace();
    if !words.next()?.eq_ignore_ascii_case("ping") {
        return None;
    }
    words.next()?.parse().ok()
}

/// Run one send/await cycle against `dest`.
///
/// Transport failures count as loss rather than aborting: the caller
/// gets exactly one outcome per sequence number no matter what the
/// network does.
pub fn probe_once(
    socket: &UdpSocket,
    dest: SocketAddr,
    seq: usize,
    timeout: Duration,
) -> ProbeOutcome {
    let text = payload(seq);
    let departure = Instant::now();

    if socket.send_to(text.as_bytes(), dest).is_err() {
        return ProbeOutcome::TimedOut;
    }
    await_reply(socket, seq, departure, timeout)
}

/// Block until a reply for `seq` arrives or the deadline passes.
fn await_reply(
    socket: &UdpSocket,
    seq: usize,
    departure: Instant,
    timeout: Duration,
) -> ProbeOutcome {
    let deadline = departure + timeout;
    let mut buf = [0u8; MAX_REPLY];

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || socket.set_read_timeout(Some(remaining)).is_err() {
            return ProbeOutcome::TimedOut;
        }

        match socket.recv_from(&mut buf) {
            Ok((len, from)) => {
                let arrival = Instant::now();
                let data = String::from_utf8_lossy(&buf[..len]).into_owned();
                // A reply carrying an earlier sequence number belongs to
                // a probe already declared lost; keep waiting for ours.
                if matches!(parse_seq(&data), Some(n) if n != seq) {
                    continue;
                }
                let rtt_ms = arrival.duration_since(departure).as_secs_f64() * 1_000.0;
                return ProbeOutcome::Replied { rtt_ms, from, data };
            }
            // Deadline expiry surfaces as WouldBlock/TimedOut; re-check
            // the clock so an early wakeup cannot shorten the window.
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                continue;
            }
            // Any other receive failure is a transport fault: loss.
            Err(_) => return ProbeOutcome::TimedOut,
        }
    }
}
