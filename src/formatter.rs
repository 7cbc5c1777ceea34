//! Pluggable output layer.

use crate::{
    cli::OutputMode,
    stats::{ProbeOutcome, ProbeResult, Summary},
};
use serde_json::to_string;
use std::cell::Cell;

/// Print behaviour contract.
pub trait Formatter {
    fn probe(&self, res: &ProbeResult);
    fn summary(&self, sum: &Summary);
}

/* ---------- Normal text ---------- */

pub struct Normal;
impl Formatter for Normal {
    fn probe(&self, res: &ProbeResult) {
        match &res.outcome {
            ProbeOutcome::Replied { rtt_ms, from, data } => {
                println!("Reply from {from}: data={data} time={rtt_ms:.3}ms")
            }
            ProbeOutcome::TimedOut => println!("Request timed out"),
        }
    }

    fn summary(&self, s: &Summary) {
        println!("\nPing statistics for {}:", s.dest);
        println!(
            "\tPackets: Sent = {}, Received = {}, Lost = {} ({:.1}% loss)",
            s.sent, s.received, s.lost, s.loss_pct
        );
        match &s.rtt {
            Some(rtt) => {
                println!("Approximate round trip times in milli-seconds:");
                println!(
                    "\tMinimum = {:.3}ms, Maximum = {:.3}ms, Average = {:.3}ms",
                    rtt.min_ms, rtt.max_ms, rtt.avg_ms
                );
            }
            None => println!("No response from server."),
        }
    }
}

/* ---------- JSON ---------- */

pub struct Json;
impl Formatter for Json {
    fn probe(&self, res: &ProbeResult) {
        println!("{}", to_string(res).unwrap())
    }
    fn summary(&self, s: &Summary) {
        println!("{}", to_string(s).unwrap())
    }
}

/* ---------- CSV ---------- */

pub struct Csv;
impl Formatter for Csv {
    fn probe(&self, res: &ProbeResult) {
        match &res.outcome {
            ProbeOutcome::Replied { rtt_ms, from, .. } => {
                println!("{},reply,{:.3},{}", res.seq, rtt_ms, from)
            }
            ProbeOutcome::TimedOut => println!("{},timeout,,", res.seq),
        }
    }

    fn summary(&self, s: &Summary) {
        println!("dest,sent,received,lost,loss_pct,min,avg,max");
        let rtt = s
            .rtt
            .map(|r| format!("{:.3},{:.3},{:.3}", r.min_ms, r.avg_ms, r.max_ms))
            .unwrap_or_else(|| ",,".into());
        println!(
            "{},{},{},{},{:.1},{}",
            s.dest, s.sent, s.received, s.lost, s.loss_pct, rtt
        );
    }
}

/* ---------- Markdown table ---------- */

pub struct Md {
    header_done: Cell<bool>,
}

impl Md {
    /// Construct a new Markdown formatter.
    pub fn new() -> Self {
        Self {
            header_done: Cell::new(false),
        }
    }
}

impl Default for Md {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for Md {
    fn probe(&self, res: &ProbeResult) {
        // print header once
        if !self.header_done.replace(true) {
            println!("| seq | status | rtt_ms | from |");
            println!("|-----|--------|--------|------|");
        }

        match &res.outcome {
            ProbeOutcome::Replied { rtt_ms, from, .. } => {
                println!("| {} | ✓ | {:.3} | {} |", res.seq, rtt_ms, from)
            }
            ProbeOutcome::TimedOut => println!("| {} | ✗ | - | - |", res.seq),
        }
    }

    fn summary(&self, s: &Summary) {
        println!("\n### Summary\n");
        println!("| field | value |");
        println!("|-------|-------|");
        println!("| destination | {} |", s.dest);
        println!("| sent | {} |", s.sent);
        println!("| received | {} |", s.received);
        println!("| lost | {} |", s.lost);
        println!("| loss % | {:.1} |", s.loss_pct);
        let rtt = s
            .rtt
            .map(|r| format!("{:.3} / {:.3} / {:.3}", r.min_ms, r.avg_ms, r.max_ms))
            .unwrap_or_else(|| "-".into());
        println!("| min / avg / max (ms) | {rtt} |\n");
    }
}

/* ---------- ANSI-colored TTY ---------- */

pub struct Color;
impl Formatter for Color {
    fn probe(&self, res: &ProbeResult) {
        let green = "\x1b[32m";
        let red = "\x1b[31m";
        let reset = "\x1b[0m";
        match &res.outcome {
            ProbeOutcome::Replied { rtt_ms, from, data } => println!(
                "{green}Reply{reset} from {from}: data={data} time={rtt_ms:.3}ms"
            ),
            ProbeOutcome::TimedOut => println!("{red}Request timed out{reset}"),
        }
    }

    fn summary(&self, s: &Summary) {
        let ok_color = "\x1b[32m";
        let bad_color = "\x1b[31m";
        let reset = "\x1b[0m";

        let color = if s.loss_pct == 0.0 { ok_color } else { bad_color };
        println!("\nPing statistics for {}:", s.dest);
        println!(
            "\tPackets: Sent = {}, Received = {}, Lost = {} ({color}{:.1}%{reset} loss)",
            s.sent, s.received, s.lost, s.loss_pct
        );
        match &s.rtt {
            Some(rtt) => {
                println!("Approximate round trip times in milli-seconds:");
                println!(
                    "\tMinimum = {:.3}ms, Maximum = {:.3}ms, Average = {:.3}ms",
                    rtt.min_ms, rtt.max_ms, rtt.avg_ms
                );
            }
            None => println!("{bad_color}No response from server.{reset}"),
        }
    }
}

/* ---------- Factory ---------- */

pub fn from_mode(mode: OutputMode) -> Box<dyn Formatter> {
    match mode {
        OutputMode::Normal => Box::new(Normal),
        OutputMode::Json => Box::new(Json),
        OutputMode::Csv => Box::new(Csv),
        OutputMode::Md => Box::new(Md::new()),
        OutputMode::Color => Box::new(Color),
    }
}
