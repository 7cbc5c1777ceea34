//! Standalone echo peer (**udping-echo**): the collaborating end of
//! the probe exchange, with optional simulated loss.

use clap::Parser;
use udping::{
    error::Result,
    responder::{DropPolicy, Responder},
};

/// Echo-peer CLI arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Port to listen on (`-p`)
    #[arg(short, long, default_value_t = 12000)]
    port: u16,

    /// Probability of silently dropping an incoming probe
    #[arg(long, default_value_t = 0.0, value_parser = parse_rate)]
    drop_rate: f64,
}

fn parse_rate(s: &str) -> std::result::Result<f64, String> {
    let rate: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err("drop rate must be within 0.0..=1.0".into())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let policy = if args.drop_rate > 0.0 {
        DropPolicy::Random(args.drop_rate)
    } else {
        DropPolicy::None
    };

    let responder = Responder::bind(("0.0.0.0", args.port), policy)?;
    println!("Echoing on {}", responder.local_addr()?);
    responder.run()?;
    Ok(())
}
