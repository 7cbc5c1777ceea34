//! High-level orchestrator: validate → resolve → probe loop → output.

use crate::{
    cli::{Args, OutputMode},
    error::{Result, UdpingError},
    formatter::{self, Formatter},
    probe,
    stats::{Stats, Summary},
};
use std::{
    net::{Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket},
    time::Duration,
};

/// Execute one fixed-count run as configured by `args`.
pub fn run(args: Args) -> Result<Summary> {
    if matches!(args.output_mode, OutputMode::Normal) {
        println!(
            "\nPinging {}:{} with {} probes:",
            args.host, args.port, args.count
        );
    }
    let fmt: Box<dyn Formatter> = formatter::from_mode(args.output_mode);
    run_with(&args, &*fmt)
}

/// Like [`run`] but reporting through a caller-supplied [Formatter].
///
/// Probe `i + 1` is not sent until probe `i` has resolved; the run
/// yields exactly `args.count` results even under total loss.
pub fn run_with(args: &Args, fmt: &dyn Formatter) -> Result<Summary> {
    validate(args)?;
    let dest = resolve(&args.host, args.port)?;
    let timeout = Duration::from_secs_f64(args.timeout);

    // The endpoint is owned by this run alone; dropping it on any exit
    // path below releases it.
    let socket = bind_for(dest)?;
    let mut stats = Stats::new(dest);

    for seq in 1..=args.count {
        let outcome = probe::probe_once(&socket, dest, seq, timeout);
        let res = stats.feed(seq, outcome);
        fmt.probe(&res);
    }

    let summary = stats.summary();
    fmt.summary(&summary);
    Ok(summary)
}

/// Re-check the CLI preconditions so programmatic callers get the same
/// contract.
fn validate(args: &Args) -> Result<()> {
    if args.count < 1 {
        return Err(UdpingError::Config("count must be >= 1".into()));
    }
    if !args.timeout.is_finite() || args.timeout <= 0.0 {
        return Err(UdpingError::Config("timeout must be > 0".into()));
    }
    Ok(())
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| UdpingError::Config(format!("cannot resolve {host}: {e}")))?;
    addrs
        .next()
        .ok_or_else(|| UdpingError::Config(format!("{host} resolved to no usable address")))
}

fn bind_for(dest: SocketAddr) -> Result<UdpSocket> {
    let any: SocketAddr = if dest.is_ipv4() {
        ([0, 0, 0, 0], 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    Ok(UdpSocket::bind(any)?)
}
