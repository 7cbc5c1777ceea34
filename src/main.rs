//! Binary entry point for **udping-rs**.
//!
//! * Parses CLI arguments.
//! * Runs the probing engine.
//! * On **Windows**: requests a 1 ms system timer (`timeBeginPeriod`)
//!   so sub-second receive deadlines and millisecond RTTs are not
//!   quantised to the default scheduler tick.

use clap::Parser;
use std::process::ExitCode;
use udping::{cli::Args, engine, error::Result};

#[cfg(windows)]
mod win_timer {
    //! Lightweight FFI wrapper for high-resolution timing.

    #[link(name = "winmm")]
    unsafe extern "system" {
        fn timeBeginPeriod(period: u32) -> u32;
        fn timeEndPeriod(period: u32) -> u32;
    }

    pub struct HighResTimerGuard {
        period: Option<u32>,
    }

    impl HighResTimerGuard {
        pub fn enable(period: u32) -> Self {
            let ok = unsafe { timeBeginPeriod(period) } == 0;
            Self {
                period: ok.then_some(period),
            }
        }
    }

    impl Drop for HighResTimerGuard {
        fn drop(&mut self) {
            if let Some(period) = self.period {
                unsafe { timeEndPeriod(period) };
            }
        }
    }
}

fn main() -> Result<ExitCode> {
    #[cfg(windows)]
    let _timer_guard = win_timer::HighResTimerGuard::enable(1);

    let args = Args::parse();
    engine::run(args)?;

    // Packet loss is measured, not fatal: once the report is out the
    // run counts as a success.
    Ok(ExitCode::SUCCESS)
}
