//! Shared `tracing` setup for the gridbench binaries.
//!
//! Logs go to stderr so stdout stays free for reports.  `RUST_LOG` replaces
//! the default `info` level for the toolkit crates.

use tracing_subscriber::EnvFilter;

pub fn init(bin_target: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("gb_grid=info,gb_bench=info,gb_report=info,{bin_target}=info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
