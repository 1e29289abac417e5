//! gamemath - scalar/SIMD math kernel harness
//!
//! Re-exports the kernel and geometry crates and adds the pieces the
//! `gamemath` binary runs: configuration and the scalar vs SIMD parity check.
//! Throughput benchmarks live with the crates they measure
//! (`cargo bench -p gamemath_kernel`, `cargo bench -p gamemath_geometry`).

pub mod config;
mod error;
pub mod parity;

pub use error::HarnessError;
pub use gamemath_geometry as geometry;
pub use gamemath_kernel as kernel;

use config::AppConfig;

/// Check that both numeric paths agree.
///
/// The report is written through `log`, one line per operation.
pub fn run(config: &AppConfig) -> Result<(), HarnessError> {
    log::info!(
        "Checking parity over {} random samples (seed {}, active path '{}')",
        config.parity.samples,
        config.parity.seed,
        <kernel::Active as kernel::Lanes>::NAME
    );
    let report = parity::run(&config.parity);
    for line in report.to_string().lines() {
        log::info!("{}", line);
    }
    if !report.is_clean() {
        return Err(HarnessError::ParityFailed { operations: report.failures() });
    }
    Ok(())
}
