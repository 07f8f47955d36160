use anyhow::{Context, Result};
use rustdft::signal::{collect_samples, time_sequence};
use rustdft::{bench, dft, dft_par, BenchConfig, DftHandler};
use std::f64::consts::PI;
use tracing::Level;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let config = BenchConfig::default();
    config.validate().context("invalid benchmark scenario")?;

    let f = config.frequency;
    let x = collect_samples(
        time_sequence(config.sample_interval, |t: f64| (2.0 * PI * f * t).cos()),
        config.samples,
    );
    let handler: DftHandler<f64> = DftHandler::new(x.len())?;

    let serial = bench::measure("DFT", config.repeats, || dft(&x, &handler))
        .context("serial dft failed")?;
    println!("{serial}");

    let parallel = bench::measure("ParallelDFT", config.repeats, || dft_par(&x, &handler))
        .context("parallel dft failed")?;
    println!("{parallel}");
    Ok(())
}
