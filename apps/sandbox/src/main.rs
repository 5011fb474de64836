mod logger;
mod settings;

use anyhow::{Context, Result};
use impulse::physics::{Particle, Real};
use log::info;
use logger::create_logger;
use settings::Settings;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sandbox", about = "Steps a single particle and logs its trajectory")]
struct Options {
    /// Settings file to load instead of sandbox.toml
    #[structopt(short, long, parse(from_os_str))]
    settings: Option<PathBuf>,

    /// Number of ticks to simulate, overriding the settings file
    #[structopt(long)]
    steps: Option<usize>,
}

fn main() -> Result<()> {
    create_logger()?;
    let options = Options::from_args();

    let settings = match options.settings {
        Some(path) => Settings::from_path(path)?,
        None => Settings::load_current_settings()?,
    };
    let steps = options.steps.unwrap_or(settings.steps);

    let mut particle = settings
        .particle
        .to_particle()
        .context("Failed to create particle from settings")?;

    info!(
        "Simulating {} steps of {}s each from {:?}",
        steps, settings.time_step, particle.position
    );
    run(&mut particle, settings.time_step, steps)?;
    info!(
        "Finished at position {:?} with velocity {:?}",
        particle.position, particle.velocity
    );

    Ok(())
}

fn run(particle: &mut Particle, time_step: Real, steps: usize) -> Result<()> {
    for step in 0..steps {
        particle
            .integrate(time_step)
            .with_context(|| format!("Failed to integrate step {}", step))?;
        log::debug!(
            "Step {}: position {:?}, velocity {:?}",
            step,
            particle.position,
            particle.velocity
        );
    }
    Ok(())
}
