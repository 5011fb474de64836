//! Handles loading, serialization, deserialization, and generation of the settings file
use anyhow::Result;
use impulse::physics::{Particle, Real, Vector3};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Seconds simulated per tick
    pub time_step: Real,
    pub steps: usize,
    pub particle: ParticleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            steps: 120,
            particle: ParticleSettings::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticleSettings {
    pub position: [Real; 3],
    pub velocity: [Real; 3],
    pub acceleration: [Real; 3],
    pub damping: Real,
    pub mass: Real,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            velocity: [2.0, 10.0, 0.0],
            acceleration: [0.0, -9.81, 0.0],
            damping: 0.999,
            mass: 1.0,
        }
    }
}

impl ParticleSettings {
    pub fn to_particle(&self) -> Result<Particle> {
        let [px, py, pz] = self.position;
        let [vx, vy, vz] = self.velocity;
        let [ax, ay, az] = self.acceleration;
        let particle = Particle::new(
            Vector3::new(px, py, pz),
            Vector3::new(vx, vy, vz),
            Vector3::new(ax, ay, az),
            self.damping,
        )
        .with_mass(self.mass)?;
        Ok(particle)
    }
}

impl Settings {
    pub const SETTINGS_FILE: &'static str = "sandbox.toml";

    pub fn load_current_settings() -> Result<Self> {
        let settings_path = Path::new(Self::SETTINGS_FILE);
        if !settings_path.exists() {
            Settings::generate_settings_file(settings_path)?;
        }
        let settings = Settings::from_path(settings_path)?;
        Ok(settings)
    }

    pub fn from_path<P: AsRef<Path> + Into<PathBuf>>(path: P) -> Result<Settings> {
        let path_str = path.as_ref().display().to_string();
        debug!("Loading settings file: {}", &path_str);
        let mut config = config::Config::default();
        let config_file = config::File::with_name(&path_str);
        config.merge(config_file)?;
        let settings: Settings = config.try_into()?;
        Ok(settings)
    }

    pub fn generate_settings_file<P: AsRef<Path> + Into<PathBuf> + Copy>(path: P) -> Result<()> {
        let settings = Self::default();
        let toml = toml::to_string(&settings)?;

        let mut file = File::create(&path)?;
        file.write_all(toml.as_bytes())?;

        debug!(
            "Generated settings file: {}",
            path.as_ref().display().to_string()
        );

        Ok(())
    }
}
