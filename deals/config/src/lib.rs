use std::collections::HashMap;

use config::{Environment, File, FileFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub logging: Logging,
    pub application: Application,
    pub database: Database,
}

#[derive(Deserialize)]
pub struct Database {
    pub url: String,
}

#[derive(Deserialize)]
pub struct Application {
    pub name: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Logging {
    level: String,
    #[serde(default)]
    crates: HashMap<String, String>,
}

impl Logging {
    /// Renders an `EnvFilter` directive such as `INFO,deals_core=DEBUG`.
    pub fn levels(&self) -> String {
        let mut crate_levels = self.crates.iter()
            .map(|(lib, loglevel)| format!("{lib}={loglevel}"))
            .collect::<Vec<_>>();
        crate_levels.sort();
        std::iter::once(self.level.clone())
            .chain(crate_levels)
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

impl Config {
    fn load() -> Self {
        Self::build(None).expect("Error during config creation")
    }

    fn build(overrides: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(File::from_str(include_str!("../config.yml"), FileFormat::Yaml));
        if let Some(overrides) = overrides {
            builder = builder.add_source(File::from_str(overrides, FileFormat::Yaml));
        }
        builder
            .add_source(Environment::with_prefix("APP")
                .try_parsing(true)
                .separator("_"))
            .add_source(Environment::with_prefix("DEALS")
                .try_parsing(true)
                .separator("_"))
            .build()?
            .try_deserialize()
    }
}
