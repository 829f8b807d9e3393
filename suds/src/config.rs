use log::debug;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path, str::FromStr};
use thiserror::Error;

use suds_metadata::{MetadataGenerator, NamingStrategy};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Error parsing config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Generator settings, read from a TOML file.
///
/// ```toml
/// unwrap = true
///
/// [namespaces]
/// "http://example.com/svc" = 'App\Service'
///
/// [base_ns]
/// parts = '\Custom\Parts'
///
/// [endpoints.Svc]
/// PortA = "http://localhost:8080/svc"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub namespaces: HashMap<String, String>,

    #[serde(default)]
    pub base_ns: HashMap<String, String>,

    #[serde(default)]
    pub endpoints: HashMap<String, HashMap<String, String>>,

    #[serde(default)]
    pub unwrap: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        debug!("Loading config from {}", path.as_ref().display());
        fs::read_to_string(path)?.parse()
    }

    pub fn generator<N: NamingStrategy>(&self, naming: N) -> MetadataGenerator<N> {
        let mut generator = MetadataGenerator::new(naming, self.namespaces.clone());
        generator.set_base_ns(&self.base_ns);
        generator.set_unwrap(self.unwrap);

        for (service, ports) in &self.endpoints {
            for (port, endpoint) in ports {
                generator.add_alternative_endpoint(service, port, endpoint);
            }
        }

        generator
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(contents: &str) -> Result<Self, Error> {
        Ok(toml::from_str(contents)?)
    }
}
