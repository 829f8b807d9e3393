use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

use structopt::StructOpt;
use thiserror::Error;

use suds_metadata::{self as metadata, types::Service, ShortNamingStrategy};

mod config;

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to load config: {0}")]
    ConfigError(#[from] config::Error),

    #[error("Unable to generate metadata: {0}")]
    GenerateError(#[from] metadata::error::Error),

    #[error("Invalid JSON in service descriptions or metadata: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unable to read services or write metadata: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(StructOpt)]
struct Args {
    #[structopt(short, long)]
    config: PathBuf,

    #[structopt(short, long, default_value = "./metadata.json")]
    output: PathBuf,

    /// Override the config's unwrap setting (`true` or `false`)
    #[structopt(long)]
    unwrap: Option<bool>,

    /// JSON array of parsed per-port service descriptions
    input: PathBuf,
}

/// Generates metadata for `input` and writes it to `output`, returning the
/// number of services written.
fn run(config: &Path, input: &Path, output: &Path, unwrap: Option<bool>) -> Result<usize, Error> {
    let config = config::Config::load(config)?;
    let services: Vec<Service> = serde_json::from_str(&fs::read_to_string(input)?)?;

    let mut generator = config.generator(ShortNamingStrategy);
    if let Some(unwrap) = unwrap {
        generator.set_unwrap(unwrap);
    }

    let metadata = generator.generate(&services)?;
    fs::write(output, serde_json::to_string_pretty(&metadata)?)?;

    Ok(metadata.len())
}

#[paw::main]
fn main(args: Args) -> Result<(), Error> {
    env_logger::init();

    let count = run(&args.config, &args.input, &args.output, args.unwrap)?;

    info!(
        "Wrote metadata for {} services to {}",
        count,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SERVICES: &str = include_str!("../../metadata/tests/fixtures/user_service.json");

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new(config: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("config.toml"), config).unwrap();
            fs::write(dir.path().join("services.json"), SERVICES).unwrap();
            Self { dir }
        }

        fn run(&self, unwrap: Option<bool>) -> Result<Value, Error> {
            let output = self.dir.path().join("metadata.json");
            run(
                &self.dir.path().join("config.toml"),
                &self.dir.path().join("services.json"),
                &output,
                unwrap,
            )?;

            Ok(serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap())
        }
    }

    const CONFIG: &str = r#"
unwrap = true

[namespaces]
"http://example.com/svc" = 'App\Service'

[endpoints.UserService]
UserServiceSoap = "http://localhost:8080/users"
"#;

    #[test]
    fn writes_metadata_from_config_and_services() {
        let metadata = Workspace::new(CONFIG).run(None).unwrap();
        let port = &metadata["UserService"]["UserServiceSoap"];

        assert_eq!(port["endpoint"], "http://localhost:8080/users");
        assert_eq!(port["unwrap"], true);
        assert_eq!(
            port["operations"]["get_user_info"]["output"]["headers_fqcn"],
            "App\\Service\\SoapEnvelope\\Headers\\GetUserInfoOutput"
        );
    }

    #[test]
    fn unwrap_flag_overrides_config_both_ways() {
        let workspace = Workspace::new(CONFIG);
        let metadata = workspace.run(Some(false)).unwrap();
        assert_eq!(metadata["UserService"]["UserServiceSoap"]["unwrap"], false);

        let workspace = Workspace::new("[namespaces]\n\"http://example.com/svc\" = 'App'\n");
        let metadata = workspace.run(Some(true)).unwrap();
        assert_eq!(metadata["UserService"]["UserServiceSoap"]["unwrap"], true);
    }

    #[test]
    fn unmapped_namespace_writes_nothing() {
        let workspace = Workspace::new("[namespaces]\n");
        let output = workspace.dir.path().join("metadata.json");

        let error = workspace.run(None).unwrap_err();

        assert!(matches!(error, Error::GenerateError(_)));
        assert!(error.to_string().contains("http://example.com/svc"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_services_file_names_the_step() {
        let workspace = Workspace::new(CONFIG);
        fs::remove_file(workspace.dir.path().join("services.json")).unwrap();

        let error = workspace.run(None).unwrap_err();

        assert!(matches!(error, Error::IoError(_)));
        assert!(error.to_string().starts_with("Unable to read services or write metadata"));
    }
}
