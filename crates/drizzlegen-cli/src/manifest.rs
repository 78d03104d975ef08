use anyhow::Result;
use clap::Parser;
use drizzlegen_core::config::DEFAULT_OUTPUT;
use serde::Serialize;

/// Describes the generator to the schema tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: &'static str,
    pub default_output: &'static str,
    pub pretty_name: &'static str,
}

impl Manifest {
    pub fn new() -> Manifest {
        Manifest {
            version: env!("CARGO_PKG_VERSION"),
            default_output: DEFAULT_OUTPUT,
            pretty_name: "Drizzle Schema",
        }
    }
}

impl Default for Manifest {
    fn default() -> Manifest {
        Manifest::new()
    }
}

#[derive(Parser, Debug)]
pub struct ManifestCommand {}

impl ManifestCommand {
    pub(crate) fn run(self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&Manifest::new())?);
        Ok(())
    }
}
