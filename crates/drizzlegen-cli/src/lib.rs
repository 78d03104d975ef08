mod generate;
pub use generate::GenerateCommand;

mod logging;

mod manifest;
pub use manifest::{Manifest, ManifestCommand};

mod theme;

use anyhow::Result;
use clap::Parser;

/// Parse and execute CLI commands from command-line arguments
pub fn parse_and_run() -> Result<()> {
    run(Cli::parse())
}

/// Parse and execute CLI commands from an iterator of arguments
pub fn parse_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    run(Cli::parse_from(args))
}

fn run(cli: Cli) -> Result<()> {
    logging::init(&cli.log_level);

    match cli.command {
        Command::Generate(cmd) => cmd.run(),
        Command::Manifest(cmd) => cmd.run(),
    }
}

#[derive(Parser, Debug)]
#[command(name = "drizzlegen")]
#[command(about = "Generate Drizzle ORM schemas from Prisma schemas")]
#[command(version)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate the schema file and any auxiliary files
    Generate(GenerateCommand),

    /// Print the generator manifest as JSON
    Manifest(ManifestCommand),
}
