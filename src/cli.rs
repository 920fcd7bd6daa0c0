use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use nuget_dependants::application::dto::OutputFormat;
use nuget_dependants::config::SettingsOverrides;
use nuget_dependants::dependants::domain::PackageId;
use std::path::PathBuf;

/// Find every NuGet package that depends on a given package
#[derive(Parser, Debug)]
#[command(name = "nuget-dependants")]
#[command(version)]
#[command(
    about = "Find every NuGet package that depends on a given package",
    long_about = "Walks the NuGet feed for packages whose latest version depends on PACKAGE_ID \
                  and writes the list to <PACKAGE_ID>-dependants.md"
)]
pub struct Args {
    /// Id of the package whose dependants should be listed
    #[arg(value_name = "PACKAGE_ID")]
    pub package_id: String,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (defaults to <PACKAGE_ID>-dependants.<ext>)
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Directory for the default output file
    #[arg(long, value_name = "DIR", conflicts_with_all = ["output", "stdout"])]
    pub output_dir: Option<PathBuf>,

    /// Write the report to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Base URL of the OData package feed
    #[arg(long, value_name = "URL")]
    pub feed_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Give up after this many feed pages
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Config file (defaults to ./nuget-dependants.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validated target package
    ///
    /// An invalid id is an argument error, so it comes back as a clap error
    /// carrying the usage text.
    pub fn target(&self) -> Result<PackageId, clap::Error> {
        PackageId::new(self.package_id.clone())
            .map_err(|e| Args::command().error(ErrorKind::ValueValidation, e))
    }

    /// Settings given on the command line, to be merged over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            feed_url: self.feed_url.clone(),
            timeout_secs: self.timeout,
            max_pages: self.max_pages,
            format: self.format,
            output_dir: self.output_dir.clone(),
        }
    }
}
