mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use nuget_dependants::adapters::outbound::console::StderrProgressReporter;
use nuget_dependants::adapters::outbound::network::NuGetFeedClient;
use nuget_dependants::application::dto::DependantsRequest;
use nuget_dependants::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use nuget_dependants::application::use_cases::FindDependantsUseCase;
use nuget_dependants::config::{discover_config, load_config_from_path, Settings};
use nuget_dependants::dependants::domain::PackageId;
use nuget_dependants::dependants::services::{FeedQuery, ReportMetadataGenerator};
use nuget_dependants::shared::error::ExitCode;
use nuget_dependants::shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => process::exit(report_usage_error(e).as_i32()),
    };

    // Reject a bad package id before any config or network work
    let target = match args.target() {
        Ok(target) => target,
        Err(e) => process::exit(report_usage_error(e).as_i32()),
    };

    init_logging(args.verbose);

    if let Err(e) = run(args, target).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

/// Prints clap's message and picks the exit code
///
/// Help and version requests succeed; every other parse error prints the
/// usage text on stdout and fails.
fn report_usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::Success
        }
        _ => {
            println!("{}", e.render());
            ExitCode::Failure
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("nuget_dependants=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

async fn run(args: Args, target: PackageId) -> Result<()> {
    // Load configuration (explicit path or auto-discovered)
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args.overrides(), config.as_ref())?;
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let feed_client = NuGetFeedClient::with_timeout(settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();
    let query = FeedQuery::new(settings.feed_url.clone());

    let use_case = FindDependantsUseCase::new(feed_client, progress_reporter, query);

    // Execute use case; a failure here leaves no output file behind
    let response = use_case
        .execute(DependantsRequest::new(target, settings.max_pages))
        .await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let metadata = ReportMetadataGenerator::generate_default_metadata();
    let formatter = FormatterFactory::create(settings.format);
    let report = formatter.format(&response.target, &response.records, &metadata)?;

    let presenter_type = if args.stdout {
        PresenterType::Stdout
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| settings.default_output_path(response.target.as_str()));
        PresenterType::File(path)
    };

    PresenterFactory::create(presenter_type).present(&report)?;

    Ok(())
}
