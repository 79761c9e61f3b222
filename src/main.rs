//! Canon - URL resolution toolkit.

use anyhow::Result;
use canon::cli::{self, Cli, Commands};
use canon::config::SiteConfig;
use canon::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Url { options, address } => cli::url::run_url(address, options, &config),
        Commands::Absolutize { args } => cli::absolutize::run_absolutize(args, &config),
        Commands::Redirect { admin_path, status } => {
            cli::redirect::run_redirect(admin_path, *status, &config)
        }
        Commands::Slugs => cli::slugs::run_slugs(&config),
        Commands::Serve { interface, port } => cli::serve::serve(&config, *interface, *port),
    }
}
