//! Main entry point for the optlayer CLI.
//!
//! Builds the settings registry from every configured source and renders
//! one of its views:
//! - `dump`: Print every setting as a resource file
//! - `list`: List every setting with its type, value and source
//! - `help-keys`: Print help lines for keybinding-style settings
//! - `get`: Show the value and source of one setting
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use optlayer_cli::cli::{Cli, Command};
use optlayer_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = optlayer::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        engine_config: cli.engine_config,
        resources: cli.resources,
        config: cli.config,
        theme: cli.theme,
    };

    let result = match cli.command {
        Command::Dump(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::HelpKeys(cmd) => cmd.execute(&global),
        Command::Get(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
