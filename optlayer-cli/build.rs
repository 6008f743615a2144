//! Build script for optlayer-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR/man.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let path_arg = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .help(help)
            .value_name("PATH")
            .global(true)
    };

    Command::new("optlayer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect layered settings and where each value came from")
        .long_about(
            "Resolves settings from a resource database, a resource file, theme \
             properties and command-line flags, in that order, and shows the \
             result together with the source of every value",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            path_arg(
                "engine-config",
                "Engine configuration file (namespace, help prefix, column)",
            )
            .env("OPTLAYER_ENGINE_CONFIG"),
        )
        .arg(path_arg(
            "resources",
            "Resource database file, applied first; must exist",
        ))
        .arg(path_arg(
            "config",
            "Resource file applied after the database",
        ))
        .arg(path_arg(
            "theme",
            "YAML theme properties, applied after the resource file",
        ))
        .subcommands(vec![
            Command::new("dump")
                .about("Print every setting as a resource file")
                .long_about("Print every setting in resource syntax; defaults are commented out"),
            Command::new("list")
                .about("List every setting with its type, value and source")
                .long_about("List settings as command-line flags, as text or JSON"),
            Command::new("help-keys")
                .about("Print help lines for keybinding-style settings")
                .long_about("Print markup help lines for settings with the help prefix"),
            Command::new("get")
                .about("Show the value and source of one setting")
                .long_about("Print the current value and provenance of a single setting"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("optlayer.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
