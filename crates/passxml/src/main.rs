// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! passxml binary entry point.
//!
//! Usage: `passxml <STORE> > store.xml`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Convert a pass password store into a KeePass XML document on stdout.
#[derive(Parser, Debug)]
#[command(name = "passxml", version, about, long_about = None)]
struct Cli {
    /// Root directory of the password store, e.g. ~/.password-store.
    store: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match passxml_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            passxml_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    passxml::init_tracing(&config.log.level);

    let stdout = std::io::stdout();
    match passxml::export(&cli.store, &config, stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("passxml: {e}");
            ExitCode::FAILURE
        }
    }
}
