// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (files, env, flags) --> Logging --> Command Dispatch
//!   Version | Options | Inis | Publish
//! ```

use std::process::ExitCode;

use wiki_updater::cli::global::GlobalOptions;
use wiki_updater::cli::publish::PublishArgs;
use wiki_updater::cli::{self, Command};
use wiki_updater::cmd::config::{
    build_config_loader, load_config, run_inis_command, run_options_command,
};
use wiki_updater::cmd::publish::run_publish_command;
use wiki_updater::config::types::GlobalConfig;
use wiki_updater::error::Result;
use wiki_updater::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();
    dispatch_command(&cli).await
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global, &[]).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Publish(args)) => handle_publish_command(&cli.global, args).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

async fn handle_publish_command(global: &GlobalOptions, args: &PublishArgs) -> Result<()> {
    let config = load_config(global, &args.to_config_overrides())?;
    let _log_guard = init_logging(&build_log_config(&config.global))?;
    run_publish_command(args, &config, global.dry).await?;
    Ok(())
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}
