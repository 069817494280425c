// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::warn;

use cashclip::api::HttpBackend;
use cashclip::config::{self, Config, FileConfig};
use cashclip::{cli, commands, utils};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    utils::init_tracing(matches.get_flag("verbose"));

    let api = match matches.subcommand() {
        None => {
            cli::build_cli().print_help()?;
            println!();
            return Ok(());
        }
        Some(("config", sub)) => {
            return commands::settings::handle(&config::config_path()?, sub);
        }
        Some(_) => {
            let file = match config::config_path() {
                Ok(path) => config::load_or_default(&path),
                Err(e) => {
                    warn!(error = %e, "no config dir, skipping config file");
                    FileConfig::default()
                }
            };
            let env = std::env::var(config::API_URL_ENV).ok();
            let cfg = Config::resolve(
                matches.get_one::<String>("api-url").map(String::as_str),
                env.as_deref(),
                &file,
            )?;
            HttpBackend::new(&cfg)?
        }
    };

    match matches.subcommand() {
        Some(("overview", sub)) => commands::dashboard::handle(&api, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&api, sub)?,
        Some(("category", sub)) => commands::categories::handle(&api, sub)?,
        Some(("stats", sub)) => commands::reports::handle(&api, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
