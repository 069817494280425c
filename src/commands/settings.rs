// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{load_from, normalize_url, save_to, DEFAULT_TIMEOUT_SECS};
use crate::utils::pretty_table;
use anyhow::Result;
use std::path::Path;

pub fn handle(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = load_from(path)?;
            let rows = vec![
                vec!["file".to_string(), path.display().to_string()],
                vec![
                    "api_url".to_string(),
                    cfg.api_url.unwrap_or_else(|| "(unset)".to_string()),
                ],
                vec![
                    "timeout_secs".to_string(),
                    cfg.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).to_string(),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-url", sub)) => {
            let url = normalize_url(sub.get_one::<String>("url").unwrap())?;
            let mut cfg = load_from(path)?;
            cfg.api_url = Some(url.clone());
            save_to(path, &cfg)?;
            println!("Backend URL set to {}", url);
        }
        Some(("set-timeout", sub)) => {
            let secs = *sub.get_one::<u64>("secs").unwrap();
            let mut cfg = load_from(path)?;
            cfg.timeout_secs = Some(secs);
            save_to(path, &cfg)?;
            println!("Request timeout set to {}s", secs);
        }
        _ => {}
    }
    Ok(())
}
