// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn type_arg(default: &'static str) -> Arg {
    Arg::new("type")
        .long("type")
        .short('t')
        .default_value(default)
        .help("income | expense")
}

pub fn build_cli() -> Command {
    Command::new("cashclip")
        .version(crate_version!())
        .about("Track income and expenses against a remote finance backend")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Backend base URL, e.g. http://localhost:3000/api"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log requests to stderr"),
        )
        .subcommand(json_args(
            Command::new("overview").about("Balance, totals and expense ratio"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(type_arg("expense"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .help("Category id or name; defaults to the first of the type"),
                        )
                        .arg(Arg::new("note").long("note").short('n').default_value("")),
                )
                .subcommand(json_args(
                    Command::new("list").about("Transaction history").arg(
                        Arg::new("type")
                            .long("type")
                            .short('t')
                            .default_value("all")
                            .help("all | income | expense"),
                    ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(
                    Command::new("add")
                        .about("Create a category")
                        .arg(Arg::new("name").required(true))
                        .arg(type_arg("expense")),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List categories of one type")
                        .arg(type_arg("expense")),
                )),
        )
        .subcommand(json_args(
            Command::new("stats")
                .about("Monthly income and expense for a year")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .short('y')
                        .value_parser(value_parser!(i32))
                        .help("Defaults to the current year"),
                )
                .arg(
                    Arg::new("chart")
                        .long("chart")
                        .action(ArgAction::SetTrue)
                        .help("Draw a bar chart"),
                ),
        ))
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .subcommand(Command::new("show").about("Print the saved settings"))
                .subcommand(
                    Command::new("set-url")
                        .about("Save the backend base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-timeout")
                        .about("Save the request timeout in seconds")
                        .arg(
                            Arg::new("secs")
                                .required(true)
                                .value_parser(value_parser!(u64).range(1..)),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn api_url_is_global() {
        let m = build_cli().get_matches_from(["cashclip", "tx", "list", "--api-url", "http://h"]);
        assert_eq!(
            m.get_one::<String>("api-url").map(String::as_str),
            Some("http://h")
        );
    }
}
