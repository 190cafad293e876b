// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(crate_version!())
        .about("Pocket expense ledger with category summaries")
        .subcommand(Command::new("init").about("Initialize the ledger database"))
        .subcommand(
            Command::new("add")
                .about("Log an expense")
                .arg(
                    Arg::new("description")
                        .required(true)
                        .help("What the money went on"),
                )
                .arg(
                    Arg::new("amount")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Positive amount, e.g. 3.50"),
                )
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .required(true)
                        .help("Spending category"),
                )
                .arg(
                    Arg::new("date")
                        .short('d')
                        .long("date")
                        .help("Date as YYYY-MM-DD (defaults to today)"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an expense by its row number from `list`")
                .arg(
                    Arg::new("index")
                        .required(true)
                        .value_parser(clap::value_parser!(usize))
                        .help("Row number shown by `spendlog list`"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("Show all expenses and the running total")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print as JSON lines"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Show spending totals per category")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                )
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .help("Print as JSON lines"),
                ),
        )
}
