// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use spendlog::{cli, commands, ledger::Ledger, store};

fn main() -> Result<()> {
    init_logger();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let blobs = store::SqliteStore::open_default()?;
    let mut ledger = Ledger::hydrate(blobs, store::EXPENSES_KEY);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger database at {}", store::db_path()?.display());
        }
        Some(("add", sub)) => commands::expenses::add(&mut ledger, sub)?,
        Some(("rm", sub)) => commands::expenses::rm(&mut ledger, sub)?,
        Some(("list", sub)) => commands::expenses::list(&ledger, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn init_logger() {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // Recovered ledger errors are reported at warn; keep them visible by
        // default without drowning the tables in log noise.
        None => EnvFilter::new("spendlog=warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
